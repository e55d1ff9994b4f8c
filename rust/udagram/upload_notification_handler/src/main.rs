#![recursion_limit = "256"]

use aws_lambda_events::event::sns::SnsEvent;
use config::Config;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use std::sync::Arc;
use udagram_entrypoint::UdagramEntrypoint;

mod config;
mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    UdagramEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let notifier = Arc::new(Config::from_env()?.into_notifier().await);

    let func = service_fn(move |event: LambdaEvent<SnsEvent>| {
        let notifier = notifier.clone();

        async move { handler(notifier.as_ref(), event).await }
    });

    run(func).await
}
