#![recursion_limit = "256"]

use aws_lambda_events::event::dynamodb::Event;
use config::Config;
use handler::handler;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use std::sync::Arc;
use udagram::domain::service::SearchSync;
use udagram_entrypoint::UdagramEntrypoint;

mod config;
mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    UdagramEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let client = Config::from_env()?.into_client().await?;

    // without the index the first insert falls back to dynamic mappings
    if let Err(e) = client.ensure_index_exists().await {
        tracing::warn!(error = ?e, index = %client.index(), "unable to ensure search index exists");
    }

    let sync = Arc::new(SearchSync::new(client));

    let func = service_fn(move |event: LambdaEvent<Event>| {
        let sync = sync.clone();

        async move { handler(sync.as_ref(), event).await }
    });

    run(func).await
}
