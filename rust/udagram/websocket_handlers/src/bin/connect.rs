#![recursion_limit = "256"]

use std::sync::Arc;

use lambda_http::{Error, Request, run, service_fn, tracing};
use udagram_entrypoint::UdagramEntrypoint;
use websocket_handlers::config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    UdagramEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let registry = Arc::new(Config::from_env()?.into_registry().await);

    let func = service_fn(move |req: Request| {
        let registry = registry.clone();

        async move { websocket_handlers::connect(registry.as_ref(), req).await }
    });

    run(func).await
}
