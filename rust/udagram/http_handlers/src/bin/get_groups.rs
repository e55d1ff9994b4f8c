#![recursion_limit = "256"]

use std::sync::Arc;

use http_handlers::{config::Config, handlers};
use lambda_http::{Error, Request, run, service_fn, tracing};
use udagram_entrypoint::UdagramEntrypoint;

#[tokio::main]
async fn main() -> Result<(), Error> {
    UdagramEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let gallery = Arc::new(Config::from_env()?.into_gallery().await);

    let func = service_fn(move |req: Request| {
        let gallery = gallery.clone();

        async move { handlers::get_groups(gallery.as_ref(), req).await }
    });

    run(func).await
}
