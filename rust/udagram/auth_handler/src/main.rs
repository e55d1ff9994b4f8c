#![recursion_limit = "256"]

use aws_lambda_events::event::apigw::ApiGatewayCustomAuthorizerRequest;
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

    let authorizer = Arc::new(Config::from_env()?.into_authorizer().await);

    let func = service_fn(move |event: LambdaEvent<ApiGatewayCustomAuthorizerRequest>| {
        let authorizer = authorizer.clone();

        async move { handler(authorizer.as_ref(), event).await }
    });

    run(func).await
}
