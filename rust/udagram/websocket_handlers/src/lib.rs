//! `$connect` and `$disconnect` handlers of the udagram websocket api

use lambda_http::{
    Body, Error, Request, RequestExt, Response, http::StatusCode, request::RequestContext,
};
use udagram::domain::{
    ports::{ConnectionRepo, TimeGetter},
    service::ConnectionRegistry,
};

pub mod config;

/// The connection id of a websocket request, [None] for any other kind of request
fn connection_id(req: &Request) -> Option<String> {
    match req.request_context_ref() {
        Some(RequestContext::WebSocket(ws_context)) => ws_context.connection_id.clone(),
        _ => None,
    }
}

fn respond(status: StatusCode, body: Body) -> Result<Response<Body>, Error> {
    Ok(Response::builder().status(status).body(body)?)
}

fn not_websocket() -> Result<Response<Body>, Error> {
    respond(
        StatusCode::BAD_REQUEST,
        Body::from("Request must be a WebSocket request"),
    )
}

#[tracing::instrument(skip_all)]
pub async fn connect<C, T>(
    registry: &ConnectionRegistry<C, T>,
    req: Request,
) -> Result<Response<Body>, Error>
where
    C: ConnectionRepo,
    T: TimeGetter,
{
    let Some(connection_id) = connection_id(&req) else {
        return not_websocket();
    };

    registry.connect(&connection_id).await?;
    respond(StatusCode::OK, Body::Empty)
}

#[tracing::instrument(skip_all)]
pub async fn disconnect<C, T>(
    registry: &ConnectionRegistry<C, T>,
    req: Request,
) -> Result<Response<Body>, Error>
where
    C: ConnectionRepo,
    T: TimeGetter,
{
    let Some(connection_id) = connection_id(&req) else {
        return not_websocket();
    };

    registry.disconnect(&connection_id).await?;
    respond(StatusCode::OK, Body::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lambda_http::aws_lambda_events::apigw::ApiGatewayWebsocketProxyRequestContext;
    use mockall::predicate::eq;
    use serde_json::json;
    use udagram::domain::ports::{MockConnectionRepo, MockTimeGetter};

    fn ws_request(connection_id: &str) -> Request {
        let ws_context: ApiGatewayWebsocketProxyRequestContext = serde_json::from_value(json!({
            "routeKey": "$connect",
            "eventType": "CONNECT",
            "connectionId": connection_id,
            "apiId": "abcd1234",
            "stage": "dev",
            "requestId": "Lz5kqF4ZIAMFhZQ=",
            "domainName": "abcd1234.execute-api.us-east-1.amazonaws.com",
            "connectedAt": 1651406400000_i64,
            "requestTimeEpoch": 1651406400000_i64,
            "identity": { "sourceIp": "127.0.0.1" }
        }))
        .unwrap();

        Request::default().with_request_context(RequestContext::WebSocket(ws_context))
    }

    fn time() -> MockTimeGetter {
        let mut time = MockTimeGetter::new();
        time.expect_now()
            .returning(|| Utc.with_ymd_and_hms(2022, 5, 1, 12, 0, 0).unwrap());
        time
    }

    #[tokio::test]
    async fn connect_registers_the_connection() {
        let mut repo = MockConnectionRepo::new();
        repo.expect_put_connection()
            .withf(|c| c.id == "Lz5kqcIAvHcCJHA=")
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let res = connect(
            &ConnectionRegistry::new(repo, time()),
            ws_request("Lz5kqcIAvHcCJHA="),
        )
        .await
        .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn disconnect_removes_the_connection() {
        let mut repo = MockConnectionRepo::new();
        repo.expect_delete_connection()
            .with(eq("Lz5kqcIAvHcCJHA="))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let res = disconnect(
            &ConnectionRegistry::new(repo, time()),
            ws_request("Lz5kqcIAvHcCJHA="),
        )
        .await
        .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn other_requests_are_rejected() {
        let mut repo = MockConnectionRepo::new();
        repo.expect_put_connection().never();

        let res = connect(&ConnectionRegistry::new(repo, time()), Request::default())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn a_failed_write_fails_the_invocation() {
        let mut repo = MockConnectionRepo::new();
        repo.expect_put_connection()
            .returning(|_| Box::pin(async { Err(anyhow::anyhow!("throttled")) }));

        let res = connect(
            &ConnectionRegistry::new(repo, time()),
            ws_request("Lz5kqcIAvHcCJHA="),
        )
        .await;

        assert!(res.is_err());
    }
}
