use aws_lambda_events::event::apigw::ApiGatewayCustomAuthorizerRequest;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use model_udagram::authorizer::AuthorizerResponse;
use udagram::domain::{ports::SigningSecret, service::AuthorizerImpl};

/// Answers a TOKEN authorizer request with an allow or deny policy.
/// The invocation itself never fails, a request that cannot be verified is denied.
#[tracing::instrument(skip_all, fields(method_arn = ?event.payload.method_arn))]
pub async fn handler<S: SigningSecret>(
    authorizer: &AuthorizerImpl<S>,
    event: LambdaEvent<ApiGatewayCustomAuthorizerRequest>,
) -> Result<AuthorizerResponse, Error> {
    let token = event.payload.authorization_token.as_deref();

    Ok(authorizer.authorize(token).await)
}
