use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use model_udagram::authorizer::AuthorizerResponse;

use crate::domain::{
    models::{AuthorizerErr, TokenClaims},
    ports::SigningSecret,
};

/// Checks bearer tokens against the shared signing secret
pub struct AuthorizerImpl<S> {
    secret: S,
    validation: Validation,
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Result<&str, AuthorizerErr> {
    if !header.to_lowercase().starts_with("bearer ") {
        return Err(AuthorizerErr::InvalidHeader);
    }

    match header.split(' ').nth(1) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthorizerErr::InvalidHeader),
    }
}

impl<S> AuthorizerImpl<S>
where
    S: SigningSecret,
{
    pub fn new(secret: S) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // exp is still checked whenever the token carries one
        validation.required_spec_claims.clear();
        validation.validate_aud = false;

        AuthorizerImpl { secret, validation }
    }

    /// Verifies the header and returns the claims of a valid token
    pub async fn verify(&self, header: Option<&str>) -> Result<TokenClaims, AuthorizerErr> {
        let header = header.ok_or(AuthorizerErr::MissingHeader)?;
        let token = bearer_token(header)?;

        let secret = self
            .secret
            .signing_secret()
            .await
            .map_err(AuthorizerErr::Secret)?;

        let data = jsonwebtoken::decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &self.validation,
        )?;

        Ok(data.claims)
    }

    /// The policy for a request. Every failure denies.
    #[tracing::instrument(skip_all)]
    pub async fn authorize(&self, header: Option<&str>) -> AuthorizerResponse {
        match self.verify(header).await {
            Ok(claims) => {
                tracing::info!(principal_id = %claims.sub, "user was authorized");
                AuthorizerResponse::allow(claims.sub)
            }
            Err(AuthorizerErr::Secret(e)) => {
                tracing::error!(error = ?e, "unable to load signing secret");
                AuthorizerResponse::deny()
            }
            Err(e) => {
                tracing::info!(reason = %e, "user not authorized");
                AuthorizerResponse::deny()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockSigningSecret;
    use cool_asserts::assert_matches;
    use jsonwebtoken::{EncodingKey, Header};
    use model_udagram::authorizer::Effect;
    use serde_json::json;
    use std::sync::Arc;

    const SECRET: &str = "a-very-secret-value";

    fn token(claims: serde_json::Value, secret: &str) -> String {
        token_with(Algorithm::HS256, claims, secret)
    }

    fn token_with(algorithm: Algorithm, claims: serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(algorithm),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn secret() -> MockSigningSecret {
        let mut secret = MockSigningSecret::new();
        secret
            .expect_signing_secret()
            .returning(|| Box::pin(async { Ok(Arc::from(SECRET)) }));
        secret
    }

    fn in_an_hour() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn it_extracts_the_bearer_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert_eq!(bearer_token("bearer abc").unwrap(), "abc");
        assert_matches!(bearer_token("Basic abc"), Err(AuthorizerErr::InvalidHeader));
        assert_matches!(bearer_token("Bearer "), Err(AuthorizerErr::InvalidHeader));
        assert_matches!(bearer_token("Bearer"), Err(AuthorizerErr::InvalidHeader));
    }

    #[tokio::test]
    async fn a_valid_token_is_allowed_as_its_subject() {
        let jwt = token(json!({"sub": "auth0|42", "exp": in_an_hour()}), SECRET);
        let header = format!("Bearer {jwt}");

        let response = AuthorizerImpl::new(secret())
            .authorize(Some(&header))
            .await;

        assert_eq!(response.principal_id, "auth0|42");
        assert_eq!(response.effect(), Some(Effect::Allow));
    }

    #[tokio::test]
    async fn every_hmac_variant_of_the_shared_secret_is_accepted() {
        let authorizer = AuthorizerImpl::new(secret());

        for algorithm in [Algorithm::HS384, Algorithm::HS512] {
            let jwt = token_with(algorithm, json!({"sub": "auth0|42", "exp": in_an_hour()}), SECRET);

            let response = authorizer.authorize(Some(&format!("Bearer {jwt}"))).await;

            assert_eq!(response.effect(), Some(Effect::Allow), "{algorithm:?}");
        }
    }

    #[tokio::test]
    async fn a_token_without_exp_is_accepted() {
        let jwt = token(json!({"sub": "auth0|42"}), SECRET);

        let claims = AuthorizerImpl::new(secret())
            .verify(Some(&format!("Bearer {jwt}")))
            .await
            .unwrap();

        assert_eq!(claims.sub, "auth0|42");
    }

    #[tokio::test]
    async fn a_token_signed_with_another_secret_is_denied() {
        let jwt = token(json!({"sub": "auth0|42", "exp": in_an_hour()}), "other");

        let authorizer = AuthorizerImpl::new(secret());
        let header = format!("Bearer {jwt}");

        assert_matches!(
            authorizer.verify(Some(&header)).await,
            Err(AuthorizerErr::InvalidToken(_))
        );
        let response = authorizer.authorize(Some(&header)).await;
        assert_eq!(response, AuthorizerResponse::deny());
    }

    #[tokio::test]
    async fn an_expired_token_is_denied() {
        let jwt = token(json!({"sub": "auth0|42", "exp": 1_000_000}), SECRET);

        let response = AuthorizerImpl::new(secret())
            .authorize(Some(&format!("Bearer {jwt}")))
            .await;

        assert_eq!(response.principal_id, "user");
        assert_eq!(response.effect(), Some(Effect::Deny));
    }

    #[tokio::test]
    async fn a_missing_header_is_denied_without_reading_the_secret() {
        let mut secret = MockSigningSecret::new();
        secret.expect_signing_secret().never();

        let authorizer = AuthorizerImpl::new(secret);

        assert_matches!(authorizer.verify(None).await, Err(AuthorizerErr::MissingHeader));
        assert_eq!(authorizer.authorize(None).await, AuthorizerResponse::deny());
    }

    #[tokio::test]
    async fn an_unreadable_secret_is_denied() {
        let mut secret = MockSigningSecret::new();
        secret
            .expect_signing_secret()
            .returning(|| Box::pin(async { Err(anyhow::anyhow!("access denied")) }));
        let jwt = token(json!({"sub": "auth0|42"}), SECRET);

        let response = AuthorizerImpl::new(secret)
            .authorize(Some(&format!("Bearer {jwt}")))
            .await;

        assert_eq!(response, AuthorizerResponse::deny());
    }
}
