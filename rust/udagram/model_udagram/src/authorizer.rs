use serde::{Deserialize, Serialize};

/// The IAM policy language version api gateway expects
pub const POLICY_VERSION: &str = "2012-10-17";

/// The action every statement grants or denies
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// The principal reported when a request is denied
pub const ANONYMOUS_PRINCIPAL: &str = "user";

/// Whether a statement allows or denies the action
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// grant access
    Allow,
    /// refuse access
    Deny,
}

/// A single IAM statement
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// the action being controlled
    pub action: String,
    /// allow or deny
    pub effect: Effect,
    /// the resource the statement applies to
    pub resource: String,
}

/// An IAM policy document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    /// the policy language version
    pub version: String,
    /// the statements of the policy
    pub statement: Vec<Statement>,
}

/// The result a TOKEN authorizer returns to api gateway
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    /// the authenticated subject, or [ANONYMOUS_PRINCIPAL]
    pub principal_id: String,
    /// the policy api gateway enforces
    pub policy_document: PolicyDocument,
}

impl AuthorizerResponse {
    /// a policy allowing the principal to invoke every route
    pub fn allow(principal_id: impl Into<String>) -> Self {
        Self::with_effect(principal_id.into(), Effect::Allow)
    }

    /// a policy denying every route
    pub fn deny() -> Self {
        Self::with_effect(ANONYMOUS_PRINCIPAL.to_string(), Effect::Deny)
    }

    fn with_effect(principal_id: String, effect: Effect) -> Self {
        Self {
            principal_id,
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: "*".to_string(),
                }],
            },
        }
    }

    /// the effect of the single statement this response carries
    pub fn effect(&self) -> Option<Effect> {
        self.policy_document.statement.first().map(|s| s.effect)
    }
}
