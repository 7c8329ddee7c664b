//! Role Provider
//!
//! The external identity collaborator, reduced to the one capability the
//! controllers consume: resolve a bearer token into a principal with roles.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{Principal, Role};
use crate::utils::{AppError, AppResult};

/// Capability predicate injected into the HTTP layer.
#[async_trait]
pub trait RoleProvider: Send + Sync {
    /// Resolve a bearer token. `Ok(None)` means the token is unknown to the
    /// identity collaborator; errors mean the collaborator itself failed.
    async fn resolve(&self, token: &str) -> AppResult<Option<Principal>>;
}

/// Fixed token table; used by tests and local development.
#[derive(Debug, Clone, Default)]
pub struct StaticRoleProvider {
    tokens: HashMap<String, Principal>,
}

impl StaticRoleProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token` as resolving to `principal`.
    pub fn with_token(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.tokens.insert(token.into(), principal);
        self
    }
}

#[async_trait]
impl RoleProvider for StaticRoleProvider {
    async fn resolve(&self, token: &str) -> AppResult<Option<Principal>> {
        Ok(self.tokens.get(token).cloned())
    }
}

/// Wire shape returned by the role-provider endpoint.
#[derive(Debug, serde::Deserialize)]
struct PrincipalResponse {
    name: String,
    #[serde(default)]
    roles: Vec<String>,
}

/// Resolves principals against the configured identity endpoint
/// (`GET {base}/principal` with the bearer token). Role tokens this service
/// does not understand are dropped.
pub struct HttpRoleProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRoleProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RoleProvider for HttpRoleProvider {
    async fn resolve(&self, token: &str) -> AppResult<Option<Principal>> {
        let url = format!("{}/principal", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::internal(format!("Role provider unreachable: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
            || status == reqwest::StatusCode::NOT_FOUND
        {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::internal(format!(
                "Role provider returned {status}"
            )));
        }

        let body: PrincipalResponse = response
            .json()
            .await
            .map_err(|e| AppError::internal(format!("Malformed role provider response: {e}")))?;

        let roles = body.roles.iter().filter_map(|r| Role::parse(r)).collect();
        Ok(Some(Principal::new(body.name, roles)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_resolves_registered_tokens() {
        let provider = StaticRoleProvider::new()
            .with_token("t1", Principal::new("admin", vec![Role::Admin]));

        let principal = provider.resolve("t1").await.unwrap().unwrap();
        assert_eq!(principal.name, "admin");
        assert!(principal.has_role(Role::Admin));

        assert!(provider.resolve("unknown").await.unwrap().is_none());
    }
}
