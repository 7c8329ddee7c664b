//! Shared server state

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{HttpRoleProvider, RoleProvider};
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared handles every handler needs: configuration, the connection pool
/// and the injected role provider. `Clone` is shallow (Arc / pool handles).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// External identity collaborator, reduced to the role-check capability
    pub role_provider: Arc<dyn RoleProvider>,
}

impl ServerState {
    /// Assemble state from already-built parts (tests wire a
    /// [`crate::auth::StaticRoleProvider`] and an in-memory pool here).
    pub fn new(config: Config, pool: SqlitePool, role_provider: Arc<dyn RoleProvider>) -> Self {
        Self {
            config,
            pool,
            role_provider,
        }
    }

    /// Production wiring: open the database per `config` and point the role
    /// provider at the configured identity endpoint.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.db_path).await?;
        let role_provider = Arc::new(HttpRoleProvider::new(config.auth_server_url.clone()));
        Ok(Self::new(config.clone(), db.pool, role_provider))
    }
}
