//! Process wiring: connection pool, adapters, and services.

use crate::config::{AppConfig, DatabaseConfig, TokenConfig};
use crate::task::{adapters::postgres::PostgresTaskRepository, services::TaskLifecycleService};
use crate::user::{
    adapters::{
        jwt::JwtTokenProvider,
        postgres::{PgPool, PostgresUserRepository},
    },
    services::UserAccountService,
};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Token provider used by the assembled application.
pub type AppTokenProvider = JwtTokenProvider<DefaultClock>;

/// User service backed by `PostgreSQL` and JWT.
pub type AppUserService = UserAccountService<PostgresUserRepository, AppTokenProvider>;

/// Task service backed by `PostgreSQL`.
pub type AppTaskService = TaskLifecycleService<PostgresTaskRepository, DefaultClock>;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The connection pool could not be created.
    #[error("failed to create database pool: {0}")]
    Pool(#[from] PoolError),
}

/// Fully wired application services.
pub struct App {
    /// Registration, login, and profile operations.
    pub users: AppUserService,
    /// Task operations.
    pub tasks: AppTaskService,
    /// Token issuer and validator, shared with the user service.
    pub tokens: Arc<AppTokenProvider>,
}

impl App {
    /// Connects to the database and wires every service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Pool`] when the pool cannot be established.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let pool = connect(&config.database)?;
        let app = Self::with_pool(pool, &config.token);
        info!(
            max_connections = config.database.max_connections,
            issuer = %config.token.issuer,
            "application wired"
        );
        Ok(app)
    }

    /// Wires every service on top of an existing pool.
    #[must_use]
    pub fn with_pool(pool: PgPool, token: &TokenConfig) -> Self {
        let clock = Arc::new(DefaultClock);
        let tokens = Arc::new(JwtTokenProvider::new(
            token.secret.as_bytes(),
            token.ttl,
            token.issuer.clone(),
            Arc::clone(&clock),
        ));
        let users = UserAccountService::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::clone(&tokens),
        );
        let tasks = TaskLifecycleService::new(Arc::new(PostgresTaskRepository::new(pool)), clock);

        Self {
            users,
            tasks,
            tokens,
        }
    }
}

/// Builds a connection pool for the configured database.
///
/// # Errors
///
/// Returns [`PoolError`] when no connection can be established.
pub fn connect(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.url.as_str());
    Pool::builder()
        .max_size(config.max_connections)
        .build(manager)
}
