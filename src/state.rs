//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;

/// Estado compartido: el pool se abre una sola vez al arrancar y se
/// inyecta en cada handler, nunca se accede como global
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
