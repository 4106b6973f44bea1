//! Configuración de conexión a SQLite
//!
//! Este módulo maneja la conexión a la base de datos y el
//! bootstrap idempotente del schema al arrancar.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Conexión a la base de datos compartida por toda la aplicación
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear la conexión usando una URL explícita
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = create_pool(Some(database_url)).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Crear la conexión usando DATABASE_URL del entorno
    pub async fn new_default() -> Result<Self> {
        let pool = create_pool(None).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://delivery_notes.db?mode=rwc".to_string()),
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
///
/// Idempotente: cada sentencia es CREATE TABLE IF NOT EXISTS, por lo que
/// puede ejecutarse en cada arranque sin destruir datos existentes.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS company_config (
            id BLOB PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            rif TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT NOT NULL,
            logo TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id BLOB PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            rif_ci TEXT NOT NULL,
            address TEXT NOT NULL,
            payment_condition TEXT NOT NULL,
            last_note_number INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS delivery_notes (
            id BLOB PRIMARY KEY NOT NULL,
            note_number TEXT NOT NULL,
            issue_date TEXT NOT NULL,
            client_id BLOB NOT NULL,
            client_info TEXT NOT NULL,
            delivery_location TEXT NOT NULL,
            products TEXT NOT NULL,
            transport TEXT NOT NULL DEFAULT '',
            received_by_name TEXT NOT NULL DEFAULT '',
            received_by_cedula TEXT NOT NULL DEFAULT '',
            received_date TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
