use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::utils::errors::AppError;

/// Tope de resultados para listados
const MAX_CLIENTS: i64 = 1000;

pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        rif_ci: String,
        address: String,
        payment_condition: String,
    ) -> Result<Client, AppError> {
        let client = Client::new(name, rif_ci, address, payment_condition);

        sqlx::query(
            r#"
            INSERT INTO clients (id, name, rif_ci, address, payment_condition, last_note_number, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(client.id)
        .bind(client.name.clone())
        .bind(client.rif_ci.clone())
        .bind(client.address.clone())
        .bind(client.payment_condition.clone())
        .bind(client.last_note_number)
        .bind(client.created_at)
        .execute(&self.pool)
        .await?;

        Ok(client)
    }

    /// Listar clientes en orden de inserción
    pub async fn find_all(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients LIMIT ?1")
            .bind(MAX_CLIENTS)
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    /// Persistir el contador de notas del cliente
    ///
    /// Escritura separada de la lectura que calculó el valor: dos
    /// llamadas concurrentes para el mismo cliente pueden leer el mismo
    /// contador y producir números duplicados.
    pub async fn update_last_note_number(
        &self,
        id: Uuid,
        last_note_number: i64,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE clients SET last_note_number = ?1 WHERE id = ?2")
            .bind(last_note_number)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
