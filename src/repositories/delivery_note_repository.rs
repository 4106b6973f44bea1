use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::statistics_dto::NotesByClient;
use crate::models::client::Client;
use crate::models::delivery_note::{DeliveryLocation, DeliveryNote, Product};
use crate::utils::errors::AppError;

/// Tope de resultados para listados
const MAX_NOTES: i64 = 1000;

pub struct DeliveryNoteRepository {
    pool: SqlitePool,
}

impl DeliveryNoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, note: DeliveryNote) -> Result<DeliveryNote, AppError> {
        sqlx::query(
            r#"
            INSERT INTO delivery_notes (
                id, note_number, issue_date, client_id, client_info,
                delivery_location, products, transport,
                received_by_name, received_by_cedula, received_date, created_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
        )
        .bind(note.id)
        .bind(note.note_number.clone())
        .bind(note.issue_date)
        .bind(note.client_id)
        .bind(note.client_info.clone())
        .bind(note.delivery_location.clone())
        .bind(note.products.clone())
        .bind(note.transport.clone())
        .bind(note.received_by_name.clone())
        .bind(note.received_by_cedula.clone())
        .bind(note.received_date)
        .bind(note.created_at)
        .execute(&self.pool)
        .await?;

        Ok(note)
    }

    /// Listar notas ordenadas por fecha de creación, más recientes primero
    pub async fn find_all(&self) -> Result<Vec<DeliveryNote>, AppError> {
        let notes = sqlx::query_as::<_, DeliveryNote>(
            "SELECT * FROM delivery_notes ORDER BY created_at DESC LIMIT ?1",
        )
        .bind(MAX_NOTES)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<DeliveryNote>, AppError> {
        let note =
            sqlx::query_as::<_, DeliveryNote>("SELECT * FROM delivery_notes WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(note)
    }

    /// Reemplazar los campos editables de la nota y refrescar el snapshot
    /// del cliente; note_number e issue_date quedan intactos
    pub async fn update(
        &self,
        id: Uuid,
        client_id: Uuid,
        client_info: Json<Client>,
        delivery_location: Json<DeliveryLocation>,
        products: Json<Vec<Product>>,
        transport: String,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE delivery_notes
            SET client_id = ?2, client_info = ?3, delivery_location = ?4,
                products = ?5, transport = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(client_id)
        .bind(client_info)
        .bind(delivery_location)
        .bind(products)
        .bind(transport)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM delivery_notes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM delivery_notes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Agrupar notas por el nombre registrado en el snapshot de cada una,
    /// ordenado por cantidad descendente y sin tope de resultados
    pub async fn count_by_client_name(&self) -> Result<Vec<NotesByClient>, AppError> {
        let rows = sqlx::query_as::<_, NotesByClient>(
            r#"
            SELECT json_extract(client_info, '$.name') AS client_name, COUNT(*) AS count
            FROM delivery_notes
            GROUP BY client_name
            ORDER BY count DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
