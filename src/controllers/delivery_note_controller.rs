use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::delivery_note_dto::{
    CreateDeliveryNoteRequest, DeleteNoteResponse, DeliveryNoteResponse,
};
use crate::models::delivery_note::DeliveryNote;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::delivery_note_repository::DeliveryNoteRepository;
use crate::utils::errors::AppError;

pub struct DeliveryNoteController {
    note_repository: DeliveryNoteRepository,
    client_repository: ClientRepository,
}

impl DeliveryNoteController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            note_repository: DeliveryNoteRepository::new(pool.clone()),
            client_repository: ClientRepository::new(pool),
        }
    }

    /// Emitir una nota de entrega
    ///
    /// Numeración correlativa por cliente: se lee el contador actual, se
    /// calcula el siguiente y se escribe de vuelta en dos operaciones
    /// separadas. El snapshot embebido es el cliente tal como se leyó,
    /// con el contador previo a esta emisión.
    pub async fn create(
        &self,
        request: CreateDeliveryNoteRequest,
    ) -> Result<DeliveryNoteResponse, AppError> {
        let client = self
            .client_repository
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        let next_number = client.last_note_number + 1;
        let note_number = format_note_number(&client.rif_ci, next_number);

        self.client_repository
            .update_last_note_number(client.id, next_number)
            .await?;

        let now = Utc::now();
        let note = DeliveryNote {
            id: Uuid::new_v4(),
            note_number,
            issue_date: now,
            client_id: client.id,
            client_info: Json(client),
            delivery_location: Json(request.delivery_location),
            products: Json(request.products),
            transport: request.transport,
            received_by_name: String::new(),
            received_by_cedula: String::new(),
            received_date: None,
            created_at: now,
        };

        let note = self.note_repository.create(note).await?;
        Ok(note.into())
    }

    pub async fn list(&self) -> Result<Vec<DeliveryNoteResponse>, AppError> {
        let notes = self.note_repository.find_all().await?;
        Ok(notes.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DeliveryNoteResponse, AppError> {
        let note = self
            .note_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Nota de entrega no encontrada".to_string()))?;

        Ok(note.into())
    }

    /// Actualizar una nota existente
    ///
    /// Reemplaza lugar de entrega, productos y transporte, y refresca el
    /// snapshot con los datos actuales del cliente. El número de nota y
    /// la fecha de emisión nunca cambian.
    pub async fn update(
        &self,
        id: Uuid,
        request: CreateDeliveryNoteRequest,
    ) -> Result<DeliveryNoteResponse, AppError> {
        if self.note_repository.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(
                "Nota de entrega no encontrada".to_string(),
            ));
        }

        let client = self
            .client_repository
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        self.note_repository
            .update(
                id,
                client.id,
                Json(client),
                Json(request.delivery_location),
                Json(request.products),
                request.transport,
            )
            .await?;

        // Releer la nota para responder con el estado persistido
        let updated = self.note_repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::Internal("La nota desapareció durante la actualización".to_string())
        })?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteNoteResponse, AppError> {
        let deleted = self.note_repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(
                "Nota de entrega no encontrada".to_string(),
            ));
        }

        Ok(DeleteNoteResponse {
            message: "Nota de entrega eliminada exitosamente".to_string(),
        })
    }
}

/// Formatear el número de nota: rif_ci del cliente más el contador con
/// mínimo tres dígitos
fn format_note_number(rif_ci: &str, number: i64) -> String {
    format!("{}-{:03}", rif_ci, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_note_number_pads_to_three_digits() {
        assert_eq!(format_note_number("J-502964860", 1), "J-502964860-001");
        assert_eq!(format_note_number("J-502964860", 42), "J-502964860-042");
        assert_eq!(format_note_number("V-12345678", 999), "V-12345678-999");
    }

    #[test]
    fn test_format_note_number_beyond_three_digits() {
        // A partir de 1000 el número simplemente deja de llevar ceros
        assert_eq!(format_note_number("J-502964860", 1000), "J-502964860-1000");
    }
}
