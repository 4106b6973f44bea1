use sqlx::SqlitePool;

use crate::dto::statistics_dto::StatisticsResponse;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::delivery_note_repository::DeliveryNoteRepository;
use crate::utils::errors::AppError;

pub struct StatisticsController {
    note_repository: DeliveryNoteRepository,
    client_repository: ClientRepository,
}

impl StatisticsController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            note_repository: DeliveryNoteRepository::new(pool.clone()),
            client_repository: ClientRepository::new(pool),
        }
    }

    /// Estadísticas agregadas: lectura pura, sin efectos secundarios
    pub async fn get_statistics(&self) -> Result<StatisticsResponse, AppError> {
        let total_notes = self.note_repository.count().await?;
        let total_clients = self.client_repository.count().await?;
        let notes_by_client = self.note_repository.count_by_client_name().await?;

        Ok(StatisticsResponse {
            total_notes,
            total_clients,
            notes_by_client,
        })
    }
}
