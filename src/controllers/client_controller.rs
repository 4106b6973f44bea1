use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::client_dto::{ClientResponse, CreateClientRequest};
use crate::repositories::client_repository::ClientRepository;
use crate::utils::errors::AppError;

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    /// Registrar un cliente nuevo con el contador de notas en cero
    pub async fn create(&self, request: CreateClientRequest) -> Result<ClientResponse, AppError> {
        let client = self
            .repository
            .create(
                request.name,
                request.rif_ci,
                request.address,
                request.payment_condition,
            )
            .await?;

        Ok(client.into())
    }

    pub async fn list(&self) -> Result<Vec<ClientResponse>, AppError> {
        let clients = self.repository.find_all().await?;
        Ok(clients.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ClientResponse, AppError> {
        let client = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(client.into())
    }
}
