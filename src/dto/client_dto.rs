use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::client::Client;

// Request para crear un cliente
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub rif_ci: String,
    pub address: String,
    pub payment_condition: String,
}

// Response de cliente
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub rif_ci: String,
    pub address: String,
    pub payment_condition: String,
    pub last_note_number: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            rif_ci: client.rif_ci,
            address: client.address,
            payment_condition: client.payment_condition,
            last_note_number: client.last_note_number,
            created_at: client.created_at,
        }
    }
}
