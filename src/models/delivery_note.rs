//! Modelo de DeliveryNote
//!
//! Nota de entrega con numeración por cliente. La nota embebe una copia
//! del cliente al momento de emisión (`client_info`): esa copia es un
//! registro histórico y NO se sincroniza con ediciones posteriores del
//! cliente, salvo cuando la nota misma se actualiza.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::client::Client;

/// Lugar de entrega embebido en la nota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryLocation {
    pub address: String,
    pub contact_person: String,
    pub phone: String,
}

/// Línea de producto de la nota
///
/// El orden de la secuencia se conserva tal como lo envió el caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub description: String,
    pub package_unit: String,
    pub package_quantity: i64,
    pub sale_unit: String,
    pub sale_quantity: i64,
}

/// Nota de entrega - mapea a la tabla delivery_notes
///
/// Los documentos embebidos (snapshot del cliente, lugar de entrega y
/// productos) se guardan en columnas JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeliveryNote {
    pub id: Uuid,
    /// Número derivado `{rif_ci}-{contador con 3 dígitos}`, único por cliente
    pub note_number: String,
    pub issue_date: DateTime<Utc>,
    pub client_id: Uuid,
    pub client_info: Json<Client>,
    pub delivery_location: Json<DeliveryLocation>,
    pub products: Json<Vec<Product>>,
    pub transport: String,
    /// Campos de recepción: se llenan en el formulario impreso, ningún
    /// endpoint los escribe
    pub received_by_name: String,
    pub received_by_cedula: String,
    pub received_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
