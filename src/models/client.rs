//! Modelo de Client
//!
//! Registro de clientes. `last_note_number` es el contador de notas
//! emitidas al cliente: nunca decrece y se incrementa exactamente una
//! vez por cada nota creada con éxito.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cliente - mapea a la tabla clients
///
/// Serialize/Deserialize también se usan para el snapshot embebido
/// dentro de cada nota de entrega (columna JSON `client_info`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    /// RIF o cédula de identidad del cliente
    pub rif_ci: String,
    pub address: String,
    /// Condición de pago en texto libre ("Crédito", "Contado", ...)
    pub payment_condition: String,
    pub last_note_number: i64,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(name: String, rif_ci: String, address: String, payment_condition: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            rif_ci,
            address,
            payment_condition,
            last_note_number: 0,
            created_at: Utc::now(),
        }
    }
}
