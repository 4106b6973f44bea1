//! Modelo de CompanyConfig
//!
//! Perfil único de la empresa emisora de notas de entrega. La tabla
//! `company_config` contiene cero o una fila en todo momento: crear un
//! perfil nuevo borra cualquier fila anterior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Perfil de la empresa - mapea a la tabla company_config
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyConfig {
    pub id: Uuid,
    pub name: String,
    pub rif: String,
    pub address: String,
    pub phone: String,
    /// Logo embebido como data URL (`data:image/png;base64,...`)
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CompanyConfig {
    pub fn new(name: String, rif: String, address: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            rif,
            address,
            phone,
            logo: None,
            created_at: Utc::now(),
        }
    }
}
