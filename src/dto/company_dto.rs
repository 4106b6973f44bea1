use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::company_config::CompanyConfig;

// Request para crear/reemplazar el perfil de la empresa
#[derive(Debug, Deserialize)]
pub struct CreateCompanyConfigRequest {
    pub name: String,
    pub rif: String,
    pub address: String,
    pub phone: String,
}

// Response del perfil de la empresa
#[derive(Debug, Serialize)]
pub struct CompanyConfigResponse {
    pub id: Uuid,
    pub name: String,
    pub rif: String,
    pub address: String,
    pub phone: String,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CompanyConfig> for CompanyConfigResponse {
    fn from(config: CompanyConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            rif: config.rif,
            address: config.address,
            phone: config.phone,
            logo: config.logo,
            created_at: config.created_at,
        }
    }
}

// Response de subida de logo
#[derive(Debug, Serialize)]
pub struct LogoUploadResponse {
    pub message: String,
    pub logo: String,
}
