use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sqlx::SqlitePool;

use crate::dto::company_dto::{
    CompanyConfigResponse, CreateCompanyConfigRequest, LogoUploadResponse,
};
use crate::repositories::company_config_repository::CompanyConfigRepository;
use crate::utils::errors::AppError;

pub struct CompanyConfigController {
    repository: CompanyConfigRepository,
}

impl CompanyConfigController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CompanyConfigRepository::new(pool),
        }
    }

    /// Crear el perfil de la empresa
    ///
    /// Solo puede existir un perfil: cualquier perfil anterior se borra
    /// antes de insertar el nuevo.
    pub async fn create(
        &self,
        request: CreateCompanyConfigRequest,
    ) -> Result<CompanyConfigResponse, AppError> {
        self.repository.delete_all().await?;

        let config = self
            .repository
            .create(request.name, request.rif, request.address, request.phone)
            .await?;

        Ok(config.into())
    }

    pub async fn get(&self) -> Result<Option<CompanyConfigResponse>, AppError> {
        let config = self.repository.find().await?;
        Ok(config.map(Into::into))
    }

    /// Subir el logo de la empresa
    ///
    /// El contenido se embebe como data URL dentro del perfil actual; si
    /// no hay perfil la operación no escribe nada pero igual responde OK,
    /// como el resto del flujo de configuración.
    pub async fn upload_logo(
        &self,
        content_type: Option<String>,
        data: Vec<u8>,
    ) -> Result<LogoUploadResponse, AppError> {
        let content_type = content_type
            .filter(|ct| ct.starts_with("image/"))
            .ok_or_else(|| AppError::BadRequest("El archivo debe ser una imagen".to_string()))?;

        let logo_data_url = encode_logo_data_url(&content_type, &data);
        self.repository.set_logo(&logo_data_url).await?;

        Ok(LogoUploadResponse {
            message: "Logo subido exitosamente".to_string(),
            logo: logo_data_url,
        })
    }
}

/// Codificar los bytes de la imagen como data URL autodescriptivo
fn encode_logo_data_url(content_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;

    #[test]
    fn test_encode_logo_data_url() {
        let data_url = encode_logo_data_url("image/png", b"abc");
        assert_eq!(data_url, "data:image/png;base64,YWJj");
    }

    #[tokio::test]
    async fn test_upload_logo_rejects_non_image() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();

        let controller = CompanyConfigController::new(pool);
        let result = controller
            .upload_logo(Some("text/plain".to_string()), b"no soy una imagen".to_vec())
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_upload_logo_without_content_type_is_rejected() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();

        let controller = CompanyConfigController::new(pool);
        let result = controller.upload_logo(None, b"\x89PNG".to_vec()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
