use sqlx::SqlitePool;

use crate::models::company_config::CompanyConfig;
use crate::utils::errors::AppError;

pub struct CompanyConfigRepository {
    pool: SqlitePool,
}

impl CompanyConfigRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Borrar cualquier perfil existente (solo se permite un perfil)
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM company_config")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn create(
        &self,
        name: String,
        rif: String,
        address: String,
        phone: String,
    ) -> Result<CompanyConfig, AppError> {
        let config = CompanyConfig::new(name, rif, address, phone);

        sqlx::query(
            r#"
            INSERT INTO company_config (id, name, rif, address, phone, logo, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(config.id)
        .bind(config.name.clone())
        .bind(config.rif.clone())
        .bind(config.address.clone())
        .bind(config.phone.clone())
        .bind(config.logo.clone())
        .bind(config.created_at)
        .execute(&self.pool)
        .await?;

        Ok(config)
    }

    pub async fn find(&self) -> Result<Option<CompanyConfig>, AppError> {
        let config =
            sqlx::query_as::<_, CompanyConfig>("SELECT * FROM company_config LIMIT 1")
                .fetch_optional(&self.pool)
                .await?;

        Ok(config)
    }

    /// Guardar el logo como data URL sobre el perfil actual
    ///
    /// Si no existe perfil la actualización no afecta ninguna fila; el
    /// caller decide qué hacer con ese caso.
    pub async fn set_logo(&self, logo_data_url: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE company_config SET logo = ?1")
            .bind(logo_data_url.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
