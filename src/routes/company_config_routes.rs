use axum::{
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::company_config_controller::CompanyConfigController;
use crate::dto::company_dto::{
    CompanyConfigResponse, CreateCompanyConfigRequest, LogoUploadResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_config_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company_config))
        .route("/", get(get_company_config))
        .route("/logo", post(upload_logo))
}

async fn create_company_config(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyConfigRequest>,
) -> Result<Json<CompanyConfigResponse>, AppError> {
    let controller = CompanyConfigController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_company_config(
    State(state): State<AppState>,
) -> Result<Json<Option<CompanyConfigResponse>>, AppError> {
    let controller = CompanyConfigController::new(state.pool.clone());
    let response = controller.get().await?;
    Ok(Json(response))
}

async fn upload_logo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<LogoUploadResponse>, AppError> {
    let controller = CompanyConfigController::new(state.pool.clone());

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().map(|ct| ct.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;

            let response = controller.upload_logo(content_type, data.to_vec()).await?;
            return Ok(Json(response));
        }
    }

    Err(AppError::BadRequest(
        "El archivo debe ser una imagen".to_string(),
    ))
}
