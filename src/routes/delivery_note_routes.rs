use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::delivery_note_controller::DeliveryNoteController;
use crate::dto::delivery_note_dto::{
    CreateDeliveryNoteRequest, DeleteNoteResponse, DeliveryNoteResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_delivery_note_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_delivery_note))
        .route("/", get(list_delivery_notes))
        .route("/:id", get(get_delivery_note))
        .route("/:id", put(update_delivery_note))
        .route("/:id", delete(delete_delivery_note))
}

async fn create_delivery_note(
    State(state): State<AppState>,
    Json(request): Json<CreateDeliveryNoteRequest>,
) -> Result<Json<DeliveryNoteResponse>, AppError> {
    let controller = DeliveryNoteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_delivery_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<DeliveryNoteResponse>>, AppError> {
    let controller = DeliveryNoteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_delivery_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliveryNoteResponse>, AppError> {
    let controller = DeliveryNoteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_delivery_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateDeliveryNoteRequest>,
) -> Result<Json<DeliveryNoteResponse>, AppError> {
    let controller = DeliveryNoteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_delivery_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteNoteResponse>, AppError> {
    let controller = DeliveryNoteController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
