use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::statistics_controller::StatisticsController;
use crate::dto::statistics_dto::StatisticsResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_statistics_router() -> Router<AppState> {
    Router::new().route("/", get(get_statistics))
}

async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<StatisticsResponse>, AppError> {
    let controller = StatisticsController::new(state.pool.clone());
    let response = controller.get_statistics().await?;
    Ok(Json(response))
}
