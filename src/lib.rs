//! Backend de gestión de notas de entrega
//!
//! Perfil de empresa, registro de clientes y notas de entrega con
//! numeración correlativa por cliente, más un endpoint de estadísticas.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

/// Armar el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.allows_any_origin() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest(
            "/api/company-config",
            routes::company_config_routes::create_company_config_router(),
        )
        .nest("/api/clients", routes::client_routes::create_client_router())
        .nest(
            "/api/delivery-notes",
            routes::delivery_note_routes::create_delivery_note_router(),
        )
        .nest(
            "/api/statistics",
            routes::statistics_routes::create_statistics_router(),
        )
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "API de notas de entrega funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
