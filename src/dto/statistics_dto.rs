use serde::Serialize;
use sqlx::FromRow;

// Conteo de notas agrupado por el nombre que quedó en el snapshot
// de cada nota (no por la identidad actual del cliente)
#[derive(Debug, Serialize, FromRow)]
pub struct NotesByClient {
    pub client_name: String,
    pub count: i64,
}

// Response de estadísticas agregadas
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    pub total_notes: i64,
    pub total_clients: i64,
    pub notes_by_client: Vec<NotesByClient>,
}
