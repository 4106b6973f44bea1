use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use delivery_notes::config::environment::EnvironmentConfig;
use delivery_notes::create_app;
use delivery_notes::database::DatabaseConnection;
use delivery_notes::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("📦 Notas de Entrega - Backend");
    info!("==============================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let app_state = AppState::new(pool.clone(), config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🏢 Configuración de empresa:");
    info!("   POST /api/company-config - Crear perfil de empresa");
    info!("   GET  /api/company-config - Obtener perfil de empresa");
    info!("   POST /api/company-config/logo - Subir logo");
    info!("👥 Clientes:");
    info!("   POST /api/clients - Registrar cliente");
    info!("   GET  /api/clients - Listar clientes");
    info!("   GET  /api/clients/:id - Obtener cliente");
    info!("📋 Notas de entrega:");
    info!("   POST /api/delivery-notes - Emitir nota");
    info!("   GET  /api/delivery-notes - Listar notas");
    info!("   GET  /api/delivery-notes/:id - Obtener nota");
    info!("   PUT  /api/delivery-notes/:id - Actualizar nota");
    info!("   DELETE /api/delivery-notes/:id - Eliminar nota");
    info!("📊 Estadísticas:");
    info!("   GET  /api/statistics - Estadísticas agregadas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    // Liberar la conexión compartida antes de salir
    pool.close().await;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
