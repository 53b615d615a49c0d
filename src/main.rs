use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{info, warn};

use route_backoffice::config::EnvironmentConfig;
use route_backoffice::database;
use route_backoffice::events::{EventPublisher, PublishOperations};
use route_backoffice::middleware::cors::cors_layer;
use route_backoffice::routes::create_api_router;
use route_backoffice::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚚 Route Back-office API");

    let config = EnvironmentConfig::from_env();

    let pool = database::connect_with_retries(&config.database_url).await?;

    // El schema es idempotente; si ya está aplicado o el archivo no está,
    // se loguea y se sigue
    if let Err(e) = database::init_schema(&pool, &config.schema_path).await {
        warn!("no se pudo aplicar el schema: {}", e);
    }

    let publisher: Option<Arc<dyn PublishOperations>> =
        match EventPublisher::connect(&config.redis_url).await {
            Ok(publisher) => Some(Arc::new(publisher)),
            Err(e) => {
                warn!("broker de eventos no disponible, no se publicarán eventos: {}", e);
                None
            }
        };

    let cors = cors_layer(config.cors_origins.clone());
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = AppState::new(pool, config, publisher);
    let app = create_api_router().layer(cors).with_state(state);

    info!("🌐 servidor escuchando en http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 servidor terminado");
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
            info!("🛑 Ctrl+C recibido, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 señal de terminación recibida, apagando servidor...");
        },
    }
}
