mod api;
mod cache;
mod clients;
mod config;
mod middleware;
mod models;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use cache::CacheBackend;
use config::environment::{CacheBackendKind, EnvironmentConfig};
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🍺 Beer Catalog API");
    info!("===================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar el backend de cache elegido por configuración
    let cache = match CacheBackend::from_config(&config).await {
        Ok(cache) => {
            match config.cache_backend {
                CacheBackendKind::Memory => info!("✅ Cache en memoria inicializado"),
                CacheBackendKind::Redis => info!("✅ Cache Redis inicializado"),
            }
            cache
        }
        Err(e) => {
            error!("❌ Error inicializando el cache: {}", e);
            return Err(anyhow::anyhow!("Error de cache: {}", e));
        }
    };

    // CORS: permisivo salvo que haya orígenes configurados
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app_state = AppState::new(config, cache);
    let app = Router::new()
        .merge(api::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/beers - Catálogo de cervezas (cacheado)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
