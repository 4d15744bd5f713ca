//! Health check

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Endpoint de liveness simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "beer-catalog",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::create_api_router;
    use crate::cache::{CacheBackend, MemoryCache};
    use crate::config::environment::{CacheBackendKind, EnvironmentConfig, DEFAULT_BEERS_API_URL};
    use crate::state::AppState;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let config = EnvironmentConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cache_backend: CacheBackendKind::Memory,
            redis_url: "redis://localhost:6379".to_string(),
            beers_api_url: DEFAULT_BEERS_API_URL.to_string(),
            cors_origins: vec![],
        };
        let state = AppState::new(config, CacheBackend::Memory(MemoryCache::new()));
        let app = create_api_router().with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["service"], "beer-catalog");
        assert_eq!(json["status"], "healthy");
    }
}
