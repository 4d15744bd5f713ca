//! API endpoints
//!
//! Este módulo contiene los endpoints de la API.

pub mod beers;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/beers", beers::create_beers_router())
        .merge(health::create_health_router())
}
