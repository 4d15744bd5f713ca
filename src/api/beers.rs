//! Endpoint del catálogo de cervezas

use axum::{extract::State, response::Json, routing::get, Router};

use crate::models::Beer;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_beers_router() -> Router<AppState> {
    Router::new().route("/", get(get_all_beers))
}

/// GET /api/beers - devuelve el catálogo completo (cache primero)
pub async fn get_all_beers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Beer>>, AppError> {
    log::info!("🍺 Beers request received");
    let beers = state.beer_service.fetch().await?;
    Ok(Json(beers))
}
