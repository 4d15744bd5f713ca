//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::cache::CacheBackend;
use crate::clients::PunkApiClient;
use crate::config::environment::EnvironmentConfig;
use crate::services::BeerService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub beer_service: Arc<BeerService<CacheBackend, PunkApiClient>>,
}

impl AppState {
    /// Composición explícita: el servicio recibe sus colaboradores
    /// por constructor, no por contenedor de dependencias.
    pub fn new(config: EnvironmentConfig, cache: CacheBackend) -> Self {
        let beer_service = Arc::new(BeerService::new(
            cache,
            PunkApiClient::new(),
            config.beers_api_url.clone(),
        ));

        Self {
            config,
            beer_service,
        }
    }
}
