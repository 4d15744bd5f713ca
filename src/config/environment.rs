//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use anyhow::{anyhow, Context, Result};

/// URL fija del catálogo de cervezas de la Punk API
pub const DEFAULT_BEERS_API_URL: &str = "https://api.punkapi.com/v2/beers";

/// Backend de cache disponible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackendKind {
    Memory,
    Redis,
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub cache_backend: CacheBackendKind,
    pub redis_url: String,
    pub beers_api_url: String,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno, con defaults de desarrollo
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid number")?;

        let cache_backend = match env::var("CACHE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" => CacheBackendKind::Memory,
            "redis" => CacheBackendKind::Redis,
            other => return Err(anyhow!("CACHE_BACKEND must be 'memory' or 'redis', got '{}'", other)),
        };

        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let beers_api_url =
            env::var("BEERS_API_URL").unwrap_or_else(|_| DEFAULT_BEERS_API_URL.to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            cache_backend,
            redis_url,
            beers_api_url,
            cors_origins,
        })
    }
}
