//! Cliente HTTP de la Punk API
//!
//! El trait `UpstreamClient` es la costura que permite ejercitar la
//! lógica de fetch sin red; `PunkApiClient` es la implementación real
//! sobre reqwest.

use crate::utils::errors::AppResult;

/// Respuesta cruda del upstream: status literal + body sin decodificar
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Cliente capaz de emitir un GET al upstream
#[async_trait::async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn get(&self, url: &str) -> AppResult<UpstreamResponse>;
}

/// Cliente reqwest para la Punk API
pub struct PunkApiClient {
    client: reqwest::Client,
}

impl PunkApiClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for PunkApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UpstreamClient for PunkApiClient {
    async fn get(&self, url: &str) -> AppResult<UpstreamResponse> {
        log::info!("🌐 Making request to: {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", "BeerCatalog/1.0")
            .send()
            .await?;

        let status = response.status().as_u16();
        log::info!("📡 Response status: {}", status);

        let body = response.text().await?;

        Ok(UpstreamResponse { status, body })
    }
}
