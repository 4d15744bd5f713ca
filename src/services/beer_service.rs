//! Servicio de cervezas
//!
//! Un wrapper simple sobre la Punk API con una capa de memoización de
//! una sola entrada: primero el cache, solo después el upstream.

use crate::cache::CacheOperations;
use crate::clients::UpstreamClient;
use crate::models::Beer;
use crate::utils::errors::{AppError, AppResult};

/// Clave fija bajo la que se memoiza el catálogo completo
const CACHE_KEY: &str = "beers";

/// Fetch-or-populate sobre el catálogo de cervezas
pub struct BeerService<C, U> {
    cache: C,
    upstream: U,
    beers_url: String,
}

impl<C, U> BeerService<C, U>
where
    C: CacheOperations,
    U: UpstreamClient,
{
    /// Crear el servicio con sus colaboradores explícitos
    pub fn new(cache: C, upstream: U, beers_url: String) -> Self {
        Self {
            cache,
            upstream,
            beers_url,
        }
    }

    /// Devuelve la lista de cervezas, consultando el cache antes que la API.
    ///
    /// Con HIT no se toca el upstream. Con MISS se hace un único GET,
    /// se decodifica el body, se escribe el cache y se devuelve la lista.
    /// Invocaciones concurrentes pueden repoblar la misma clave; gana el
    /// último escritor.
    pub async fn fetch(&self) -> AppResult<Vec<Beer>> {
        let cached: Option<Vec<Beer>> = self
            .cache
            .get(CACHE_KEY)
            .await
            .map_err(|e| AppError::Cache(e.to_string()))?;

        if let Some(beers) = cached {
            log::info!("✅ Cache HIT para '{}': {} cervezas", CACHE_KEY, beers.len());
            return Ok(beers);
        }

        log::info!("❌ Cache MISS para '{}', consultando la Punk API", CACHE_KEY);
        let response = self.upstream.get(&self.beers_url).await?;

        match response.status {
            200..=299 => {
                let beers: Vec<Beer> = serde_json::from_str(&response.body)?;

                // El fetch no termina hasta que la escritura confirma
                self.cache
                    .set(CACHE_KEY, &beers)
                    .await
                    .map_err(|e| AppError::Cache(e.to_string()))?;

                log::info!("💾 {} cervezas almacenadas en cache", beers.len());
                Ok(beers)
            }
            status => {
                log::error!("❌ La Punk API devolvió un status inesperado: {}", status);
                Err(AppError::Upstream(format!(
                    "Unexpected service response: {}",
                    status
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::clients::UpstreamResponse;
    use anyhow::anyhow;
    use serde::{de::DeserializeOwned, Serialize};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const BUZZ_BODY: &str = r#"[{"id":1,"name":"Buzz"}]"#;
    const TEST_URL: &str = "https://api.punkapi.com/v2/beers";

    /// Upstream de prueba que cuenta cuántas veces se le llama
    #[derive(Clone)]
    struct MockUpstream {
        status: u16,
        body: String,
        calls: Arc<AtomicUsize>,
    }

    impl MockUpstream {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl UpstreamClient for MockUpstream {
        async fn get(&self, _url: &str) -> AppResult<UpstreamResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(UpstreamResponse {
                status: self.status,
                body: self.body.clone(),
            })
        }
    }

    /// Cache que falla en toda operación
    struct BrokenCache;

    #[async_trait::async_trait]
    impl CacheOperations for BrokenCache {
        async fn get<T: DeserializeOwned + Send>(&self, _key: &str) -> anyhow::Result<Option<T>> {
            Err(anyhow!("redis connection refused"))
        }

        async fn set<T: Serialize + Send + Sync>(
            &self,
            _key: &str,
            _value: &T,
        ) -> anyhow::Result<()> {
            Err(anyhow!("redis connection refused"))
        }
    }

    fn service(
        cache: MemoryCache,
        upstream: &MockUpstream,
    ) -> BeerService<MemoryCache, MockUpstream> {
        BeerService::new(cache, upstream.clone(), TEST_URL.to_string())
    }

    #[tokio::test]
    async fn test_cache_hit_skips_upstream() {
        let cache = MemoryCache::new();
        let seeded: Vec<Beer> = serde_json::from_str(BUZZ_BODY).unwrap();
        cache.set("beers", &seeded).await.unwrap();

        let upstream = MockUpstream::new(200, r#"[{"id":99,"name":"Other"}]"#);
        let beers = service(cache, &upstream).fetch().await.unwrap();

        assert_eq!(beers, seeded);
        assert_eq!(upstream.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cache_miss_populates_and_returns() {
        let cache = MemoryCache::new();
        let upstream = MockUpstream::new(200, BUZZ_BODY);

        let beers = service(cache.clone(), &upstream).fetch().await.unwrap();

        assert_eq!(beers.len(), 1);
        assert_eq!(beers[0].id, 1);
        assert_eq!(beers[0].name, "Buzz");
        assert_eq!(upstream.call_count(), 1);

        let stored: Option<Vec<Beer>> = cache.get("beers").await.unwrap();
        assert_eq!(stored, Some(beers));
    }

    #[tokio::test]
    async fn test_repeated_fetch_hits_upstream_once() {
        let cache = MemoryCache::new();
        let upstream = MockUpstream::new(200, BUZZ_BODY);
        let service = service(cache, &upstream);

        let first = service.fetch().await.unwrap();
        let second = service.fetch().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(upstream.call_count(), 1);
    }

    #[tokio::test]
    async fn test_2xx_boundary_statuses_decode() {
        for status in [200, 204, 299] {
            let cache = MemoryCache::new();
            let upstream = MockUpstream::new(status, BUZZ_BODY);
            let beers = service(cache, &upstream).fetch().await.unwrap();
            assert_eq!(beers[0].name, "Buzz");
        }
    }

    #[tokio::test]
    async fn test_non_2xx_fails_with_status_in_message() {
        for status in [199u16, 300, 404, 500] {
            let cache = MemoryCache::new();
            let upstream = MockUpstream::new(status, BUZZ_BODY);

            let error = service(cache.clone(), &upstream).fetch().await.unwrap_err();

            match error {
                AppError::Upstream(msg) => assert!(msg.contains(&status.to_string())),
                other => panic!("expected Upstream error, got {:?}", other),
            }

            // El cache no se escribe en el camino de error
            let stored: Option<Vec<Beer>> = cache.get("beers").await.unwrap();
            assert!(stored.is_none());
        }
    }

    #[tokio::test]
    async fn test_decode_failure_propagates_without_cache_write() {
        let cache = MemoryCache::new();
        let upstream = MockUpstream::new(200, r#"{"not":"a list"}"#);

        let error = service(cache.clone(), &upstream).fetch().await.unwrap_err();
        assert!(matches!(error, AppError::Decode(_)));

        let stored: Option<Vec<Beer>> = cache.get("beers").await.unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_cache_failure_propagates() {
        let upstream = MockUpstream::new(200, BUZZ_BODY);
        let service = BeerService::new(BrokenCache, upstream.clone(), TEST_URL.to_string());

        let error = service.fetch().await.unwrap_err();
        assert!(matches!(error, AppError::Cache(_)));

        // Sin fallback a fetch directo: el upstream nunca se consulta
        assert_eq!(upstream.call_count(), 0);
    }
}
