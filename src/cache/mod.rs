//! Cache
//!
//! Este módulo contiene los sistemas de cache: el backend en memoria
//! (por defecto) y el backend Redis, ambos detrás del mismo trait.

pub mod memory_cache;
pub mod redis_client;

pub use memory_cache::MemoryCache;
pub use redis_client::RedisClient;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::environment::{CacheBackendKind, EnvironmentConfig};

/// Operaciones de cache que consume el resto del sistema
#[async_trait::async_trait]
pub trait CacheOperations: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>>;
    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()>;
}

/// Backend de cache concreto, elegido por configuración al arrancar
#[derive(Clone)]
pub enum CacheBackend {
    Memory(MemoryCache),
    Redis(RedisClient),
}

impl CacheBackend {
    /// Construir el backend indicado en la configuración
    pub async fn from_config(config: &EnvironmentConfig) -> Result<Self> {
        match config.cache_backend {
            CacheBackendKind::Memory => Ok(CacheBackend::Memory(MemoryCache::new())),
            CacheBackendKind::Redis => {
                let client = RedisClient::new(&config.redis_url).await?;
                Ok(CacheBackend::Redis(client))
            }
        }
    }
}

#[async_trait::async_trait]
impl CacheOperations for CacheBackend {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        match self {
            CacheBackend::Memory(cache) => cache.get(key).await,
            CacheBackend::Redis(cache) => cache.get(key).await,
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
        match self {
            CacheBackend::Memory(cache) => cache.set(key, value).await,
            CacheBackend::Redis(cache) => cache.set(key, value).await,
        }
    }
}
