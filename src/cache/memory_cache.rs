//! Cache en memoria
//!
//! Implementación por defecto: un HashMap compartido dentro del proceso.
//! Las entradas viven mientras viva el proceso; no hay TTL ni expiración.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use super::CacheOperations;

/// Cache keyed en memoria compartido entre handlers
#[derive(Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CacheOperations for MemoryCache {
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> Result<Option<T>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(value) => {
                debug!("📥 Cache HIT para clave: {}", key);
                let deserialized: T = serde_json::from_str(value)?;
                Ok(Some(deserialized))
            }
            None => {
                debug!("❌ Cache MISS para clave: {}", key);
                Ok(None)
            }
        }
    }

    async fn set<T: Serialize + Send + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let serialized = serde_json::to_string(value)?;
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), serialized);
        debug!("💾 Cache SET para clave: {}", key);
        Ok(())
    }
}
