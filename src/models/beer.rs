//! Modelo de cerveza
//!
//! La Punk API devuelve objetos con muchos campos (tagline, abv, ibu,
//! ingredientes...). Solo `id` y `name` se tipan explícitamente; el resto
//! se transporta sin interpretar para que el servicio sea un passthrough.

use serde::{Deserialize, Serialize};

/// Una cerveza del catálogo de la Punk API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: i64,
    pub name: String,
    /// Resto de atributos del schema upstream, sin validar
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
