//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno
//! y la selección del backend de cache.

pub mod environment;

pub use environment::*;
