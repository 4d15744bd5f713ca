//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean
//! la respuesta de la Punk API.

pub mod beer;

pub use beer::Beer;
