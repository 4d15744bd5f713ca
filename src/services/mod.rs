//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación.

pub mod beer_service;

pub use beer_service::BeerService;
