//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod punk_api;

// Re-export main types for convenience
pub use punk_api::{PunkApiClient, UpstreamClient, UpstreamResponse};
