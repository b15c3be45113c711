//! Catalog service integration
//!
//! Read-only, bearer-token access to the music catalog: artist lookup,
//! top tracks, track search and batch artist lookup.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - Exact API response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to `recommend::domain` types
//! - **Client** (`client.rs`) - HTTP client
//! - **Traits** (`traits.rs`) - `CatalogApi` seam so tests can swap in a mock

mod adapter;
mod client;
pub mod dto;
mod error;
pub mod traits;

pub use client::{CatalogClient, MAX_ARTIST_BATCH};
pub use error::CatalogError;
pub use traits::CatalogApi;
