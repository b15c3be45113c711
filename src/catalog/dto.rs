//! Catalog API Data Transfer Objects
//!
//! These types match what the catalog web API returns.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! API Reference: https://developer.spotify.com/documentation/web-api
//!
//! Only the fields the recommendation pipeline consumes are modelled; serde
//! ignores the rest.

use serde::{Deserialize, Serialize};

/// Full artist object (`GET /artists/{id}`, `GET /artists?ids=`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistObject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Free-text genre tags, may be empty
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Artist as embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimplifiedArtist {
    /// Null for local files
    pub id: Option<String>,
    pub name: String,
}

/// Album as embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumObject {
    pub name: String,
    /// Largest first
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageObject {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Track object
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackObject {
    /// Null for local files
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    pub album: Option<AlbumObject>,
    #[serde(default)]
    pub duration_ms: u64,
}

/// `GET /artists/{id}/top-tracks`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub tracks: Vec<TrackObject>,
}

/// `GET /search?type=track`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    pub tracks: Option<Paging<Option<TrackObject>>>,
}

/// Paged result wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total: Option<u32>,
}

/// `GET /artists?ids=` - unknown IDs come back as null entries
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistsResponse {
    #[serde(default)]
    pub artists: Vec<Option<ArtistObject>>,
}

/// Error response body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
