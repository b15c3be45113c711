//! Trait definition for the catalog service.
//!
//! Lets the recommendation pipeline run against the real HTTP client in
//! production and an in-memory catalog in tests.

use async_trait::async_trait;

use super::{CatalogClient, CatalogError};
use crate::recommend::domain::{ArtistRecord, CandidateTrack};

/// Read-only catalog operations the recommendation pipeline needs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Look up one artist (for its genre list).
    async fn get_artist(&self, artist_id: &str) -> Result<ArtistRecord, CatalogError>;

    /// An artist's top tracks, in catalog order.
    async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
    ) -> Result<Vec<CandidateTrack>, CatalogError>;

    /// Keyword track search, at most `limit` results.
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError>;

    /// Batch artist lookup. Callers must pass at most 50 IDs.
    async fn get_artists(&self, artist_ids: &[String]) -> Result<Vec<ArtistRecord>, CatalogError>;
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn get_artist(&self, artist_id: &str) -> Result<ArtistRecord, CatalogError> {
        self.get_artist(artist_id).await
    }

    async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        self.get_artist_top_tracks(artist_id).await
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        self.search_tracks(query, limit).await
    }

    async fn get_artists(
        &self,
        artist_ids: &[String],
    ) -> Result<Vec<ArtistRecord>, CatalogError> {
        self.get_artists(artist_ids).await
    }
}
