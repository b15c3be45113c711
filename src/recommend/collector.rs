//! Candidate collection.
//!
//! Builds the candidate pool for one request from two retrieval strategies:
//! 1. The seed artist's top tracks
//! 2. Keyword searches on the seed artist's first genres
//!
//! then resolves every candidate's primary-artist genres in batches.
//! All state here is request-scoped.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::domain::{CandidateTrack, RecommendError, SeedTrack};
use crate::catalog::{CatalogApi, MAX_ARTIST_BATCH};

/// How many of the seed artist's genres are searched
pub const TOP_GENRES: usize = 2;

/// Result limit per genre search
pub const SEARCH_LIMIT: u32 = 20;

/// Search hits stop being added once the pool holds this many tracks
pub const MAX_POOL: usize = 40;

/// Everything the ranker needs for one request
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    /// Seed artist genres, inherited by candidates whose artist is unresolved
    pub seed_genres: Vec<String>,
    /// Deduplicated candidates in collection order
    pub candidates: Vec<CandidateTrack>,
    /// Resolved genres by artist ID
    pub artist_genres: HashMap<String, Vec<String>>,
}

impl CandidatePool {
    /// Genres used to estimate a candidate's features.
    ///
    /// Falls back to the seed artist's genres when the candidate's primary
    /// artist is missing or wasn't resolved.
    pub fn genres_for(&self, track: &CandidateTrack) -> &[String] {
        track
            .primary_artist_id
            .as_ref()
            .and_then(|id| self.artist_genres.get(id))
            .unwrap_or(&self.seed_genres)
    }
}

/// Catalog query for a genre keyword search
pub fn genre_query(genre: &str) -> String {
    format!("genre:\"{}\"", genre)
}

/// Gathers candidates for a seed track from the catalog
pub struct CandidateCollector<'a, C: ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogApi + ?Sized> CandidateCollector<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Collect a deduplicated, bounded candidate pool for `seed`.
    ///
    /// Fails if the seed has no primary artist ID, if either of the two
    /// initial lookups fails, or if nothing at all was collected. Failed
    /// genre searches and artist batches are logged and skipped.
    pub async fn collect(&self, seed: &SeedTrack) -> Result<CandidatePool, RecommendError> {
        let artist_id = seed
            .primary_artist_id()
            .ok_or(RecommendError::MissingSeedArtist)?;

        let (seed_artist, top_tracks) = tokio::try_join!(
            self.catalog.get_artist(artist_id),
            self.catalog.get_artist_top_tracks(artist_id),
        )?;

        let mut seen: HashSet<String> = HashSet::new();
        seen.insert(seed.id.clone());

        let mut candidates = Vec::new();
        for track in top_tracks {
            if seen.insert(track.id.clone()) {
                candidates.push(track);
            }
        }
        debug!(
            "{} top tracks for artist {} ({} genres)",
            candidates.len(),
            artist_id,
            seed_artist.genres.len()
        );

        for genre in seed_artist.genres.iter().take(TOP_GENRES) {
            let query = genre_query(genre);
            match self.catalog.search_tracks(&query, SEARCH_LIMIT).await {
                Ok(hits) => {
                    let before = candidates.len();
                    for hit in hits {
                        if candidates.len() >= MAX_POOL {
                            break;
                        }
                        if seen.insert(hit.id.clone()) {
                            candidates.push(hit);
                        }
                    }
                    debug!(
                        "Search {} added {} candidates",
                        query,
                        candidates.len() - before
                    );
                }
                Err(e) => {
                    warn!("Genre search {} failed: {}", query, e);
                }
            }
        }

        if candidates.is_empty() {
            return Err(RecommendError::NoCandidates);
        }

        let artist_genres = self.resolve_artist_genres(&candidates).await;

        Ok(CandidatePool {
            seed_genres: seed_artist.genres,
            candidates,
            artist_genres,
        })
    }

    /// Look up genres for every distinct primary artist, in batches.
    async fn resolve_artist_genres(
        &self,
        candidates: &[CandidateTrack],
    ) -> HashMap<String, Vec<String>> {
        let mut seen = HashSet::new();
        let artist_ids: Vec<String> = candidates
            .iter()
            .filter_map(|c| c.primary_artist_id.clone())
            .filter(|id| seen.insert(id.clone()))
            .collect();

        let mut genres = HashMap::with_capacity(artist_ids.len());
        for batch in artist_ids.chunks(MAX_ARTIST_BATCH) {
            match self.catalog.get_artists(batch).await {
                Ok(records) => {
                    for record in records {
                        genres.insert(record.id, record.genres);
                    }
                }
                Err(e) => {
                    warn!("Artist batch of {} failed: {}", batch.len(), e);
                }
            }
        }

        debug!("Resolved {}/{} artists", genres.len(), artist_ids.len());
        genres
    }
}
