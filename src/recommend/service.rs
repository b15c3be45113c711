//! Recommendation service - orchestrates the pipeline for one request
//!
//! 1. Collect candidates (top tracks + genre searches) and resolve artist genres
//! 2. Estimate features, score against the target mood, sort, truncate
//! 3. Format for display
//!
//! Any failure on the way selects the placeholder list instead; callers
//! always get a well-formed list of at most ten items.

use tracing::{info, warn};

use super::collector::CandidateCollector;
use super::domain::{MoodSettings, RecommendError, Recommendation, SeedTrack};
use super::fallback::fallback_recommendations;
use super::ranker;
use crate::catalog::{CatalogApi, CatalogClient};
use crate::config::CatalogConfig;

/// Subject used in reasons when the seed has no artists
const UNKNOWN_SEED_ARTIST: &str = "your track";

/// Runs recommendation requests against a catalog
pub struct RecommendationService<C> {
    catalog: C,
}

impl<C: CatalogApi> RecommendationService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Recommend tracks for `seed`, falling back to placeholders on any failure.
    pub async fn recommend(&self, seed: &SeedTrack, mood: &MoodSettings) -> Vec<Recommendation> {
        match self.try_recommend(seed, mood).await {
            Ok(recs) => recs,
            Err(e) => {
                warn!("No live recommendations for {:?}: {}", seed.name, e);
                fallback_recommendations(mood, &seed.name)
            }
        }
    }

    /// The live pipeline, without the fallback.
    pub async fn try_recommend(
        &self,
        seed: &SeedTrack,
        mood: &MoodSettings,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let pool = CandidateCollector::new(&self.catalog).collect(seed).await?;

        let seed_artist = seed.primary_artist_name().unwrap_or(UNKNOWN_SEED_ARTIST);
        let recs = ranker::rank(&pool, mood, seed_artist);

        info!(
            "Ranked {} candidates for {:?}, returning {}",
            pool.candidates.len(),
            seed.name,
            recs.len()
        );
        Ok(recs)
    }
}

/// Caller-facing entry point: never fails.
///
/// Without a token, or without a seed artist ID, no client is built and no
/// request is made.
pub async fn recommend(
    seed: &SeedTrack,
    mood: &MoodSettings,
    access_token: Option<&str>,
    catalog_config: &CatalogConfig,
) -> Vec<Recommendation> {
    let token = match access_token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => {
            warn!("{}", RecommendError::MissingToken);
            return fallback_recommendations(mood, &seed.name);
        }
    };

    if seed.primary_artist_id().is_none() {
        warn!("{}", RecommendError::MissingSeedArtist);
        return fallback_recommendations(mood, &seed.name);
    }

    let client = match CatalogClient::new(token, catalog_config) {
        Ok(client) => client,
        Err(e) => {
            warn!("Could not create catalog client: {}", e);
            return fallback_recommendations(mood, &seed.name);
        }
    };

    RecommendationService::new(client)
        .recommend(seed, mood)
        .await
}
