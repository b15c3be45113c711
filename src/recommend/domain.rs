//! Internal domain models for mood-based recommendation.
//!
//! These types are OUR types - they don't change when the catalog API changes.
//! Catalog responses get converted into these types by `catalog::adapter`.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Target point in mood space that ranking optimizes toward.
///
/// Each dimension is conventionally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodSettings {
    pub energy: f64,
    pub danceability: f64,
    pub valence: f64,
}

impl Default for MoodSettings {
    fn default() -> Self {
        Self {
            energy: 0.5,
            danceability: 0.5,
            valence: 0.5,
        }
    }
}

impl MoodSettings {
    pub fn new(energy: f64, danceability: f64, valence: f64) -> Self {
        Self {
            energy,
            danceability,
            valence,
        }
    }

    /// True when every dimension lies in `[0, 1]`.
    pub fn is_in_range(&self) -> bool {
        [self.energy, self.danceability, self.valence]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}

/// Estimated audio features for a track (never persisted)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub energy: f64,
    pub danceability: f64,
    pub valence: f64,
}

impl FeatureVector {
    pub const fn new(energy: f64, danceability: f64, valence: f64) -> Self {
        Self {
            energy,
            danceability,
            valence,
        }
    }
}

/// Artist reference as it appears on a track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    /// Catalog artist ID (missing for some local/unlinked tracks)
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Album info attached to a seed track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub name: String,
}

/// The track a recommendation request is seeded from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedTrack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: Option<AlbumInfo>,
}

impl SeedTrack {
    /// ID of the first-listed artist, if it has a usable one.
    pub fn primary_artist_id(&self) -> Option<&str> {
        self.artists
            .first()
            .and_then(|a| a.id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    /// Name of the first-listed artist.
    pub fn primary_artist_name(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }
}

/// A track considered for ranking
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album_name: String,
    pub duration_ms: u64,
    /// First album image, empty when the catalog has none
    pub image_url: String,
    /// ID of the first-listed artist
    pub primary_artist_id: Option<String>,
}

/// Genre data for one artist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistRecord {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

/// A candidate with its estimate and distance from the target mood
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub track: CandidateTrack,
    pub features: FeatureVector,
    /// L1 distance to the target mood, lower is better
    pub mood_score: f64,
}

/// Per-dimension match percentages shown to the user.
///
/// Not clamped: values may fall outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPercentages {
    pub energy: i32,
    pub danceability: i32,
    pub valence: i32,
}

/// A single recommendation as returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    /// Artist names joined with ", "
    pub artist: String,
    pub album: String,
    /// Formatted as `M:SS`
    pub duration: String,
    pub image_url: String,
    pub reason: String,
}

/// Errors that end a live recommendation attempt.
///
/// None of these reach the caller of [`super::recommend`]; they select the
/// fallback list instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecommendError {
    #[error("Seed track has no primary artist ID")]
    MissingSeedArtist,

    #[error("No access token supplied")]
    MissingToken,

    #[error("Catalog retrieval failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("No candidate tracks found")]
    NoCandidates,
}
