//! Mood distance and match percentages.

use super::domain::{FeatureVector, MatchPercentages, MoodSettings};

/// L1 distance between estimated features and the target mood.
///
/// Zero only at an exact match.
pub fn mood_score(features: &FeatureVector, mood: &MoodSettings) -> f64 {
    (features.energy - mood.energy).abs()
        + (features.danceability - mood.danceability).abs()
        + (features.valence - mood.valence).abs()
}

/// `round((1 - |feature - target|) * 100)`, unclamped.
pub fn match_percent(feature: f64, target: f64) -> i32 {
    ((1.0 - (feature - target).abs()) * 100.0).round() as i32
}

pub fn match_percentages(features: &FeatureVector, mood: &MoodSettings) -> MatchPercentages {
    MatchPercentages {
        energy: match_percent(features.energy, mood.energy),
        danceability: match_percent(features.danceability, mood.danceability),
        valence: match_percent(features.valence, mood.valence),
    }
}
