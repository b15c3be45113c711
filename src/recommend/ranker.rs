//! Scoring, ordering and formatting of candidates.

use super::collector::CandidatePool;
use super::domain::{
    CandidateTrack, MatchPercentages, MoodSettings, Recommendation, ScoredCandidate,
};
use super::features::estimate_features;
use super::scoring::{match_percentages, mood_score};

/// Upper bound on recommendations returned per request
pub const MAX_RESULTS: usize = 10;

/// Estimate and score every candidate in the pool, in collection order.
pub fn score_candidates(pool: &CandidatePool, mood: &MoodSettings) -> Vec<ScoredCandidate> {
    pool.candidates
        .iter()
        .map(|track| {
            let features = estimate_features(pool.genres_for(track));
            ScoredCandidate {
                track: track.clone(),
                features,
                mood_score: mood_score(&features, mood),
            }
        })
        .collect()
}

/// Best-first ordering, truncated to [`MAX_RESULTS`].
///
/// The sort is stable, so equal scores keep collection order.
pub fn top_candidates(pool: &CandidatePool, mood: &MoodSettings) -> Vec<ScoredCandidate> {
    let mut scored = score_candidates(pool, mood);
    scored.sort_by(|a, b| a.mood_score.total_cmp(&b.mood_score));
    scored.truncate(MAX_RESULTS);
    scored
}

/// Rank the pool and format the results for display.
pub fn rank(pool: &CandidatePool, mood: &MoodSettings, seed_artist: &str) -> Vec<Recommendation> {
    top_candidates(pool, mood)
        .iter()
        .map(|scored| {
            let pct = match_percentages(&scored.features, mood);
            to_recommendation(&scored.track, reason_text(&pct, seed_artist))
        })
        .collect()
}

fn to_recommendation(track: &CandidateTrack, reason: String) -> Recommendation {
    Recommendation {
        id: track.id.clone(),
        title: track.name.clone(),
        artist: join_artists(track),
        album: track.album_name.clone(),
        duration: format_duration(track.duration_ms),
        image_url: track.image_url.clone(),
        reason,
    }
}

fn join_artists(track: &CandidateTrack) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format milliseconds as `M:SS` (seconds truncated).
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// Human-readable explanation for a recommendation.
pub fn reason_text(pct: &MatchPercentages, subject: &str) -> String {
    format!(
        "{}% energy match, {}% danceability match, {}% mood match. Similar vibe to {}",
        pct.energy, pct.danceability, pct.valence, subject
    )
}
