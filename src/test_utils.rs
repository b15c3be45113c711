//! Test utilities and fixtures for mood-minder tests.
//!
//! This module provides common seed tracks, candidate factories and pool
//! builders to reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_seed, mock_candidates};
//!
//! let catalog = MockCatalog::new()
//!     .with_artist("seed-artist", "Seed Artist", &["techno"])
//!     .with_top_tracks("seed-artist", mock_candidates("top", 5, "seed-artist"));
//! ```

use std::collections::HashMap;

use crate::recommend::collector::CandidatePool;
use crate::recommend::domain::{AlbumInfo, ArtistRef, CandidateTrack, SeedTrack};

/// Creates a seed track whose primary artist is `seed-artist`.
///
/// Customize with struct update syntax or by mutating fields:
///
/// ```ignore
/// let mut seed = mock_seed();
/// seed.artists[0].id = None;
/// ```
pub fn mock_seed() -> SeedTrack {
    SeedTrack {
        id: "seed-track".to_string(),
        name: "Seed Song".to_string(),
        artists: vec![ArtistRef {
            id: Some("seed-artist".to_string()),
            name: "Seed Artist".to_string(),
        }],
        album: Some(AlbumInfo {
            name: "Seed Album".to_string(),
        }),
    }
}

/// Creates a candidate track by `artist_id` with sensible defaults.
pub fn mock_candidate(id: &str, artist_id: &str) -> CandidateTrack {
    CandidateTrack {
        id: id.to_string(),
        name: format!("Track {}", id),
        artists: vec![ArtistRef {
            id: Some(artist_id.to_string()),
            name: format!("Artist {}", artist_id),
        }],
        album_name: "Test Album".to_string(),
        duration_ms: 200_000,
        image_url: format!("https://img.example.com/{}", id),
        primary_artist_id: Some(artist_id.to_string()),
    }
}

/// Creates `count` candidates named `{prefix}-0`, `{prefix}-1`, ...
pub fn mock_candidates(prefix: &str, count: usize, artist_id: &str) -> Vec<CandidateTrack> {
    (0..count)
        .map(|i| mock_candidate(&format!("{}-{}", prefix, i), artist_id))
        .collect()
}

/// Builds a candidate pool directly, bypassing the collector.
///
/// `Some(genres)` marks the track's primary artist as resolved with those
/// genres; `None` leaves it unresolved.
pub fn mock_pool(
    seed_genres: &[&str],
    tracks: Vec<(CandidateTrack, Option<Vec<&str>>)>,
) -> CandidatePool {
    let mut artist_genres = HashMap::new();
    let mut candidates = Vec::with_capacity(tracks.len());

    for (track, genres) in tracks {
        if let (Some(id), Some(genres)) = (&track.primary_artist_id, genres) {
            artist_genres.insert(id.clone(), genres.into_iter().map(String::from).collect());
        }
        candidates.push(track);
    }

    CandidatePool {
        seed_genres: seed_genres.iter().map(|g| g.to_string()).collect(),
        candidates,
        artist_genres,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_seed_defaults() {
        let seed = mock_seed();
        assert_eq!(seed.primary_artist_id(), Some("seed-artist"));
        assert_eq!(seed.primary_artist_name(), Some("Seed Artist"));
    }

    #[test]
    fn test_mock_candidates_naming() {
        let tracks = mock_candidates("top", 3, "a1");
        let ids: Vec<_> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["top-0", "top-1", "top-2"]);
        for track in &tracks {
            assert_eq!(track.primary_artist_id.as_deref(), Some("a1"));
        }
    }

    #[test]
    fn test_mock_pool_resolution() {
        let pool = mock_pool(
            &["jazz"],
            vec![
                (mock_candidate("t1", "a1"), Some(vec!["techno"])),
                (mock_candidate("t2", "a2"), None),
            ],
        );
        assert_eq!(pool.candidates.len(), 2);
        let resolved = pool.genres_for(&pool.candidates[0]);
        let unresolved = pool.genres_for(&pool.candidates[1]);
        assert_eq!(resolved, &["techno".to_string()]);
        assert_eq!(unresolved, &["jazz".to_string()]);
    }
}
