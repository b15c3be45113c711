//! Placeholder recommendations for when live data is unavailable.
//!
//! Pure and infallible: no I/O, same output for the same mood.
//!
//! Known quirk: percentages are `round(target * multiplier)` with multipliers
//! above 100 on some entries, so the display can show more than 100%.
//! Kept as-is rather than clamped.

use tracing::info;

use super::domain::{MatchPercentages, MoodSettings, Recommendation};
use super::ranker::reason_text;

/// Number of placeholder entries
pub const FALLBACK_LEN: usize = 10;

const FALLBACK_SUBJECT: &str = "your selection";

struct PlaceholderTrack {
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    duration: &'static str,
    /// Percent multipliers for (energy, danceability, valence)
    multipliers: (u32, u32, u32),
}

const PLACEHOLDERS: [PlaceholderTrack; FALLBACK_LEN] = [
    PlaceholderTrack {
        title: "Midnight City Lights",
        artist: "Neon Horizon",
        album: "Afterglow",
        duration: "3:42",
        multipliers: (100, 95, 90),
    },
    PlaceholderTrack {
        title: "Golden Hour",
        artist: "The Sunset Collective",
        album: "Warm Frequencies",
        duration: "4:05",
        multipliers: (90, 100, 95),
    },
    PlaceholderTrack {
        title: "Pulse Runner",
        artist: "Voltage Drift",
        album: "Overclocked",
        duration: "3:28",
        multipliers: (110, 92, 85),
    },
    PlaceholderTrack {
        title: "Paper Boats",
        artist: "Willow & Stone",
        album: "Quiet Rivers",
        duration: "3:55",
        multipliers: (85, 88, 100),
    },
    PlaceholderTrack {
        title: "Static Hearts",
        artist: "Echo Parade",
        album: "Signal Lost",
        duration: "3:17",
        multipliers: (95, 90, 92),
    },
    PlaceholderTrack {
        title: "Velvet Groove",
        artist: "Luna Mae",
        album: "Late Night Sessions",
        duration: "4:21",
        multipliers: (88, 105, 90),
    },
    PlaceholderTrack {
        title: "Skyline Sprint",
        artist: "Metro Arcade",
        album: "Fast Forward",
        duration: "2:58",
        multipliers: (102, 96, 88),
    },
    PlaceholderTrack {
        title: "Low Tide",
        artist: "Harbor Bloom",
        album: "Saltwater",
        duration: "4:36",
        multipliers: (80, 85, 98),
    },
    PlaceholderTrack {
        title: "Kaleidoscope",
        artist: "Prism Youth",
        album: "Colour Theory",
        duration: "3:33",
        multipliers: (92, 94, 108),
    },
    PlaceholderTrack {
        title: "Night Drive Home",
        artist: "Analog Summer",
        album: "Cassette Dreams",
        duration: "3:49",
        multipliers: (87, 90, 93),
    },
];

fn scaled_percent(target: f64, multiplier: u32) -> i32 {
    (target * f64::from(multiplier)).round() as i32
}

/// Build the fixed placeholder list for `mood`.
///
/// `seed_name` is only logged.
pub fn fallback_recommendations(mood: &MoodSettings, seed_name: &str) -> Vec<Recommendation> {
    info!("Using placeholder recommendations for {:?}", seed_name);

    PLACEHOLDERS
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (e, d, v) = entry.multipliers;
            let pct = MatchPercentages {
                energy: scaled_percent(mood.energy, e),
                danceability: scaled_percent(mood.danceability, d),
                valence: scaled_percent(mood.valence, v),
            };
            Recommendation {
                id: format!("mock-{}", i + 1),
                title: entry.title.to_string(),
                artist: entry.artist.to_string(),
                album: entry.album.to_string(),
                duration: entry.duration.to_string(),
                image_url: format!("https://picsum.photos/seed/mock-{}/300/300", i + 1),
                reason: reason_text(&pct, FALLBACK_SUBJECT),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_length_and_ids() {
        let recs = fallback_recommendations(&MoodSettings::default(), "Seed");
        assert_eq!(recs.len(), FALLBACK_LEN);
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.id, format!("mock-{}", i + 1));
        }
    }

    #[test]
    fn test_percentages_scale_with_mood() {
        let mood = MoodSettings::new(0.8, 0.6, 0.5);
        let recs = fallback_recommendations(&mood, "Seed");

        // Entry 1: (100, 95, 90)
        let reason = &recs[0].reason;
        assert!(reason.starts_with("80% energy match, 57% danceability match, 45% mood match."));
        assert!(reason.ends_with("Similar vibe to your selection"));
        // Entry 3 uses 110% for energy: 0.8 * 110 = 88
        assert!(recs[2].reason.starts_with("88% energy match"));
    }

    #[test]
    fn test_over_one_hundred_is_not_clamped() {
        let recs = fallback_recommendations(&MoodSettings::new(1.0, 1.0, 1.0), "Seed");
        assert!(recs[2].reason.starts_with("110% energy match"));
        assert!(recs[5].reason.contains("105% danceability match"));
    }

    #[test]
    fn test_seed_name_does_not_affect_output() {
        let mood = MoodSettings::new(0.3, 0.7, 0.2);
        assert_eq!(
            fallback_recommendations(&mood, "One"),
            fallback_recommendations(&mood, "Another")
        );
    }
}
