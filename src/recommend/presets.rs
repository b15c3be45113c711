//! Static genre preset table.
//!
//! Maps genre keywords to a canonical feature triple. Table order matters:
//! a genre string is credited to the FIRST preset with a keyword hit, so
//! e.g. "dancehall" lands on the dance preset rather than the latin one.

use super::domain::FeatureVector;

/// A keyword set and the features it stands for
#[derive(Debug)]
pub struct GenrePreset {
    /// Lowercase keywords matched as substrings of a genre string
    pub keywords: &'static [&'static str],
    pub features: FeatureVector,
}

pub static GENRE_PRESETS: &[GenrePreset] = &[
    GenrePreset {
        keywords: &["edm", "house", "dance", "disco"],
        features: FeatureVector::new(0.85, 0.85, 0.7),
    },
    GenrePreset {
        keywords: &["techno", "trance", "dubstep", "drum and bass", "electro"],
        features: FeatureVector::new(0.9, 0.8, 0.6),
    },
    GenrePreset {
        keywords: &["metal", "hardcore", "punk", "grunge"],
        features: FeatureVector::new(0.95, 0.45, 0.35),
    },
    GenrePreset {
        keywords: &["hip hop", "rap", "trap", "drill", "grime"],
        features: FeatureVector::new(0.75, 0.8, 0.55),
    },
    GenrePreset {
        keywords: &["reggaeton", "reggae", "latin", "salsa", "afrobeat"],
        features: FeatureVector::new(0.7, 0.85, 0.8),
    },
    GenrePreset {
        keywords: &["rock", "alternative", "indie"],
        features: FeatureVector::new(0.75, 0.5, 0.5),
    },
    GenrePreset {
        keywords: &["pop"],
        features: FeatureVector::new(0.7, 0.7, 0.7),
    },
    GenrePreset {
        keywords: &["r&b", "soul", "funk"],
        features: FeatureVector::new(0.6, 0.75, 0.65),
    },
    GenrePreset {
        keywords: &["jazz", "blues", "swing"],
        features: FeatureVector::new(0.45, 0.55, 0.55),
    },
    GenrePreset {
        keywords: &["acoustic", "folk", "singer-songwriter", "country"],
        features: FeatureVector::new(0.4, 0.45, 0.7),
    },
    GenrePreset {
        keywords: &["classical", "ambient", "piano", "orchestra", "lo-fi", "chill"],
        features: FeatureVector::new(0.2, 0.3, 0.45),
    },
];

/// Find the first preset with a keyword contained in `genre` (case-insensitive).
pub fn match_preset(genre: &str) -> Option<&'static GenrePreset> {
    let genre = genre.to_lowercase();
    GENRE_PRESETS
        .iter()
        .find(|preset| preset.keywords.iter().any(|kw| genre.contains(kw)))
}
