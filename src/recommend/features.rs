//! Feature estimation from genre tags.
//!
//! The catalog doesn't expose audio features, so we approximate them by
//! averaging the presets matched by an artist's genres.

use super::domain::FeatureVector;
use super::presets::match_preset;

/// Used when no genre matches a preset (or there are no genres at all)
pub const DEFAULT_FEATURES: FeatureVector = FeatureVector::new(0.6, 0.6, 0.6);

/// Estimate features for a list of genre strings.
///
/// Each genre credits at most one preset (the first match in table order).
/// The result is the mean over all credited presets.
pub fn estimate_features<S: AsRef<str>>(genres: &[S]) -> FeatureVector {
    let mut sum = FeatureVector::new(0.0, 0.0, 0.0);
    let mut matches = 0u32;

    for genre in genres {
        if let Some(preset) = match_preset(genre.as_ref()) {
            sum.energy += preset.features.energy;
            sum.danceability += preset.features.danceability;
            sum.valence += preset.features.valence;
            matches += 1;
        }
    }

    if matches == 0 {
        return DEFAULT_FEATURES;
    }

    let n = f64::from(matches);
    FeatureVector::new(sum.energy / n, sum.danceability / n, sum.valence / n)
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::recommend::presets::GENRE_PRESETS;
    use proptest::prelude::*;

    /// Any known keyword, optionally wrapped in noise, or pure noise
    fn genre_string() -> impl Strategy<Value = String> {
        let keywords: Vec<&'static str> = GENRE_PRESETS
            .iter()
            .flat_map(|p| p.keywords.iter().copied())
            .collect();
        prop_oneof![
            prop::sample::select(keywords.clone()).prop_map(String::from),
            (prop::sample::select(keywords), "[a-z ]{0,8}")
                .prop_map(|(kw, noise)| format!("{}{}", noise, kw.to_uppercase())),
            "[a-z ]{0,12}",
        ]
    }

    proptest! {
        /// Estimates stay inside the bounds of the preset table
        #[test]
        fn estimate_is_in_unit_range(genres in prop::collection::vec(genre_string(), 0..8)) {
            let f = estimate_features(&genres);
            for v in [f.energy, f.danceability, f.valence] {
                prop_assert!((0.0..=1.0).contains(&v), "{:?} from {:?}", f, genres);
            }
        }

        /// Same input, same output
        #[test]
        fn estimate_is_deterministic(genres in prop::collection::vec(genre_string(), 0..8)) {
            prop_assert_eq!(estimate_features(&genres), estimate_features(&genres));
        }

        /// Every pair of presets averages into the unit cube
        #[test]
        fn preset_pairs_are_bounded(
            a in 0..GENRE_PRESETS.len(),
            b in 0..GENRE_PRESETS.len(),
        ) {
            let genres = [GENRE_PRESETS[a].keywords[0], GENRE_PRESETS[b].keywords[0]];
            let f = estimate_features(&genres);
            for v in [f.energy, f.danceability, f.valence] {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }
}
