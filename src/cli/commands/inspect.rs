//! Commands for inspecting the estimator, preset table and placeholder list.

use super::MoodArgs;
use super::recommend::print_recommendations;
use crate::config::Config;
use crate::recommend::estimate_features;
use crate::recommend::fallback_recommendations;
use crate::recommend::features::DEFAULT_FEATURES;
use crate::recommend::presets::{GENRE_PRESETS, match_preset};
use crate::recommend::scoring::{match_percentages, mood_score};

/// Estimate features for genres and compare them to the target mood
pub fn cmd_estimate(config: &Config, genres: &[String], mood: &MoodArgs) -> anyhow::Result<()> {
    let mood = mood.resolve(config.mood)?;

    for genre in genres {
        match match_preset(genre) {
            Some(preset) => println!("  {:<24} -> {}", genre, preset.keywords.join(", ")),
            None => println!("  {:<24} -> (no preset)", genre),
        }
    }

    let features = estimate_features(genres);
    let pct = match_percentages(&features, &mood);
    println!();
    println!(
        "Estimate: energy {:.3}, danceability {:.3}, valence {:.3}",
        features.energy, features.danceability, features.valence
    );
    if features == DEFAULT_FEATURES {
        println!("  (default estimate)");
    }
    let score = mood_score(&features, &mood);
    println!("Mood score: {:.3} (lower is better)", score);
    println!(
        "Match: {}% energy, {}% danceability, {}% valence",
        pct.energy, pct.danceability, pct.valence
    );
    Ok(())
}

/// Print the genre preset table in match order
pub fn cmd_presets() -> anyhow::Result<()> {
    println!(" #  Energy Dance  Val    Keywords");
    for (n, preset) in (1..).zip(GENRE_PRESETS) {
        let f = preset.features;
        let keywords = preset.keywords.join(", ");
        println!(
            "{:>2}  {:<6.2} {:<6.2} {:<6.2} {}",
            n, f.energy, f.danceability, f.valence, keywords
        );
    }
    println!();
    println!(
        "Unmatched genres use {:.2}/{:.2}/{:.2}. First matching row wins.",
        DEFAULT_FEATURES.energy, DEFAULT_FEATURES.danceability, DEFAULT_FEATURES.valence
    );
    Ok(())
}

/// Print the placeholder list for a mood
pub fn cmd_fallback(config: &Config, mood: &MoodArgs, json: bool) -> anyhow::Result<()> {
    let mood = mood.resolve(config.mood)?;
    let recs = fallback_recommendations(&mood, "");

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
    } else {
        print_recommendations(&recs);
    }
    Ok(())
}
