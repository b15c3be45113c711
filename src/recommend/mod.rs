//! Mood-based track recommendation.
//!
//! # Architecture
//!
//! - **Domain models** (`domain.rs`) - Seed, candidates, mood, recommendations
//! - **Presets** (`presets.rs`) - Ordered genre keyword table
//! - **Features** (`features.rs`) - Genre list to estimated feature triple
//! - **Scoring** (`scoring.rs`) - L1 distance to the target mood
//! - **Collector** (`collector.rs`) - Candidate pool from the catalog
//! - **Ranker** (`ranker.rs`) - Score, sort, truncate, format
//! - **Fallback** (`fallback.rs`) - Placeholder list when live data is unavailable
//! - **Service** (`service.rs`) - Request orchestration
//!
//! The catalog doesn't expose audio features, so features are estimated from
//! artist genre tags. That makes every score an approximation.
//!
//! # Usage
//!
//! ```ignore
//! use recommend::{MoodSettings, recommend};
//!
//! let mood = MoodSettings::new(0.8, 0.7, 0.6);
//! let recs = recommend(&seed, &mood, Some(&token), &config.catalog).await;
//! for rec in recs {
//!     println!("{} - {} ({})", rec.artist, rec.title, rec.reason);
//! }
//! ```

pub mod collector;
pub mod domain;
pub mod fallback;
pub mod features;
pub mod presets;
pub mod ranker;
pub mod scoring;
pub mod service;

pub use domain::{ArtistRef, MoodSettings, Recommendation, SeedTrack};
pub use fallback::fallback_recommendations;
pub use features::estimate_features;
pub use service::recommend;
