//! Recommendation command.

use std::path::Path;
use tokio::runtime::Runtime;

use super::{MoodArgs, SeedArgs};
use crate::config::Config;
use crate::error::{self, Error, ResultExt};
use crate::recommend::{self, ArtistRef, Recommendation, SeedTrack};

/// Recommend tracks for a seed and print them
pub fn cmd_recommend(
    config: &Config,
    seed: &SeedArgs,
    mood: &MoodArgs,
    token: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let seed = resolve_seed(seed)?;
    let mood = mood.resolve(config.mood)?;
    let token = token.or(config.credentials.access_token.as_deref());

    if token.is_none() {
        eprintln!("No access token: showing placeholder recommendations.");
        eprintln!("Pass --token, set CATALOG_ACCESS_TOKEN, or add it to the config file.");
    }

    let rt = Runtime::new()?;
    let recs = rt.block_on(recommend::recommend(&seed, &mood, token, &config.catalog));

    if json {
        println!("{}", serde_json::to_string_pretty(&recs)?);
    } else {
        println!("Recommendations for {:?}", seed.name);
        println!(
            "Target mood: energy {:.2}, danceability {:.2}, valence {:.2}",
            mood.energy, mood.danceability, mood.valence
        );
        println!();
        print_recommendations(&recs);
    }
    Ok(())
}

/// Print recommendations as a numbered list
pub(crate) fn print_recommendations(recs: &[Recommendation]) {
    for (n, rec) in (1..).zip(recs) {
        println!(
            "{:>2}. {} - {} [{}]",
            n, rec.artist, rec.title, rec.duration
        );
        if !rec.album.is_empty() {
            println!("    Album:  {}", rec.album);
        }
        println!("    {}", rec.reason);
    }
}

/// Build the seed from either a JSON file or individual flags
fn resolve_seed(args: &SeedArgs) -> error::Result<SeedTrack> {
    if let Some(ref path) = args.seed_file {
        return load_seed_file(path);
    }

    let id = args
        .track_id
        .clone()
        .ok_or_else(|| Error::invalid_input("either --seed-file or --track-id is required"))?;

    let artists = if args.artist_id.is_some() || args.artist_name.is_some() {
        vec![ArtistRef {
            id: args.artist_id.clone(),
            name: args.artist_name.clone().unwrap_or_default(),
        }]
    } else {
        Vec::new()
    };

    Ok(SeedTrack {
        name: args.track_name.clone().unwrap_or_else(|| id.clone()),
        id,
        artists,
        album: None,
    })
}

/// Read a seed track from a JSON file
pub fn load_seed_file(path: &Path) -> error::Result<SeedTrack> {
    let contents = std::fs::read_to_string(path)
        .with_context(format!("reading seed file {}", path.display()))?;
    let seed: SeedTrack = serde_json::from_str(&contents)
        .with_context(format!("parsing seed file {}", path.display()))?;

    if seed.id.trim().is_empty() {
        return Err(Error::invalid_seed(path, "track id is empty"));
    }
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_from_flags() {
        let args = SeedArgs {
            track_id: Some("t1".to_string()),
            artist_id: Some("a1".to_string()),
            artist_name: Some("Artist".to_string()),
            ..Default::default()
        };

        let seed = resolve_seed(&args).unwrap();
        assert_eq!(seed.id, "t1");
        assert_eq!(seed.name, "t1");
        assert_eq!(seed.primary_artist_id(), Some("a1"));
    }

    #[test]
    fn test_seed_without_artist_flags() {
        let args = SeedArgs {
            track_id: Some("t1".to_string()),
            track_name: Some("Song".to_string()),
            ..Default::default()
        };

        let seed = resolve_seed(&args).unwrap();
        assert_eq!(seed.name, "Song");
        assert!(seed.artists.is_empty());
        assert!(seed.primary_artist_id().is_none());
    }

    #[test]
    fn test_seed_requires_some_input() {
        let err = resolve_seed(&SeedArgs::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_load_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        let json = r#"{
            "id": "s1",
            "name": "One More Time",
            "artists": [{"id": "daft", "name": "Daft Punk"}]
        }"#;
        std::fs::write(&path, json).unwrap();

        let seed = load_seed_file(&path).unwrap();
        assert_eq!(seed.name, "One More Time");
        assert_eq!(seed.primary_artist_id(), Some("daft"));
    }

    #[test]
    fn test_load_seed_file_rejects_empty_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{"id": "", "name": "Nameless"}"#).unwrap();

        let err = load_seed_file(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidSeed { .. }));
    }

    #[test]
    fn test_load_seed_file_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_seed_file(&path).unwrap_err();
        assert!(err.to_string().contains("parsing seed file"));
    }
}
