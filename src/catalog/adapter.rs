//! Adapter layer: Convert catalog DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::dto;
use crate::recommend::domain::{ArtistRecord, ArtistRef, CandidateTrack};

/// Convert a track object to a candidate.
///
/// Returns `None` for tracks without an ID (local files), since they can't
/// be deduplicated or recommended.
pub fn to_candidate(track: dto::TrackObject) -> Option<CandidateTrack> {
    let id = track.id.filter(|id| !id.is_empty())?;

    let primary_artist_id = track
        .artists
        .first()
        .and_then(|a| a.id.clone())
        .filter(|id| !id.is_empty());

    let artists = track
        .artists
        .into_iter()
        .map(|a| ArtistRef {
            id: a.id,
            name: a.name,
        })
        .collect();

    let (album_name, image_url) = match track.album {
        Some(album) => {
            let image = album.images.into_iter().next().map(|i| i.url);
            (album.name, image.unwrap_or_default())
        }
        None => (String::new(), String::new()),
    };

    Some(CandidateTrack {
        id,
        name: track.name,
        artists,
        album_name,
        duration_ms: track.duration_ms,
        image_url,
        primary_artist_id,
    })
}

/// Convert a list of track objects, dropping the ones without IDs
pub fn to_candidates(tracks: impl IntoIterator<Item = dto::TrackObject>) -> Vec<CandidateTrack> {
    tracks.into_iter().filter_map(to_candidate).collect()
}

/// Convert a search response, skipping null items
pub fn search_to_candidates(response: dto::SearchResponse) -> Vec<CandidateTrack> {
    response
        .tracks
        .map(|paging| to_candidates(paging.items.into_iter().flatten()))
        .unwrap_or_default()
}

pub fn to_artist_record(artist: dto::ArtistObject) -> ArtistRecord {
    ArtistRecord {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
    }
}

/// Convert a batch response, skipping null entries for unknown IDs
pub fn to_artist_records(response: dto::ArtistsResponse) -> Vec<ArtistRecord> {
    response
        .artists
        .into_iter()
        .flatten()
        .map(to_artist_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_track(id: Option<&str>, artists: &[(Option<&str>, &str)]) -> dto::TrackObject {
        dto::TrackObject {
            id: id.map(String::from),
            name: "Song".to_string(),
            artists: artists
                .iter()
                .map(|(id, name)| dto::SimplifiedArtist {
                    id: id.map(String::from),
                    name: name.to_string(),
                })
                .collect(),
            album: Some(dto::AlbumObject {
                name: "Album".to_string(),
                images: vec![
                    dto::ImageObject {
                        url: "https://img/large".to_string(),
                        width: Some(640),
                        height: Some(640),
                    },
                    dto::ImageObject {
                        url: "https://img/small".to_string(),
                        width: Some(64),
                        height: Some(64),
                    },
                ],
            }),
            duration_ms: 185_000,
        }
    }

    #[test]
    fn test_convert_track() {
        let track = make_track(Some("t1"), &[(Some("a1"), "Alpha"), (Some("a2"), "Beta")]);

        let candidate = to_candidate(track).unwrap();

        assert_eq!(candidate.id, "t1");
        assert_eq!(candidate.primary_artist_id.as_deref(), Some("a1"));
        assert_eq!(candidate.artists.len(), 2);
        assert_eq!(candidate.album_name, "Album");
        assert_eq!(candidate.image_url, "https://img/large");
        assert_eq!(candidate.duration_ms, 185_000);
    }

    #[test]
    fn test_track_without_id_is_dropped() {
        let artists = [(Some("a1"), "Alpha")];
        assert!(to_candidate(make_track(None, &artists)).is_none());
        assert!(to_candidate(make_track(Some(""), &artists)).is_none());
    }

    #[test]
    fn test_track_without_artist_id() {
        let candidate = to_candidate(make_track(Some("t1"), &[(None, "Local")])).unwrap();
        assert!(candidate.primary_artist_id.is_none());
        assert_eq!(candidate.artists[0].name, "Local");
    }

    #[test]
    fn test_track_without_album() {
        let mut track = make_track(Some("t1"), &[]);
        track.album = None;

        let candidate = to_candidate(track).unwrap();
        assert!(candidate.album_name.is_empty());
        assert!(candidate.image_url.is_empty());
        assert!(candidate.primary_artist_id.is_none());
    }

    #[test]
    fn test_search_skips_null_items() {
        let response = dto::SearchResponse {
            tracks: Some(dto::Paging {
                items: vec![Some(make_track(Some("t1"), &[])), None],
                total: Some(2),
            }),
        };
        let candidates = search_to_candidates(response);
        assert_eq!(candidates.len(), 1);

        let empty = dto::SearchResponse { tracks: None };
        assert!(search_to_candidates(empty).is_empty());
    }

    #[test]
    fn test_artist_batch_skips_nulls() {
        let response = dto::ArtistsResponse {
            artists: vec![
                Some(dto::ArtistObject {
                    id: "a1".to_string(),
                    name: "One".to_string(),
                    genres: vec!["techno".to_string()],
                }),
                None,
            ],
        };
        let records = to_artist_records(response);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].genres, vec!["techno".to_string()]);
    }
}
