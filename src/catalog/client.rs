//! Catalog HTTP client
//!
//! Read-only access to the catalog web API with a bearer token.
//! See: https://developer.spotify.com/documentation/web-api
//!
//! The token is obtained elsewhere (authorization-code exchange); this client
//! only ever sees the resulting access token.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{CatalogError, adapter, dto};
use crate::config::CatalogConfig;
use crate::recommend::domain::{ArtistRecord, CandidateTrack};

/// Upstream limit for `GET /artists?ids=`
pub const MAX_ARTIST_BATCH: usize = 50;

/// Catalog API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    access_token: String,
    base_url: String,
    market: String,
}

impl CatalogClient {
    /// Create a new client for the given access token
    pub fn new(
        access_token: impl Into<String>,
        config: &CatalogConfig,
    ) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            access_token: access_token.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            market: config.market.clone(),
        })
    }

    /// Look up a single artist
    pub async fn get_artist(&self, artist_id: &str) -> Result<ArtistRecord, CatalogError> {
        let path = format!("/artists/{}", urlencoding::encode(artist_id));
        let artist: dto::ArtistObject = self.get_json(&path, &[]).await?;
        Ok(adapter::to_artist_record(artist))
    }

    /// Get an artist's top tracks in the configured market
    pub async fn get_artist_top_tracks(
        &self,
        artist_id: &str,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        let path = format!("/artists/{}/top-tracks", urlencoding::encode(artist_id));
        let response: dto::TopTracksResponse = self
            .get_json(&path, &[("market", self.market.clone())])
            .await?;
        Ok(adapter::to_candidates(response.tracks))
    }

    /// Keyword search for tracks
    pub async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        let response: dto::SearchResponse = self
            .get_json(
                "/search",
                &[
                    ("q", query.to_string()),
                    ("type", "track".to_string()),
                    ("limit", limit.to_string()),
                    ("market", self.market.clone()),
                ],
            )
            .await?;
        Ok(adapter::search_to_candidates(response))
    }

    /// Look up several artists at once (at most [`MAX_ARTIST_BATCH`])
    pub async fn get_artists(
        &self,
        artist_ids: &[String],
    ) -> Result<Vec<ArtistRecord>, CatalogError> {
        check_batch_size(artist_ids.len())?;
        if artist_ids.is_empty() {
            return Ok(Vec::new());
        }

        let response: dto::ArtistsResponse = self
            .get_json("/artists", &[("ids", artist_ids.join(","))])
            .await?;
        Ok(adapter::to_artist_records(response))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send an authenticated GET and parse the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<dto::ApiErrorResponse>().await.ok();
            return Err(status_error(status, body, path));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

/// Map a non-success response to an error
fn status_error(
    status: StatusCode,
    body: Option<dto::ApiErrorResponse>,
    path: &str,
) -> CatalogError {
    match status {
        StatusCode::UNAUTHORIZED => CatalogError::Unauthorized,
        StatusCode::NOT_FOUND => CatalogError::NotFound(path.to_string()),
        StatusCode::TOO_MANY_REQUESTS => CatalogError::RateLimited,
        _ => match body {
            Some(error) => CatalogError::ApiError(error.error.message),
            None => CatalogError::Network(format!("HTTP {}", status)),
        },
    }
}

fn check_batch_size(requested: usize) -> Result<(), CatalogError> {
    if requested > MAX_ARTIST_BATCH {
        return Err(CatalogError::BatchTooLarge {
            requested,
            limit: MAX_ARTIST_BATCH,
        });
    }
    Ok(())
}
