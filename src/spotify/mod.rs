//! # Spotify Integration Module
//!
//! Client for the Spotify Web API operations the playlist builder needs:
//! resolving the current user, searching tracks, creating playlists, and
//! appending tracks. All HTTP communication goes through one owned
//! `reqwest::Client`; every response deserializes into an explicit schema
//! from [`crate::types`], so a malformed body becomes a typed error at the
//! boundary instead of a missing-field surprise later.
//!
//! ## Authentication
//!
//! The client holds a pre-issued access token from configuration and sends
//! it as a bearer header on every call. There is no OAuth flow and no
//! refresh: a rejected token surfaces as an auth error and the operator has
//! to configure a new one.
//!
//! ## API Coverage
//!
//! - `GET /me` - current user ([`user`])
//! - `GET /search` - track search, limit 1 ([`search`])
//! - `POST /users/{user_id}/playlists` - create playlist ([`playlist`])
//! - `POST /playlists/{playlist_id}/tracks` - add tracks ([`playlist`])

use async_trait::async_trait;
use reqwest::Client;

use crate::{catalog::Catalog, config, error::ApiError};

mod playlist;
mod search;
mod user;

/// Spotify Web API client holding the base URL and the pre-issued token.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(api_url: String, access_token: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            api_url,
            access_token,
        }
    }

    /// Builds a client from the process configuration.
    ///
    /// # Panics
    ///
    /// Panics if `SPOTIFY_ACCESS_TOKEN` is not set; call after
    /// `config::load_env`.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl(), config::spotify_access_token())
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn current_user_id(&self) -> Result<String, ApiError> {
        Ok(self.current_user().await?.id)
    }

    async fn create_playlist(&self, user_id: &str, name: &str) -> Result<String, ApiError> {
        Ok(self.create_user_playlist(user_id, name).await?.id)
    }

    async fn search_track(&self, artist: &str, track: &str) -> Result<Option<String>, ApiError> {
        Ok(self.search_first_track(artist, track).await?.map(|t| t.uri))
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError> {
        self.add_tracks_to_playlist(playlist_id, uris).await?;
        Ok(())
    }
}
