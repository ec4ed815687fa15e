use crate::{
    error::ApiError,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
    },
};

use super::SpotifyClient;

/// Description attached to every generated playlist.
const PLAYLIST_DESCRIPTION: &str = "Generated from an uploaded setlist";

impl SpotifyClient {
    /// Creates a public playlist owned by the given user.
    pub(crate) async fn create_user_playlist(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<CreatePlaylistResponse, ApiError> {
        let api_url = format!(
            "{uri}/users/{user_id}/playlists",
            uri = self.api_url,
            user_id = user_id
        );

        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: PLAYLIST_DESCRIPTION.to_string(),
            public: true,
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Catalog(e.to_string()))?;

        response
            .json::<CreatePlaylistResponse>()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))
    }

    /// Appends tracks to a playlist in the given order, in one request.
    pub(crate) async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<AddTracksResponse, ApiError> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.api_url,
            playlist_id = playlist_id
        );

        let body = AddTracksRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Catalog(e.to_string()))?;

        response
            .json::<AddTracksResponse>()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))
    }
}
