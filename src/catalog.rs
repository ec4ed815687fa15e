//! Catalog provider seam.
//!
//! The playlist builder and the upload handler only ever talk to the music
//! catalog through this trait, so tests can substitute a mock and the real
//! Spotify client stays an injection detail of process startup.

use async_trait::async_trait;

use crate::error::ApiError;

/// Operations the playlist builder needs from the music catalog provider.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolves the id of the user owning the configured access token.
    ///
    /// Fails with [`ApiError::Auth`] when the provider rejects the token.
    async fn current_user_id(&self) -> Result<String, ApiError>;

    /// Creates a public playlist for the given user and returns its id.
    async fn create_playlist(&self, user_id: &str, name: &str) -> Result<String, ApiError>;

    /// Searches for one track matching artist and title.
    ///
    /// Returns the first hit's track URI, or `None` when the search comes
    /// back empty. A miss is not an error.
    async fn search_track(&self, artist: &str, track: &str) -> Result<Option<String>, ApiError>;

    /// Appends tracks to a playlist in the given order.
    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError>;
}
