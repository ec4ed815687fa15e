use crate::{
    error::ApiError,
    types::{SearchTracksResponse, Track},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Searches the catalog for one track matching artist and title.
    ///
    /// Issues a single `/search` request with the structured query
    /// `track:<title> artist:<artist>` and `limit=1`. Returns the first hit,
    /// or `None` when the result set is empty; a miss is not an error.
    ///
    /// # Example
    ///
    /// ```
    /// let hit = client.search_first_track("Radiohead", "Karma Police").await?;
    /// if let Some(track) = hit {
    ///     println!("matched {}", track.uri);
    /// }
    /// ```
    pub(crate) async fn search_first_track(
        &self,
        artist: &str,
        track: &str,
    ) -> Result<Option<Track>, ApiError> {
        let api_url = format!("{uri}/search", uri = self.api_url);
        let query = format!("track:{track} artist:{artist}");

        let response = self
            .http
            .get(&api_url)
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Catalog(e.to_string()))?;

        let json = response
            .json::<SearchTracksResponse>()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))?;

        Ok(json.tracks.items.into_iter().next())
    }
}
