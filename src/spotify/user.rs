use reqwest::StatusCode;

use crate::{error::ApiError, types::CurrentUserResponse};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves the profile of the user owning the access token.
    ///
    /// A 401 or 403 from the provider means the pre-issued token is expired
    /// or invalid and maps to [`ApiError::Auth`]; there is no refresh flow.
    pub(crate) async fn current_user(&self) -> Result<CurrentUserResponse, ApiError> {
        let api_url = format!("{uri}/me", uri = self.api_url);

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Auth(format!("access token rejected ({status})")));
        }

        let response = response
            .error_for_status()
            .map_err(|e| ApiError::Catalog(e.to_string()))?;

        response
            .json::<CurrentUserResponse>()
            .await
            .map_err(|e| ApiError::Catalog(e.to_string()))
    }
}
