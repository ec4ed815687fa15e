//! Image-to-text extraction provider.
//!
//! When a setlist arrives as a photo, the raw image bytes are shipped as an
//! opaque binary payload to an external extraction endpoint which answers
//! with `{"extracted_text": "..."}`. The provider's internals are out of
//! scope; only this request/response contract matters here.

use async_trait::async_trait;
use reqwest::{Client, header::CONTENT_TYPE};

use crate::{config, error::ApiError, types::ExtractedText};

/// Seam for the image-to-text provider, mockable in tests.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extracts setlist text from raw image bytes.
    ///
    /// Any non-success response from the provider is fatal for the whole
    /// upload and surfaces as [`ApiError::Extraction`].
    async fn extract_text(&self, image: &[u8]) -> Result<String, ApiError>;
}

/// Client for the Gemini extraction endpoint.
pub struct GeminiClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        GeminiClient {
            http: Client::new(),
            api_url,
            api_key,
        }
    }

    /// Builds a client from the process configuration.
    ///
    /// # Panics
    ///
    /// Panics if `GEMINI_API_KEY` is not set; call after `config::load_env`.
    pub fn from_env() -> Self {
        Self::new(config::gemini_api_url(), config::gemini_api_key())
    }
}

#[async_trait]
impl Extractor for GeminiClient {
    async fn extract_text(&self, image: &[u8]) -> Result<String, ApiError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| ApiError::Extraction(e.to_string()))?
            .error_for_status()
            .map_err(|e| ApiError::Extraction(e.to_string()))?;

        let body = response
            .json::<ExtractedText>()
            .await
            .map_err(|e| ApiError::Extraction(e.to_string()))?;

        Ok(body.extracted_text)
    }
}
