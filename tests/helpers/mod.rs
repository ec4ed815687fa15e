//! Mock provider clients for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use setlify::catalog::Catalog;
use setlify::error::ApiError;
use setlify::extraction::Extractor;

/// In-memory catalog recording every call it receives.
pub struct MockCatalog {
    tracks: HashMap<String, String>,
    pub reject_token: bool,
    pub fail_search_for: Option<String>,
    pub calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<String>>,
    pub added: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        MockCatalog {
            tracks: HashMap::new(),
            reject_token: false,
            fail_search_for: None,
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            added: Mutex::new(Vec::new()),
        }
    }

    /// Catalog that answers searches from the given (artist, track, uri) set.
    pub fn with_tracks(hits: &[(&str, &str, &str)]) -> Self {
        let mut catalog = Self::new();
        for (artist, track, uri) in hits {
            catalog
                .tracks
                .insert(Self::key(artist, track), uri.to_string());
        }
        catalog
    }

    fn key(artist: &str, track: &str) -> String {
        format!("{artist} - {track}")
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn added_uris(&self) -> Vec<String> {
        self.added.lock().unwrap().clone()
    }

    pub fn created_names(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl Catalog for MockCatalog {
    async fn current_user_id(&self) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push("me".to_string());
        if self.reject_token {
            return Err(ApiError::Auth("access token rejected (401)".to_string()));
        }
        Ok("user-1".to_string())
    }

    async fn create_playlist(&self, user_id: &str, name: &str) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push(format!("create:{user_id}"));
        self.created.lock().unwrap().push(name.to_string());
        Ok("pl-1".to_string())
    }

    async fn search_track(&self, artist: &str, track: &str) -> Result<Option<String>, ApiError> {
        self.calls.lock().unwrap().push(format!("search:{artist}"));
        if self.fail_search_for.as_deref() == Some(artist) {
            return Err(ApiError::Catalog("search request failed".to_string()));
        }
        Ok(self.tracks.get(&Self::key(artist, track)).cloned())
    }

    async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("add:{playlist_id}"));
        self.added.lock().unwrap().extend(uris.iter().cloned());
        Ok(())
    }
}

/// Extractor stub: `None` simulates a non-success provider response.
pub struct MockExtractor {
    pub text: Option<String>,
    pub calls: Mutex<usize>,
}

impl MockExtractor {
    pub fn returning(text: &str) -> Self {
        MockExtractor {
            text: Some(text.to_string()),
            calls: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        MockExtractor {
            text: None,
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    async fn extract_text(&self, _image: &[u8]) -> Result<String, ApiError> {
        *self.calls.lock().unwrap() += 1;
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => Err(ApiError::Extraction(
                "extraction endpoint answered 500".to_string(),
            )),
        }
    }
}
