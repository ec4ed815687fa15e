//! # API Module
//!
//! HTTP endpoints of the setlist upload server, built on
//! [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`index`] - Serves the embedded HTML upload form (GET `/`).
//! - [`health`] - Health check returning status and version (GET `/health`).
//! - [`upload`] - Accepts the multipart setlist submission, runs normalization
//!   and playlist creation, and answers with a `{"message": …}` body
//!   (POST `/upload`).
//!
//! ## Error responses
//!
//! Handlers return [`crate::error::ApiError`], which maps validation failures
//! to 400 and provider failures to 500, always with a JSON message body.
//!
//! ## Related Modules
//!
//! - [`crate::server`] - Router construction and shared state
//! - [`crate::builder`] - Playlist orchestration invoked by [`upload`]

mod health;
mod index;
mod upload;

pub use health::health;
pub use index::index;
pub use upload::upload;
