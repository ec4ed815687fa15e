//! Setlist-to-Playlist Library
//!
//! This library turns a user-submitted setlist (typed text or a photographed
//! image) into a Spotify playlist. It exposes a small HTTP server with a single
//! upload endpoint plus a CLI front, and keeps the two logical pieces (setlist
//! normalization and playlist orchestration) as plain, testable functions.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the upload server
//! - `builder` - Playlist orchestration against the catalog provider
//! - `catalog` - Catalog provider trait (the mockable Spotify seam)
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP response mapping
//! - `extraction` - Image-to-text provider client
//! - `server` - HTTP server wiring and shared application state
//! - `setlist` - Setlist text normalization
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and wire schemas
//!
//! # Example
//!
//! ```
//! use setlify::{config, setlist};
//!
//! #[tokio::main]
//! async fn main() -> setlify::Res<()> {
//!     config::load_env().await?;
//!     let entries = setlist::normalize("Radiohead - Karma Police");
//!     assert_eq!(entries.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod builder;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod server;
pub mod setlist;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for glue code that deals with
/// heterogeneous failures, using a boxed dynamic error trait object with
/// Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used to provide positive feedback when operations complete successfully.
///
/// # Example
///
/// ```
/// success!("Playlist created. ID: {}", playlist_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 immediately after printing. Only for fatal
/// errors where recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues or important information that users should
/// notice without terminating the program.
///
/// # Example
///
/// ```
/// warning!("No matching tracks found");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
