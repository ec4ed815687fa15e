//! Command-line interface implementations.
//!
//! Two entry points: `serve` wires the real provider clients into the HTTP
//! server, and `create` runs the same normalize-and-build pipeline directly
//! against a local text file or stdin, with console feedback instead of an
//! HTTP response.

mod create;
mod serve;

pub use create::create;
pub use serve::serve;
