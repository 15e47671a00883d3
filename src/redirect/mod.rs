//! Redirect resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → sanitize.rs (percent-decode, HTML-escape → lookup key)
//!     → table.rs (PathMapping: exact key / PathRecords: first match in order)
//!     → hit:  301 Moved Permanently + Location
//!     → miss: fallback service, original request untouched
//!
//! Table Construction (at startup):
//!     HashMap<String, String>     → PathMapping
//!     document bytes (YAML/JSON)  → document.rs → PathRecords
//!     → Freeze behind Arc, shared by every clone of the service
//! ```
//!
//! # Design Decisions
//! - Tables are immutable after construction (thread-safe without locks)
//! - Resolution is synchronous; a hit never touches the fallback
//! - Decode errors surface at construction, never per request
//! - The service's error type is the fallback's; redirects cannot fail

pub mod document;
pub mod layer;
pub mod sanitize;
pub mod service;
pub mod table;

use std::collections::HashMap;

pub use document::{DecodeError, DocumentFormat};
pub use layer::RedirectLayer;
pub use service::RedirectService;
pub use table::{PathMapping, PathRecord, PathRecords, RedirectTable};

/// Redirect every path in `paths_to_urls` to its URL, delegating anything
/// else to `fallback`.
pub fn map_handler<S>(
    paths_to_urls: HashMap<String, String>,
    fallback: S,
) -> RedirectService<PathMapping, S> {
    RedirectService::new(PathMapping::from(paths_to_urls), fallback)
}

/// Parse a YAML list of `path`/`url` records and redirect matching paths,
/// delegating anything else to `fallback`.
///
/// ```yaml
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
///
/// The only error is a document that does not decode into that shape.
pub fn yaml_handler<S>(
    yml: &[u8],
    fallback: S,
) -> Result<RedirectService<PathRecords, S>, DecodeError> {
    RedirectService::from_document(DocumentFormat::Yaml, yml, fallback)
}

/// Same as [`yaml_handler`] for a JSON array of `{"path", "url"}` objects.
pub fn json_handler<S>(
    json: &[u8],
    fallback: S,
) -> Result<RedirectService<PathRecords, S>, DecodeError> {
    RedirectService::from_document(DocumentFormat::Json, json, fallback)
}
