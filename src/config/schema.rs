//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::redirect::DocumentFormat;

/// Root configuration for the URL shortener.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShortenerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Redirect sources.
    pub redirects: RedirectsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Log output format ("pretty" or "json").
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

/// Where redirects come from.
///
/// A request is checked against the document first, then against `paths`,
/// then handed to the default fallback.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Optional redirect document (list of `path`/`url` records).
    pub document: Option<PathBuf>,

    /// Document format; inferred from the file extension when absent.
    pub format: Option<DocumentFormat>,

    /// Inline path → URL mapping.
    pub paths: HashMap<String, String>,
}

impl RedirectsConfig {
    /// The document path and its resolved format, if a document is configured.
    pub fn document_source(&self) -> Option<(&PathBuf, Option<DocumentFormat>)> {
        self.document
            .as_ref()
            .map(|path| (path, self.format.or_else(|| DocumentFormat::from_path(path))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: ShortenerConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert_eq!(config.observability.log_format, "pretty");
        assert!(config.redirects.document.is_none());
        assert!(config.redirects.paths.is_empty());
    }

    #[test]
    fn test_full_config() {
        let config: ShortenerConfig = toml::from_str(
            r#"
            [listener]
            bind_address = "0.0.0.0:9000"

            [redirects]
            document = "paths.json"

            [redirects.paths]
            "/urlshort-godoc" = "https://godoc.org/github.com/gophercises/urlshort"
            "/yaml-godoc" = "https://godoc.org/gopkg.in/yaml.v2"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
        assert_eq!(config.redirects.paths.len(), 2);
        let (path, format) = config.redirects.document_source().unwrap();
        assert_eq!(path, &PathBuf::from("paths.json"));
        assert_eq!(format, Some(DocumentFormat::Json));
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let config: ShortenerConfig = toml::from_str(
            r#"
            [redirects]
            document = "redirects.txt"
            format = "yaml"
            "#,
        )
        .unwrap();

        let (_, format) = config.redirects.document_source().unwrap();
        assert_eq!(format, Some(DocumentFormat::Yaml));
    }
}
