//! Redirect document decoding.
//!
//! Parsing is delegated to serde: `serde_yaml` for YAML and `serde_json` for
//! JSON. Both expect a top-level sequence of `{path, url}` records; unknown
//! record fields are ignored, missing ones are an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::redirect::table::PathRecord;

/// Errors produced while decoding a redirect document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid YAML redirect document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON redirect document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supported redirect document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Decode `document` into records, preserving document order.
    pub fn decode(self, document: &[u8]) -> Result<Vec<PathRecord>, DecodeError> {
        if document.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        // A document that is explicitly null carries no records.
        let records: Option<Vec<PathRecord>> = match self {
            Self::Yaml => serde_yaml::from_slice(document)?,
            Self::Json => serde_json::from_slice(document)?,
        };
        Ok(records.unwrap_or_default())
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_yaml_in_order() {
        let doc = b"- path: /urlshort\n  url: https://github.com/gophercises/urlshort\n- path: /urlshort-final\n  url: https://github.com/gophercises/urlshort/tree/solution\n";
        let records = DocumentFormat::Yaml.decode(doc).unwrap();

        assert_eq!(
            records,
            vec![
                PathRecord::new("/urlshort", "https://github.com/gophercises/urlshort"),
                PathRecord::new(
                    "/urlshort-final",
                    "https://github.com/gophercises/urlshort/tree/solution"
                ),
            ]
        );
    }

    #[test]
    fn test_decode_yaml_ignores_unknown_fields() {
        let doc = b"- path: /foo\n  url: https://foo.com\n  owner: ops\n";
        let records = DocumentFormat::Yaml.decode(doc).unwrap();
        assert_eq!(records, vec![PathRecord::new("/foo", "https://foo.com")]);
    }

    #[test]
    fn test_decode_yaml_rejects_bare_scalar() {
        let err = DocumentFormat::Yaml.decode(b"just a string").unwrap_err();
        assert!(matches!(err, DecodeError::Yaml(_)));
    }

    #[test]
    fn test_decode_yaml_rejects_mapping_top_level() {
        let err = DocumentFormat::Yaml
            .decode(b"path: /foo\nurl: https://foo.com\n")
            .unwrap_err();
        assert!(matches!(err, DecodeError::Yaml(_)));
    }

    #[test]
    fn test_decode_yaml_rejects_missing_url() {
        let err = DocumentFormat::Yaml.decode(b"- path: /foo\n").unwrap_err();
        assert!(err.to_string().contains("url"));
    }

    #[test]
    fn test_decode_yaml_rejects_syntax_error() {
        assert!(DocumentFormat::Yaml.decode(b"- path: [unclosed\n").is_err());
    }

    #[test]
    fn test_decode_empty_documents() {
        assert!(DocumentFormat::Yaml.decode(b"").unwrap().is_empty());
        assert!(DocumentFormat::Yaml.decode(b"  \n").unwrap().is_empty());
        assert!(DocumentFormat::Yaml.decode(b"[]").unwrap().is_empty());
        assert!(DocumentFormat::Json.decode(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_decode_json() {
        let doc = br#"[{"path": "/foo", "url": "https://foo.com"}, {"path": "/bar", "url": "https://bar.com"}]"#;
        let records = DocumentFormat::Json.decode(doc).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], PathRecord::new("/bar", "https://bar.com"));

        let err = DocumentFormat::Json.decode(br#"{"path": "/foo"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("paths.yaml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("conf/paths.YML")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("paths.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("paths.txt")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("paths")), None);
    }
}
