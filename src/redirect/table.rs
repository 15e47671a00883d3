//! Lookup tables mapping request paths to redirect targets.
//!
//! # Responsibilities
//! - Store path → URL associations (hash map or ordered records)
//! - Exact, case-sensitive lookup of an already sanitized key
//!
//! # Design Decisions
//! - `PathMapping` is O(1); duplicate keys resolve at insert time (last wins)
//! - `PathRecords` is an O(n) scan in document order (first match wins)
//! - Both are read-only once handed to a service

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A source of redirect targets keyed by request path.
pub trait RedirectTable: Send + Sync {
    /// Returns the target URL for `path`, if one is configured.
    fn lookup(&self, path: &str) -> Option<&str>;

    /// Number of configured entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Direct in-memory mapping from path to URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    paths: HashMap<String, String>,
}

impl PathMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping, replacing any URL already configured for `path`.
    pub fn insert(&mut self, path: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.paths.insert(path.into(), url.into())
    }
}

impl From<HashMap<String, String>> for PathMapping {
    fn from(paths: HashMap<String, String>) -> Self {
        Self { paths }
    }
}

impl<P, U> FromIterator<(P, U)> for PathMapping
where
    P: Into<String>,
    U: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        Self {
            paths: iter
                .into_iter()
                .map(|(p, u)| (p.into(), u.into()))
                .collect(),
        }
    }
}

impl RedirectTable for PathMapping {
    fn lookup(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.paths.len()
    }
}

/// A single `{path, url}` entry decoded from a redirect document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathRecord {
    pub path: String,
    pub url: String,
}

impl PathRecord {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Ordered records searched in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRecords {
    records: Vec<PathRecord>,
}

impl PathRecords {
    pub fn records(&self) -> &[PathRecord] {
        &self.records
    }
}

impl From<Vec<PathRecord>> for PathRecords {
    fn from(records: Vec<PathRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<PathRecord> for PathRecords {
    fn from_iter<I: IntoIterator<Item = PathRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl RedirectTable for PathRecords {
    fn lookup(&self, path: &str) -> Option<&str> {
        // Later records with the same path are unreachable.
        self.records
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.url.as_str())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
