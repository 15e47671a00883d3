//! Tower layer form of the redirect service.

use std::collections::HashMap;
use std::sync::Arc;

use tower::Layer;

use crate::redirect::document::{DecodeError, DocumentFormat};
use crate::redirect::service::RedirectService;
use crate::redirect::table::{PathMapping, PathRecords};

/// Wraps an inner service so that configured paths redirect and every other
/// request reaches the inner service as the fallback.
#[derive(Debug)]
pub struct RedirectLayer<T> {
    table: Arc<T>,
}

impl<T> RedirectLayer<T> {
    pub fn new(table: T) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

impl RedirectLayer<PathMapping> {
    pub fn mapping(paths_to_urls: HashMap<String, String>) -> Self {
        Self::new(PathMapping::from(paths_to_urls))
    }
}

impl RedirectLayer<PathRecords> {
    pub fn document(format: DocumentFormat, document: &[u8]) -> Result<Self, DecodeError> {
        let records = format.decode(document)?;
        Ok(Self::new(PathRecords::from(records)))
    }
}

impl<T> Clone for RedirectLayer<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T, S> Layer<S> for RedirectLayer<T> {
    type Service = RedirectService<T, S>;

    fn layer(&self, inner: S) -> Self::Service {
        RedirectService::from_shared(Arc::clone(&self.table), inner)
    }
}
