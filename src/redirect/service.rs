//! The redirect service.
//!
//! # Responsibilities
//! - Derive the lookup key from the request path
//! - Answer a hit with `301 Moved Permanently`
//! - Hand a miss to the fallback service, request unmodified

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{header, HeaderValue, Request, Response, StatusCode};
use futures_util::future::{ready, Either, Ready};
use percent_encoding::{utf8_percent_encode, CONTROLS};
use tower::Service;

use crate::redirect::document::{DecodeError, DocumentFormat};
use crate::redirect::sanitize::lookup_key;
use crate::redirect::table::{PathRecord, PathRecords, RedirectTable};

/// Redirects configured paths and delegates everything else to `fallback`.
///
/// Cloning is cheap: the table is shared behind an `Arc`.
#[derive(Debug)]
pub struct RedirectService<T, S> {
    table: Arc<T>,
    fallback: S,
}

impl<T, S> RedirectService<T, S> {
    pub fn new(table: T, fallback: S) -> Self {
        Self::from_shared(Arc::new(table), fallback)
    }

    pub(crate) fn from_shared(table: Arc<T>, fallback: S) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn fallback(&self) -> &S {
        &self.fallback
    }
}

impl<S> RedirectService<PathRecords, S> {
    /// Build from records decoded by any parser.
    pub fn from_records(records: Vec<PathRecord>, fallback: S) -> Self {
        Self::new(PathRecords::from(records), fallback)
    }

    /// Decode `document` once and build a service over its records.
    pub fn from_document(
        format: DocumentFormat,
        document: &[u8],
        fallback: S,
    ) -> Result<Self, DecodeError> {
        let records = format.decode(document)?;
        Ok(Self::from_records(records, fallback))
    }
}

impl<T, S: Clone> Clone for RedirectService<T, S> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            fallback: self.fallback.clone(),
        }
    }
}

impl<T, S, ReqBody, ResBody> Service<Request<ReqBody>> for RedirectService<T, S>
where
    T: RedirectTable,
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    ResBody: Default,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Either<Ready<Result<Response<ResBody>, S::Error>>, S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.fallback.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let key = lookup_key(req.uri().path());

        if let Some(target) = self.table.lookup(&key) {
            tracing::debug!(path = %key, url = %target, "Redirecting");
            return Either::Left(ready(Ok(permanent_redirect(target))));
        }

        Either::Right(self.fallback.call(req))
    }
}

/// Build an empty-bodied `301` pointing at `target`.
///
/// Control and non-ASCII bytes are percent-encoded so the `Location` header
/// is always a valid header value.
pub fn permanent_redirect<B: Default>(target: &str) -> Response<B> {
    let location = utf8_percent_encode(target, CONTROLS).to_string();
    let mut response = Response::new(B::default());

    match HeaderValue::try_from(location) {
        Ok(value) => {
            *response.status_mut() = StatusCode::MOVED_PERMANENTLY;
            response.headers_mut().insert(header::LOCATION, value);
        }
        Err(e) => {
            tracing::error!(url = %target, error = %e, "Unencodable redirect target");
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        }
    }

    response
}
