//! Startup orchestration.
//!
//! # Responsibilities
//! - Read and decode the redirect document, if one is configured
//! - Assemble the redirect chain in front of the fallback
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The document is read and parsed exactly once, here
//! - Listeners start last (traffic only when ready)

use std::path::PathBuf;

use thiserror::Error;

use crate::config::RedirectsConfig;
use crate::redirect::{DecodeError, PathMapping, PathRecords, RedirectService, RedirectTable};

/// Document redirects, then inline path redirects, then `S`.
pub type RedirectChain<S> = RedirectService<PathRecords, RedirectService<PathMapping, S>>;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read redirect document {path:?}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode redirect document {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("cannot infer format of redirect document {0:?}")]
    UnknownFormat(PathBuf),

    #[error("listener error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the redirect chain described by `config` in front of `fallback`.
pub fn build_redirects<S>(
    config: &RedirectsConfig,
    fallback: S,
) -> Result<RedirectChain<S>, StartupError> {
    let mapping = PathMapping::from(config.paths.clone());
    let inline = RedirectService::new(mapping, fallback);

    let chain = match config.document_source() {
        Some((path, Some(format))) => {
            let bytes = std::fs::read(path).map_err(|source| StartupError::Document {
                path: path.clone(),
                source,
            })?;
            RedirectService::from_document(format, &bytes, inline).map_err(|source| {
                StartupError::Decode {
                    path: path.clone(),
                    source,
                }
            })?
        }
        Some((path, None)) => return Err(StartupError::UnknownFormat(path.clone())),
        None => RedirectService::new(PathRecords::default(), inline),
    };

    tracing::info!(
        document_records = chain.table().len(),
        inline_paths = chain.fallback().table().len(),
        "Redirect tables loaded"
    );

    Ok(chain)
}
