//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → tower-http trace spans per request, tagged with x-request-id
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through every span
//! - Redirect hits log at debug; table loading logs at info

pub mod logging;

pub use logging::init_logging;
