//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / propagate x-request-id)
//!     → redirect chain (document → inline paths)
//!     → fallback.rs (default mux) on miss
//!     → Send to client
//! ```

pub mod fallback;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
