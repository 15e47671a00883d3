//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + CLI overrides
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShortenerConfig (validated, immutable)
//!     → consumed once at startup to build the redirect chain
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ShortenerConfig;
pub use schema::{ListenerConfig, ObservabilityConfig, RedirectsConfig, TimeoutConfig};
pub use validation::{validate_config, ValidationError};
