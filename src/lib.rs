//! URL shortener: permanent redirects for configured paths, with a fallback
//! service for everything else.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;

pub use config::ShortenerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use redirect::{json_handler, map_handler, yaml_handler, RedirectLayer, RedirectService};
