//! Default fallback for requests no redirect matched.
//!
//! | Path       | Response                  |
//! |------------|---------------------------|
//! | `/`        | 200 `Hello, world!`       |
//! | `/healthz` | 200 `ok`                  |
//! | otherwise  | 404 `404 page not found`  |

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};

pub fn default_mux() -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/healthz", get(healthz))
        .fallback(not_found)
}

async fn hello() -> &'static str {
    "Hello, world!"
}

async fn healthz() -> &'static str {
    "ok"
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}
