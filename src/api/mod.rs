// src/api/mod.rs
// API module: REST endpoints for the page widgets

pub mod error;
pub mod http;

pub use error::{ApiError, ApiResult};
pub use http::router::{api_router, create_router};
