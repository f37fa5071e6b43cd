//! setlist-server: HTTP surface for the setlist library
//!
//! Translates JSON requests into library calls and maps library
//! errors onto HTTP status codes.

pub mod http;
pub mod state;

pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
