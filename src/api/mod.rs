//! HTTP API for the explorer front-end
//!
//! REST endpoints over the search session: expansion, search, documents,
//! relation graph and CSV export.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
