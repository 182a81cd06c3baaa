//! API layer - HTTP transport
//!
//! This module contains all HTTP-related concerns:
//! - The `/graphql` endpoint and explorer
//! - Health and root endpoints
//! - Application state

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
