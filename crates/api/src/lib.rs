//! Staffing API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes) and
//! [`build_app`], so integration tests run the exact router the binary serves.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;

pub use app::build_app;
