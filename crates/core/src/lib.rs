//! Domain primitives shared by the persistence and HTTP layers.
//!
//! Nothing in this crate touches the database: it holds the id/timestamp
//! aliases, the domain error taxonomy and the pure input validators used
//! before any mutation is committed.

pub mod error;
pub mod types;
pub mod validation;
