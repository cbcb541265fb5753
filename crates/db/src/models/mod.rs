//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO carrying the full replacement payload
//!
//! JSON field names follow the service's public (Spanish) API; the Rust
//! field and column names are English.

pub mod assignment;
pub mod employee;
pub mod project;
