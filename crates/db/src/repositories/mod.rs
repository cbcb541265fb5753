//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod assignment_repo;
pub mod employee_repo;
pub mod project_repo;

pub use assignment_repo::AssignmentRepo;
pub use employee_repo::EmployeeRepo;
pub use project_repo::ProjectRepo;

/// Current UTC time in the RFC 3339 text form stored in timestamp columns.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
