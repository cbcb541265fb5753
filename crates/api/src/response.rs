//! Confirmation payloads for endpoints that do not return a record.
//!
//! Record-returning endpoints serialize the model directly; soft deletes and
//! assignment changes answer with a human-readable `mensaje` plus the ids
//! involved.

use serde::Serialize;
use staffing_core::types::DbId;

/// Plain `{ "mensaje": ... }` body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

/// Body returned after soft-deleting an employee or project.
#[derive(Debug, Serialize)]
pub struct DeactivatedResponse {
    pub mensaje: String,
    pub id: DbId,
    /// Always `false` after a soft delete.
    pub estado: bool,
}

/// Body returned after creating or removing an assignment.
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub mensaje: String,
    pub empleado_id: DbId,
    pub proyecto_id: DbId,
}
