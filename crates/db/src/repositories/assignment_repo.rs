//! Repository for the `project_employees` link table.

use sqlx::SqlitePool;
use staffing_core::types::DbId;

use crate::models::assignment::Assignment;

const COLUMNS: &str = "employee_id, project_id, assigned_at";

/// Provides create/delete for employee-to-project assignments.
///
/// Links are hard-deleted; there is no soft-delete state.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a link row.
    ///
    /// A second insert of the same pair fails with a unique-violation
    /// database error from the composite primary key; callers map that to a
    /// conflict instead of checking for the pair beforehand.
    pub async fn create(
        pool: &SqlitePool,
        employee_id: DbId,
        project_id: DbId,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_employees (employee_id, project_id)
             VALUES (?1, ?2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(employee_id)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a link. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &SqlitePool,
        employee_id: DbId,
        project_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_employees WHERE employee_id = ?1 AND project_id = ?2")
                .bind(employee_id)
                .bind(project_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
