//! Repository for the `projects` table.

use sqlx::SqlitePool;
use staffing_core::types::DbId;

use super::NOW;
use crate::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, budget, active, manager_id, start_date, \
                       created_at, updated_at";

/// Same columns qualified with the `p` alias, for joins.
const P_COLUMNS: &str = "p.id, p.name, p.description, p.budget, p.active, p.manager_id, \
                         p.start_date, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `start_date` is `None` in the input, defaults to today (UTC).
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, budget, active, manager_id, start_date)
             VALUES (?1, ?2, ?3, ?4, ?5, COALESCE(?6, date('now')))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.active)
            .bind(input.manager_id)
            .bind(input.start_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by ID, active or not.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether `name` is used by any project other than `exclude_id`.
    pub async fn name_taken(
        pool: &SqlitePool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM projects WHERE name = ?1 AND (?2 IS NULL OR id <> ?2)",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0 > 0)
    }

    /// List projects matching `filter`, in insertion order.
    pub async fn list(pool: &SqlitePool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE active = ?1
               AND (?2 IS NULL OR budget >= ?2)
               AND (?3 IS NULL OR budget <= ?3)
             ORDER BY id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.active)
            .bind(filter.min_budget)
            .bind(filter.max_budget)
            .fetch_all(pool)
            .await
    }

    /// List the projects an employee is assigned to, in project insertion order.
    pub async fn list_by_employee(
        pool: &SqlitePool,
        employee_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {P_COLUMNS} FROM projects p
             JOIN project_employees pe ON pe.project_id = p.id
             WHERE pe.employee_id = ?1
             ORDER BY p.id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a project's editable fields.
    ///
    /// `active` and `start_date` keep their stored values when `None`;
    /// `manager_id` is always overwritten (so `None` clears it).
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = ?2,
                description = ?3,
                budget = ?4,
                active = COALESCE(?5, active),
                manager_id = ?6,
                start_date = COALESCE(?7, start_date),
                updated_at = {NOW}
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.budget)
            .bind(input.active)
            .bind(input.manager_id)
            .bind(input.start_date)
            .fetch_optional(pool)
            .await
    }

    /// Mark a project inactive. Idempotent: an already-inactive project is
    /// returned unchanged.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                active = 0,
                updated_at = CASE WHEN active THEN {NOW} ELSE updated_at END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
