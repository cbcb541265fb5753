//! Repository for the `employees` table.

use sqlx::SqlitePool;
use staffing_core::types::DbId;

use super::NOW;
use crate::models::employee::{CreateEmployee, Employee, EmployeeFilter, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, specialty, salary, active, created_at, updated_at";

/// Same columns qualified with the `e` alias, for joins.
const E_COLUMNS: &str =
    "e.id, e.name, e.specialty, e.salary, e.active, e.created_at, e.updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new, active employee, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees (name, specialty, salary)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.name)
            .bind(&input.specialty)
            .bind(input.salary)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by ID, active or not.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = ?1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an employee by exact name, active or not.
    pub async fn find_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE name = ?1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Check whether `name` is used by any employee other than `exclude_id`.
    pub async fn name_taken(
        pool: &SqlitePool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM employees WHERE name = ?1 AND (?2 IS NULL OR id <> ?2)",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0 > 0)
    }

    /// List employees matching `filter`, in insertion order.
    pub async fn list(
        pool: &SqlitePool,
        filter: &EmployeeFilter,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees
             WHERE active = ?1 AND (?2 IS NULL OR specialty = ?2)
             ORDER BY id"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(filter.active)
            .bind(&filter.specialty)
            .fetch_all(pool)
            .await
    }

    /// List the employees assigned to a project, in employee insertion order.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {E_COLUMNS} FROM employees e
             JOIN project_employees pe ON pe.employee_id = e.id
             WHERE pe.project_id = ?1
             ORDER BY e.id"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace an employee's editable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                name = ?2,
                specialty = ?3,
                salary = ?4,
                updated_at = {NOW}
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.specialty)
            .bind(input.salary)
            .fetch_optional(pool)
            .await
    }

    /// Mark an employee inactive. Idempotent: an already-inactive employee
    /// is returned unchanged.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                active = 0,
                updated_at = CASE WHEN active THEN {NOW} ELSE updated_at END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
