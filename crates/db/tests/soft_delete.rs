//! Soft-delete behaviour for employees and projects.
//!
//! - Soft-deleted rows stay readable by id with `active = false`
//! - They drop out of the default (active) listing
//! - Soft delete is idempotent and reports missing ids as `None`

use sqlx::SqlitePool;
use staffing_db::models::employee::{CreateEmployee, EmployeeFilter};
use staffing_db::models::project::{CreateProject, ProjectFilter};
use staffing_db::repositories::{EmployeeRepo, ProjectRepo};

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_soft_delete(pool: SqlitePool) {
    let employee = EmployeeRepo::create(
        &pool,
        &CreateEmployee {
            name: "Leaving".into(),
            specialty: "QA".into(),
            salary: 10.0,
        },
    )
    .await
    .unwrap();

    let first = EmployeeRepo::soft_delete(&pool, employee.id).await.unwrap().unwrap();
    assert!(!first.active);
    let second = EmployeeRepo::soft_delete(&pool, employee.id).await.unwrap().unwrap();
    assert!(!second.active);
    assert_eq!(second.updated_at, first.updated_at);

    let found = EmployeeRepo::find_by_id(&pool, employee.id).await.unwrap().unwrap();
    assert!(!found.active);

    assert!(EmployeeRepo::list(&pool, &EmployeeFilter::default())
        .await
        .unwrap()
        .is_empty());
    let inactive = EmployeeRepo::list(
        &pool,
        &EmployeeFilter {
            specialty: None,
            active: false,
        },
    )
    .await
    .unwrap();
    assert_eq!(inactive.len(), 1);

    assert!(EmployeeRepo::soft_delete(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_soft_delete(pool: SqlitePool) {
    let project = ProjectRepo::create(
        &pool,
        &CreateProject {
            name: "Ending".into(),
            description: "soft delete test".into(),
            budget: 10.0,
            active: true,
            manager_id: None,
            start_date: None,
        },
    )
    .await
    .unwrap();

    for _ in 0..2 {
        let deleted = ProjectRepo::soft_delete(&pool, project.id).await.unwrap().unwrap();
        assert!(!deleted.active);
    }

    assert!(ProjectRepo::list(&pool, &ProjectFilter::default())
        .await
        .unwrap()
        .is_empty());
    assert!(ProjectRepo::soft_delete(&pool, 9999).await.unwrap().is_none());
}
