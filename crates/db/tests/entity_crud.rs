//! Repository-level CRUD tests against a migrated SQLite database.

use sqlx::SqlitePool;
use staffing_db::models::employee::{CreateEmployee, EmployeeFilter, UpdateEmployee};
use staffing_db::models::project::{CreateProject, ProjectFilter, UpdateProject};
use staffing_db::repositories::{AssignmentRepo, EmployeeRepo, ProjectRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_employee(name: &str, specialty: &str) -> CreateEmployee {
    CreateEmployee {
        name: name.to_string(),
        specialty: specialty.to_string(),
        salary: 1000.0,
    }
}

fn new_project(name: &str, budget: f64, manager_id: Option<i64>) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: "crud test".to_string(),
        budget,
        active: true,
        manager_id,
        start_date: None,
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_create_and_find(pool: SqlitePool) {
    let created = EmployeeRepo::create(&pool, &new_employee("Ana", "QA")).await.unwrap();
    assert!(created.active);

    let by_id = EmployeeRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "Ana");

    let by_name = EmployeeRepo::find_by_name(&pool, "Ana").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);

    assert!(EmployeeRepo::find_by_name(&pool, "ana").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_name_taken_excludes_self(pool: SqlitePool) {
    let ana = EmployeeRepo::create(&pool, &new_employee("Ana", "QA")).await.unwrap();

    assert!(EmployeeRepo::name_taken(&pool, "Ana", None).await.unwrap());
    assert!(!EmployeeRepo::name_taken(&pool, "Ana", Some(ana.id)).await.unwrap());
    assert!(!EmployeeRepo::name_taken(&pool, "Bea", None).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_unique_constraint(pool: SqlitePool) {
    EmployeeRepo::create(&pool, &new_employee("Ana", "QA")).await.unwrap();
    let err = EmployeeRepo::create(&pool, &new_employee("Ana", "Dev"))
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_salary_check_constraint(pool: SqlitePool) {
    let mut input = new_employee("Broke", "QA");
    input.salary = 0.0;
    let err = EmployeeRepo::create(&pool, &input).await.unwrap_err();
    assert!(err.as_database_error().unwrap().is_check_violation());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_list_filters(pool: SqlitePool) {
    EmployeeRepo::create(&pool, &new_employee("A", "Backend")).await.unwrap();
    EmployeeRepo::create(&pool, &new_employee("B", "Frontend")).await.unwrap();

    let all = EmployeeRepo::list(&pool, &EmployeeFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "A");

    let backend = EmployeeRepo::list(
        &pool,
        &EmployeeFilter {
            specialty: Some("Backend".into()),
            active: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(backend.len(), 1);
    assert_eq!(backend[0].name, "A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_update(pool: SqlitePool) {
    let ana = EmployeeRepo::create(&pool, &new_employee("Ana", "QA")).await.unwrap();

    let updated = EmployeeRepo::update(
        &pool,
        ana.id,
        &UpdateEmployee {
            name: "Ana María".into(),
            specialty: "Lead".into(),
            salary: 2500.0,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.id, ana.id);
    assert_eq!(updated.name, "Ana María");
    assert_eq!(updated.salary, 2500.0);
    assert!(updated.updated_at >= ana.updated_at);

    let missing = EmployeeRepo::update(
        &pool,
        9999,
        &UpdateEmployee {
            name: "X".into(),
            specialty: "X".into(),
            salary: 1.0,
        },
    )
    .await
    .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_create_defaults_start_date(pool: SqlitePool) {
    let project = ProjectRepo::create(&pool, &new_project("Apollo", 10.0, None))
        .await
        .unwrap();
    assert!(project.active);
    assert!(project.manager_id.is_none());
    assert_eq!(project.start_date, chrono::Utc::now().date_naive());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_manager_must_reference_employee(pool: SqlitePool) {
    let err = ProjectRepo::create(&pool, &new_project("Orphan", 10.0, Some(42)))
        .await
        .unwrap_err();
    assert!(err.as_database_error().unwrap().is_foreign_key_violation());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_list_budget_bounds_are_inclusive(pool: SqlitePool) {
    for (name, budget) in [("Low", 100.0), ("Mid", 200.0), ("High", 300.0)] {
        ProjectRepo::create(&pool, &new_project(name, budget, None)).await.unwrap();
    }

    let projects = ProjectRepo::list(
        &pool,
        &ProjectFilter {
            active: true,
            min_budget: Some(100.0),
            max_budget: Some(200.0),
        },
    )
    .await
    .unwrap();
    let names: Vec<_> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Low", "Mid"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_update_keeps_omitted_fields(pool: SqlitePool) {
    let manager = EmployeeRepo::create(&pool, &new_employee("Jefa", "PM")).await.unwrap();
    let mut input = new_project("Apollo", 10.0, Some(manager.id));
    input.start_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 15);
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            name: "Apollo II".into(),
            description: "second".into(),
            budget: 20.0,
            active: None,
            manager_id: None,
            start_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Apollo II");
    assert!(updated.active);
    assert!(updated.manager_id.is_none());
    assert_eq!(updated.start_date, project.start_date);
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_lifecycle(pool: SqlitePool) {
    let dev = EmployeeRepo::create(&pool, &new_employee("Dev", "Backend")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Apollo", 10.0, None))
        .await
        .unwrap();

    let link = AssignmentRepo::create(&pool, dev.id, project.id).await.unwrap();
    assert_eq!(link.employee_id, dev.id);
    assert_eq!(link.project_id, project.id);

    let employees = EmployeeRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(employees.len(), 1);
    let projects = ProjectRepo::list_by_employee(&pool, dev.id).await.unwrap();
    assert_eq!(projects.len(), 1);

    assert!(AssignmentRepo::delete(&pool, dev.id, project.id).await.unwrap());
    assert!(!AssignmentRepo::delete(&pool, dev.id, project.id).await.unwrap());
    assert!(EmployeeRepo::list_by_project(&pool, project.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_assignment_is_a_unique_violation(pool: SqlitePool) {
    let dev = EmployeeRepo::create(&pool, &new_employee("Dev", "Backend")).await.unwrap();
    let project = ProjectRepo::create(&pool, &new_project("Apollo", 10.0, None))
        .await
        .unwrap();

    AssignmentRepo::create(&pool, dev.id, project.id).await.unwrap();
    let err = AssignmentRepo::create(&pool, dev.id, project.id)
        .await
        .unwrap_err();
    assert!(err.as_database_error().unwrap().is_unique_violation());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_requires_existing_rows(pool: SqlitePool) {
    let err = AssignmentRepo::create(&pool, 1, 1).await.unwrap_err();
    assert!(err.as_database_error().unwrap().is_foreign_key_violation());
}
