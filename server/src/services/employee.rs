//! Employee Service

use sqlx::SqlitePool;

use crate::db::models::Employee;
use crate::db::repository::employee as employee_repo;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Business operations on employees.
#[derive(Clone)]
pub struct EmployeeService {
    pool: SqlitePool,
}

impl EmployeeService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Employee by id, or `NotFound`.
    pub async fn get(&self, id: i64) -> AppResult<Employee> {
        employee_repo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))
    }

    /// Persist a new employee; any id on `data` is ignored.
    pub async fn create(&self, data: Employee) -> AppResult<Employee> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        Ok(employee_repo::insert(&self.pool, &data).await?)
    }

    /// Whole-record replace of the addressed employee's mutable attributes.
    /// The id comes from the path; an id on `data` is disregarded.
    pub async fn edit(&self, id: i64, data: Employee) -> AppResult<Employee> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        Ok(employee_repo::update(&self.pool, id, &data).await?)
    }

    /// Delete the employee and its association rows; returns the record as
    /// it existed immediately before deletion.
    pub async fn delete(&self, id: i64) -> AppResult<Employee> {
        Ok(employee_repo::delete(&self.pool, id).await?)
    }

    /// All employees; may be empty.
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(employee_repo::find_all(&self.pool).await?)
    }
}
