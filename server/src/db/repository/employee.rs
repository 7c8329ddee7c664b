//! Employee Repository

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::Employee;

/// All employees, in stable id order.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>("SELECT id, name FROM employee ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

/// Employee by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>("SELECT id, name FROM employee WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(employee)
}

/// Insert a new employee. Any id on `data` is ignored; the database assigns
/// the real one.
pub async fn insert(pool: &SqlitePool, data: &Employee) -> RepoResult<Employee> {
    let employee =
        sqlx::query_as::<_, Employee>("INSERT INTO employee (name) VALUES (?) RETURNING id, name")
            .bind(&data.name)
            .fetch_one(pool)
            .await?;
    Ok(employee)
}

/// Overwrite the mutable attributes of the addressed employee.
pub async fn update(pool: &SqlitePool, id: i64, data: &Employee) -> RepoResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        "UPDATE employee SET name = ? WHERE id = ? RETURNING id, name",
    )
    .bind(&data.name)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    employee.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Delete an employee, removing its association rows first.
///
/// One transaction; returns the row as it existed before deletion so the
/// caller can render it.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, Employee>("SELECT id, name FROM employee WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;

    sqlx::query("DELETE FROM restaurant_employee WHERE employee_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(existing)
}
