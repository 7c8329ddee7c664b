//! Employee API Handlers

use axum::extract::{Extension, State};

use crate::api::convert::{read, write};
use crate::api::extract::{Json, Path};
use crate::auth::Principal;
use crate::core::ServerState;
use crate::services::EmployeeService;
use crate::utils::AppResult;
use shared::models::EmployeeDto;

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<EmployeeDto>> {
    let service = EmployeeService::new(state.pool.clone());
    let employee = service.get(employee_id).await?;
    Ok(Json(read::employee_to_dto(&employee)))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<EmployeeDto>,
) -> AppResult<Json<EmployeeDto>> {
    tracing::info!(principal = %principal.name, "Creating employee");

    let service = EmployeeService::new(state.pool.clone());
    let created = service.create(write::employee_to_entity(payload)).await?;
    Ok(Json(write::employee_to_dto(created)))
}

/// Edit an employee by id (whole-record; the path id governs)
pub async fn edit(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<EmployeeDto>,
) -> AppResult<Json<EmployeeDto>> {
    tracing::info!(principal = %principal.name, employee_id, "Editing employee");

    let service = EmployeeService::new(state.pool.clone());
    let updated = service
        .edit(employee_id, write::employee_to_entity(payload))
        .await?;
    Ok(Json(write::employee_to_dto(updated)))
}

/// Delete an employee by id; responds with the pre-deletion snapshot so the
/// caller can confirm what was removed
pub async fn delete(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<EmployeeDto>> {
    tracing::info!(principal = %principal.name, employee_id, "Deleting employee");

    let service = EmployeeService::new(state.pool.clone());
    let removed = service.delete(employee_id).await?;
    Ok(Json(write::employee_to_dto(removed)))
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeDto>>> {
    let service = EmployeeService::new(state.pool.clone());
    let employees = service.list().await?;
    Ok(Json(read::employee_list_to_dtos(&employees)))
}
