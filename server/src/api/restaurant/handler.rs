//! Restaurant API Handlers

use axum::extract::{Extension, State};

use crate::api::convert::{read, write};
use crate::api::extract::{Json, Path};
use crate::auth::Principal;
use crate::core::ServerState;
use crate::services::RestaurantService;
use crate::utils::AppResult;
use shared::models::{RestaurantDto, RestaurantUpsert};

/// Get restaurant by id (menu and employee list included)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<Json<RestaurantDto>> {
    let service = RestaurantService::new(state.pool.clone());
    let restaurant = service.get(restaurant_id).await?;
    Ok(Json(read::restaurant_to_dto(&restaurant)))
}

/// List all restaurants
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<RestaurantDto>>> {
    let service = RestaurantService::new(state.pool.clone());
    let restaurants = service.list().await?;
    Ok(Json(read::restaurant_list_to_dtos(&restaurants)))
}

/// Create a new restaurant with its menu and employee associations
pub async fn create(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Json(payload): Json<RestaurantUpsert>,
) -> AppResult<Json<RestaurantDto>> {
    tracing::info!(principal = %principal.name, restaurant = %payload.name, "Creating restaurant");

    let service = RestaurantService::new(state.pool.clone());
    let created = service.create(write::restaurant_to_data(payload)).await?;
    Ok(Json(read::restaurant_to_dto(&created)))
}

/// Edit a restaurant by id (whole-record; menu attributes merge into the
/// owned row, the association set is synchronized)
pub async fn edit(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Path(restaurant_id): Path<i64>,
    Json(payload): Json<RestaurantUpsert>,
) -> AppResult<Json<RestaurantDto>> {
    tracing::info!(principal = %principal.name, restaurant_id, "Editing restaurant");

    let service = RestaurantService::new(state.pool.clone());
    let updated = service
        .edit(restaurant_id, write::restaurant_to_data(payload))
        .await?;
    Ok(Json(read::restaurant_to_dto(&updated)))
}

/// Delete a restaurant by id; cascades to its menu, never to employees.
/// Responds with the pre-deletion snapshot
pub async fn delete(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<Json<RestaurantDto>> {
    tracing::info!(principal = %principal.name, restaurant_id, "Deleting restaurant");

    let service = RestaurantService::new(state.pool.clone());
    let removed = service.delete(restaurant_id).await?;
    Ok(Json(read::restaurant_to_dto(&removed)))
}

/// Link an existing employee to a restaurant
pub async fn add_employee(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Path((restaurant_id, employee_id)): Path<(i64, i64)>,
) -> AppResult<Json<RestaurantDto>> {
    tracing::info!(principal = %principal.name, restaurant_id, employee_id, "Linking employee");

    let service = RestaurantService::new(state.pool.clone());
    let updated = service.add_employee(restaurant_id, employee_id).await?;
    Ok(Json(read::restaurant_to_dto(&updated)))
}

/// Unlink an employee from a restaurant
pub async fn remove_employee(
    State(state): State<ServerState>,
    Extension(principal): Extension<Principal>,
    Path((restaurant_id, employee_id)): Path<(i64, i64)>,
) -> AppResult<Json<RestaurantDto>> {
    tracing::info!(principal = %principal.name, restaurant_id, employee_id, "Unlinking employee");

    let service = RestaurantService::new(state.pool.clone());
    let updated = service.remove_employee(restaurant_id, employee_id).await?;
    Ok(Json(read::restaurant_to_dto(&updated)))
}
