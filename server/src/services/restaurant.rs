//! Restaurant Service

use sqlx::SqlitePool;

use crate::db::models::{Restaurant, RestaurantData};
use crate::db::repository::{employee as employee_repo, restaurant as restaurant_repo};
use crate::utils::validation::{
    MAX_LANGUAGE_LEN, MAX_NAME_LEN, validate_non_negative, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Business operations on the restaurant aggregate.
#[derive(Clone)]
pub struct RestaurantService {
    pool: SqlitePool,
}

impl RestaurantService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Restaurant by id, loaded in full, or `NotFound`.
    pub async fn get(&self, id: i64) -> AppResult<Restaurant> {
        restaurant_repo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))
    }

    /// All restaurants, each loaded in full.
    pub async fn list(&self) -> AppResult<Vec<Restaurant>> {
        Ok(restaurant_repo::find_all(&self.pool).await?)
    }

    /// Persist a new restaurant with its menu and associations.
    pub async fn create(&self, data: RestaurantData) -> AppResult<Restaurant> {
        self.validate(&data).await?;
        Ok(restaurant_repo::insert(&self.pool, &data).await?)
    }

    /// Whole-record replace; menu attributes merge into the owned row and
    /// the association set is synchronized.
    pub async fn edit(&self, id: i64, data: RestaurantData) -> AppResult<Restaurant> {
        self.validate(&data).await?;
        Ok(restaurant_repo::update(&self.pool, id, &data).await?)
    }

    /// Delete the restaurant, cascading to its menu but not its employees;
    /// returns the aggregate as it existed immediately before deletion.
    pub async fn delete(&self, id: i64) -> AppResult<Restaurant> {
        Ok(restaurant_repo::delete(&self.pool, id).await?)
    }

    /// Link one existing employee; `Conflict` when the pair already exists.
    pub async fn add_employee(&self, id: i64, employee_id: i64) -> AppResult<Restaurant> {
        self.get(id).await?;
        employee_repo::find_by_id(&self.pool, employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {employee_id} not found")))?;

        restaurant_repo::add_employee(&self.pool, id, employee_id).await?;
        self.get(id).await
    }

    /// Unlink one employee; `NotFound` when the pair does not exist.
    pub async fn remove_employee(&self, id: i64, employee_id: i64) -> AppResult<Restaurant> {
        self.get(id).await?;
        restaurant_repo::remove_employee(&self.pool, id, employee_id).await?;
        self.get(id).await
    }

    /// Field constraints plus the no-implicit-creation rule: every linked
    /// employee must already exist.
    async fn validate(&self, data: &RestaurantData) -> AppResult<()> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.location, "location", MAX_NAME_LEN)?;
        validate_non_negative(data.capacity, "capacity")?;
        if let Some(menu) = &data.menu {
            validate_required_text(&menu.language, "menu.language", MAX_LANGUAGE_LEN)?;
        }
        for &employee_id in &data.employee_ids {
            if employee_repo::find_by_id(&self.pool, employee_id)
                .await?
                .is_none()
            {
                return Err(AppError::validation(format!(
                    "Employee {employee_id} does not exist"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MenuData;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    async fn service() -> RestaurantService {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .pragma("foreign_keys", "ON");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        crate::db::MIGRATOR.run(&pool).await.unwrap();

        sqlx::query("INSERT INTO employee (name) VALUES ('Ada')")
            .execute(&pool)
            .await
            .unwrap();
        RestaurantService::new(pool)
    }

    fn pep(employee_ids: Vec<i64>) -> RestaurantData {
        RestaurantData {
            name: "Pep".into(),
            location: "Porto".into(),
            capacity: 20,
            menu: Some(MenuData {
                language: "pt".into(),
            }),
            employee_ids,
        }
    }

    #[tokio::test]
    async fn create_rejects_negative_capacity() {
        let service = service().await;
        let mut data = pep(vec![]);
        data.capacity = -1;
        let err = service.create(data).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_employee() {
        let service = service().await;
        let err = service.create(pep(vec![1, 42])).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn add_employee_twice_is_conflict() {
        let service = service().await;
        let created = service.create(pep(vec![])).await.unwrap();

        let updated = service.add_employee(created.id, 1).await.unwrap();
        assert_eq!(updated.employees.len(), 1);

        let err = service.add_employee(created.id, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn remove_employee_requires_existing_pair() {
        let service = service().await;
        let created = service.create(pep(vec![])).await.unwrap();

        let err = service.remove_employee(created.id, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
