//! Restaurant Repository
//!
//! The restaurant aggregate owns its menu (one-to-one, exclusive — UNIQUE
//! on `restaurant.menu_id`) and links employees through the
//! `restaurant_employee` junction. Every cascade is a sequence of explicit
//! statements inside a single transaction.

use std::collections::HashSet;

use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{RepoError, RepoResult, menu};
use crate::db::models::{Employee, Restaurant, RestaurantData};

#[derive(Debug, sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    location: String,
    capacity: i64,
    menu_id: Option<i64>,
}

const SELECT_ROW: &str = "SELECT id, name, location, capacity, menu_id FROM restaurant WHERE id = ?";

/// Restaurant by id, with its menu and employee list loaded in full.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Restaurant>> {
    let row = sqlx::query_as::<_, RestaurantRow>(SELECT_ROW)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(row) => Ok(Some(load_aggregate(pool, row).await?)),
        None => Ok(None),
    }
}

/// All restaurants, in stable id order, each loaded in full.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Restaurant>> {
    let rows = sqlx::query_as::<_, RestaurantRow>(
        "SELECT id, name, location, capacity, menu_id FROM restaurant ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut restaurants = Vec::with_capacity(rows.len());
    for row in rows {
        restaurants.push(load_aggregate(pool, row).await?);
    }
    Ok(restaurants)
}

/// Employees linked to a restaurant, in stable id order.
pub async fn find_employees(pool: &SqlitePool, restaurant_id: i64) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT e.id, e.name FROM employee e \
         JOIN restaurant_employee re ON re.employee_id = e.id \
         WHERE re.restaurant_id = ? ORDER BY e.id",
    )
    .bind(restaurant_id)
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

async fn load_aggregate(pool: &SqlitePool, row: RestaurantRow) -> RepoResult<Restaurant> {
    let menu = match row.menu_id {
        Some(menu_id) => menu::find_by_id(pool, menu_id).await?,
        None => None,
    };
    let employees = find_employees(pool, row.id).await?;
    Ok(Restaurant {
        id: row.id,
        name: row.name,
        location: row.location,
        capacity: row.capacity,
        menu,
        employees,
    })
}

/// Insert a restaurant: menu first (if attached), then the restaurant row
/// referencing it, then one association row per linked employee.
pub async fn insert(pool: &SqlitePool, data: &RestaurantData) -> RepoResult<Restaurant> {
    let mut tx = pool.begin().await?;

    let menu_id = match &data.menu {
        Some(m) => Some(menu::insert(&mut tx, &m.language).await?.id),
        None => None,
    };

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO restaurant (name, location, capacity, menu_id) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.name)
    .bind(&data.location)
    .bind(data.capacity)
    .bind(menu_id)
    .fetch_one(&mut *tx)
    .await?;

    for &employee_id in &data.employee_ids {
        link_employee(&mut tx, id, employee_id).await?;
    }

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load created restaurant".into()))
}

/// Replace the mutable attributes of a restaurant.
///
/// Menu attributes merge into the owned menu row by its id (attaching a menu
/// to a restaurant that has none inserts one; an absent `menu` leaves the
/// owned row untouched). The association set is synchronized by inserting
/// added pairs and deleting removed ones.
pub async fn update(pool: &SqlitePool, id: i64, data: &RestaurantData) -> RepoResult<Restaurant> {
    let mut tx = pool.begin().await?;

    let row = sqlx::query_as::<_, RestaurantRow>(SELECT_ROW)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))?;

    let menu_id = match (&data.menu, row.menu_id) {
        (Some(m), Some(menu_id)) => {
            menu::update_language(&mut tx, menu_id, &m.language).await?;
            Some(menu_id)
        }
        (Some(m), None) => Some(menu::insert(&mut tx, &m.language).await?.id),
        (None, existing) => existing,
    };

    sqlx::query("UPDATE restaurant SET name = ?, location = ?, capacity = ?, menu_id = ? WHERE id = ?")
        .bind(&data.name)
        .bind(&data.location)
        .bind(data.capacity)
        .bind(menu_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sync_employees(&mut tx, id, &data.employee_ids).await?;

    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to load updated restaurant".into()))
}

/// Delete a restaurant: association rows, the restaurant row, then its menu.
/// Employees survive. Returns the aggregate as it existed before deletion.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<Restaurant> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Restaurant {id} not found")))?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM restaurant_employee WHERE restaurant_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM restaurant WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if let Some(m) = &existing.menu {
        menu::delete(&mut tx, m.id).await?;
    }

    tx.commit().await?;
    Ok(existing)
}

/// Add one `(restaurant_id, employee_id)` association pair. An existing
/// pair surfaces as a `Conflict`.
pub async fn add_employee(
    pool: &SqlitePool,
    restaurant_id: i64,
    employee_id: i64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO restaurant_employee (restaurant_id, employee_id) VALUES (?, ?)")
        .bind(restaurant_id)
        .bind(employee_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove one association pair; `NotFound` if the pair does not exist.
pub async fn remove_employee(
    pool: &SqlitePool,
    restaurant_id: i64,
    employee_id: i64,
) -> RepoResult<()> {
    let result =
        sqlx::query("DELETE FROM restaurant_employee WHERE restaurant_id = ? AND employee_id = ?")
            .bind(restaurant_id)
            .bind(employee_id)
            .execute(pool)
            .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Employee {employee_id} is not linked to restaurant {restaurant_id}"
        )));
    }
    Ok(())
}

async fn link_employee(
    tx: &mut Transaction<'_, Sqlite>,
    restaurant_id: i64,
    employee_id: i64,
) -> RepoResult<()> {
    sqlx::query("INSERT INTO restaurant_employee (restaurant_id, employee_id) VALUES (?, ?)")
        .bind(restaurant_id)
        .bind(employee_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Bring the junction rows for `restaurant_id` in line with `employee_ids`:
/// pairs not listed are deleted, listed pairs not present are inserted.
async fn sync_employees(
    tx: &mut Transaction<'_, Sqlite>,
    restaurant_id: i64,
    employee_ids: &[i64],
) -> RepoResult<()> {
    let current: Vec<i64> =
        sqlx::query_scalar("SELECT employee_id FROM restaurant_employee WHERE restaurant_id = ?")
            .bind(restaurant_id)
            .fetch_all(&mut **tx)
            .await?;

    let desired: HashSet<i64> = employee_ids.iter().copied().collect();
    let current_set: HashSet<i64> = current.iter().copied().collect();

    for employee_id in current {
        if !desired.contains(&employee_id) {
            sqlx::query(
                "DELETE FROM restaurant_employee WHERE restaurant_id = ? AND employee_id = ?",
            )
            .bind(restaurant_id)
            .bind(employee_id)
            .execute(&mut **tx)
            .await?;
        }
    }

    for employee_id in desired {
        if !current_set.contains(&employee_id) {
            link_employee(tx, restaurant_id, employee_id).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::MenuData;
    use crate::db::repository::employee;
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    /// In-memory SQLite pool with the full schema, foreign keys on and two
    /// seeded employees.
    async fn test_pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .pragma("foreign_keys", "ON");
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        crate::db::MIGRATOR.run(&pool).await.unwrap();

        for name in ["Ada", "Grace"] {
            sqlx::query("INSERT INTO employee (name) VALUES (?)")
                .bind(name)
                .execute(&pool)
                .await
                .unwrap();
        }
        pool
    }

    fn pep(menu: Option<&str>, employee_ids: Vec<i64>) -> RestaurantData {
        RestaurantData {
            name: "Pep".into(),
            location: "Porto".into(),
            capacity: 20,
            menu: menu.map(|language| MenuData {
                language: language.into(),
            }),
            employee_ids,
        }
    }

    #[tokio::test]
    async fn insert_loads_full_aggregate() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(Some("pt"), vec![1, 2])).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Pep");
        assert_eq!(created.menu.as_ref().unwrap().language, "pt");
        assert_eq!(
            created.employees.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn insert_without_menu_or_employees() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(None, vec![])).await.unwrap();
        assert!(created.menu.is_none());
        assert!(created.employees.is_empty());
    }

    #[tokio::test]
    async fn insert_with_unknown_employee_rolls_back() {
        let pool = test_pool().await;
        let err = insert(&pool, &pep(Some("pt"), vec![1, 99])).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // Nothing from the aborted unit of work may remain
        let restaurants: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant")
            .fetch_one(&pool)
            .await
            .unwrap();
        let menus: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!((restaurants, menus), (0, 0));
    }

    #[tokio::test]
    async fn update_merges_menu_into_existing_row() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(Some("pt"), vec![])).await.unwrap();
        let menu_id = created.menu.as_ref().unwrap().id;

        let mut data = pep(Some("en"), vec![]);
        data.capacity = 40;
        let updated = update(&pool, created.id, &data).await.unwrap();

        // Same menu row, new attributes
        assert_eq!(updated.menu.as_ref().unwrap().id, menu_id);
        assert_eq!(updated.menu.as_ref().unwrap().language, "en");
        assert_eq!(updated.capacity, 40);
    }

    #[tokio::test]
    async fn update_attaches_menu_when_missing() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(None, vec![])).await.unwrap();

        let updated = update(&pool, created.id, &pep(Some("pt"), vec![])).await.unwrap();
        assert_eq!(updated.menu.as_ref().unwrap().language, "pt");
    }

    #[tokio::test]
    async fn update_without_menu_keeps_owned_row() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(Some("pt"), vec![])).await.unwrap();

        let updated = update(&pool, created.id, &pep(None, vec![])).await.unwrap();
        assert_eq!(updated.menu, created.menu);
    }

    #[tokio::test]
    async fn update_syncs_association_pairs() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(None, vec![1])).await.unwrap();

        // 1 is removed, 2 is added
        let updated = update(&pool, created.id, &pep(None, vec![2])).await.unwrap();
        assert_eq!(
            updated.employees.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![2]
        );

        let pairs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_employee")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(pairs, 1);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let err = update(&pool, 42, &pep(None, vec![])).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_cascades_to_menu_but_not_employees() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(Some("pt"), vec![1, 2])).await.unwrap();
        let menu_id = created.menu.as_ref().unwrap().id;

        let snapshot = delete(&pool, created.id).await.unwrap();
        assert_eq!(snapshot, created);

        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
        assert!(menu::find_by_id(&pool, menu_id).await.unwrap().is_none());

        // Both employees survive, both association rows are gone
        assert_eq!(employee::find_all(&pool).await.unwrap().len(), 2);
        let pairs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_employee")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(pairs, 0);
    }

    #[tokio::test]
    async fn employee_reachable_through_another_restaurant_survives() {
        let pool = test_pool().await;
        let first = insert(&pool, &pep(None, vec![1, 2])).await.unwrap();
        let second = insert(&pool, &pep(None, vec![1])).await.unwrap();

        delete(&pool, first.id).await.unwrap();

        let remaining = find_by_id(&pool, second.id).await.unwrap().unwrap();
        assert_eq!(
            remaining.employees.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[tokio::test]
    async fn duplicate_pair_is_conflict() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(None, vec![1])).await.unwrap();

        let err = add_employee(&pool, created.id, 1).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
    }

    #[tokio::test]
    async fn remove_absent_pair_is_not_found() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(None, vec![])).await.unwrap();

        let err = remove_employee(&pool, created.id, 1).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn menu_cannot_be_claimed_by_two_restaurants() {
        let pool = test_pool().await;
        let created = insert(&pool, &pep(Some("pt"), vec![])).await.unwrap();
        let menu_id = created.menu.as_ref().unwrap().id;

        let err = sqlx::query(
            "INSERT INTO restaurant (name, location, capacity, menu_id) VALUES ('Copy', 'Porto', 5, ?)",
        )
        .bind(menu_id)
        .execute(&pool)
        .await
        .map_err(RepoError::from)
        .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
    }
}
