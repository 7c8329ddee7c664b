//! Menu Repository
//!
//! Menus are exclusively owned by a restaurant, so the mutating helpers are
//! crate-internal and take the owner's open transaction. Reads are public.

use sqlx::{Sqlite, SqlitePool, Transaction};

use super::RepoResult;
use crate::db::models::Menu;

/// Menu by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Menu>> {
    let menu = sqlx::query_as::<_, Menu>("SELECT id, language FROM menu WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(menu)
}

/// Insert a menu row inside the owning restaurant's transaction.
pub(crate) async fn insert(
    tx: &mut Transaction<'_, Sqlite>,
    language: &str,
) -> RepoResult<Menu> {
    let menu = sqlx::query_as::<_, Menu>(
        "INSERT INTO menu (language) VALUES (?) RETURNING id, language",
    )
    .bind(language)
    .fetch_one(&mut **tx)
    .await?;
    Ok(menu)
}

/// Merge attribute changes into an existing menu row.
pub(crate) async fn update_language(
    tx: &mut Transaction<'_, Sqlite>,
    id: i64,
    language: &str,
) -> RepoResult<()> {
    sqlx::query("UPDATE menu SET language = ? WHERE id = ?")
        .bind(language)
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Delete a menu row inside the owning restaurant's transaction.
pub(crate) async fn delete(tx: &mut Transaction<'_, Sqlite>, id: i64) -> RepoResult<()> {
    sqlx::query("DELETE FROM menu WHERE id = ?")
        .bind(id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
