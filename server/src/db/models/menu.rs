//! Menu Model

/// Menu row as persisted. Exclusively owned by at most one restaurant;
/// written only through the owner's repository path.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Menu {
    pub id: i64,
    pub language: String,
}
