//! Employee Model

/// Employee row as persisted.
///
/// An id of 0 marks a record that has not been inserted yet; the database
/// assigns the real id and it is never reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}
