//! Restaurant Model

use super::{Employee, Menu};

/// Restaurant aggregate as loaded: the owned menu and the full employee
/// list are fetched eagerly with the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub menu: Option<Menu>,
    pub employees: Vec<Employee>,
}

/// Attribute set for creating or replacing a restaurant record. The id is
/// assigned by the database (create) or taken from the addressed row (edit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantData {
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub menu: Option<MenuData>,
    /// Employees to associate; each must already exist.
    pub employee_ids: Vec<i64>,
}

/// Menu attributes carried by a restaurant write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuData {
    pub language: String,
}
