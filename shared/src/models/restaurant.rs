//! Restaurant wire models

use serde::{Deserialize, Serialize};

use super::{EmployeeDto, MenuDto, MenuUpsert};

/// Restaurant read shape, relationship-enriched: the owned menu and the
/// full employee list ride along.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub capacity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuDto>,
    #[serde(default)]
    pub employees: Vec<EmployeeDto>,
}

/// Restaurant write shape (create and whole-record edit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestaurantUpsert {
    pub name: String,
    pub location: String,
    pub capacity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuUpsert>,
    /// Ids of employees to associate; each must already exist.
    #[serde(default)]
    pub employee_ids: Vec<i64>,
}
