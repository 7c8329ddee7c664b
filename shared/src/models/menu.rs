//! Menu wire model

use serde::{Deserialize, Serialize};

/// Menu as exchanged over HTTP, nested inside its owning restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub language: String,
}

/// Menu attributes accepted on restaurant create/edit. A menu has no
/// standalone write endpoint; it rides along with its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuUpsert {
    pub language: String,
}
