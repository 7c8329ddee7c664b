//! Employee wire model

use serde::{Deserialize, Serialize};

/// Employee as exchanged over HTTP.
///
/// The same shape serves every employee endpoint: `id` is echoed on
/// responses and never trusted on input — create assigns a fresh id and
/// edit/delete take theirs from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
}
