//! Data transfer models
//!
//! One module per resource. Write payloads are strict (`deny_unknown_fields`)
//! so that a mistyped field fails the request instead of silently dropping.

pub mod employee;
pub mod menu;
pub mod restaurant;

// Re-exports
pub use employee::*;
pub use menu::*;
pub use restaurant::*;
