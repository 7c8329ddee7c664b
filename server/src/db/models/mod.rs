//! Persisted entities
//!
//! Row and aggregate types for the three tables plus the
//! `restaurant_employee` junction. All ids are `i64`, assigned by SQLite on
//! insert (`INTEGER PRIMARY KEY AUTOINCREMENT`).

pub mod employee;
pub mod menu;
pub mod restaurant;

// Re-exports
pub use employee::*;
pub use menu::*;
pub use restaurant::*;
