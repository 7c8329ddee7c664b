//! Business services
//!
//! Thin layer between the HTTP handlers and the persistence gateway; owns
//! existence checks and field validation, and lifts gateway failures into
//! application error kinds.

pub mod employee;
pub mod restaurant;

pub use employee::EmployeeService;
pub use restaurant::RestaurantService;
