//! Restaurant management service
//!
//! HTTP service managing restaurants, their menus and their employees for
//! internal callers holding the ADMIN or USER role.
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/       # configuration, shared state, server lifecycle
//! ├── auth/       # principal model, role provider, middleware
//! ├── api/        # HTTP routes, handlers and wire translation
//! ├── services/   # business operations
//! ├── db/         # pool bootstrap, entities, repositories
//! └── utils/      # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use auth::{Principal, Role};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
