//! Wire models shared between the restaurant server and its API clients.
//!
//! Everything here is plain serde data: the persisted entities live on the
//! server side and are translated at the API boundary.

pub mod models;
