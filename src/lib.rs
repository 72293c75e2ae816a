//! In-memory contact directory served over HTTP.
//!
//! The core ([`directory`]) validates and normalizes contact data and backs
//! the five operations (register, lookup, list, delete, count). The [`http`]
//! module is thin plumbing over it: an Axum router mapping the operations to
//! routes and [`DirectoryError`] to status codes.

pub mod config;
pub mod directory;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use directory::{Contact, Directory, DirectoryError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
