//! Contact directory core.
//!
//! # Data Flow
//! ```text
//! raw input (name, phone)
//!     → normalize.rs (validate, trim, capitalize, strip separators)
//!     → store.rs (BTreeMap keyed by display name)
//!     → Contact returned to caller
//! ```
//!
//! # Design Decisions
//! - BTreeMap so listing is lexicographic without an extra sort
//! - register/find key on the case-normalized name; delete keys on the
//!   exact-case, whitespace-collapsed name (inherited behavior, kept as-is)
//! - No interior locking; the hosting layer serializes access

pub mod error;
pub mod normalize;
pub mod store;

pub use error::DirectoryError;
pub use store::{Contact, Directory};
