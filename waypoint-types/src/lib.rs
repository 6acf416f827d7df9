//! Key and query shapes for Waypoint.
//!
//! This crate defines the value types the registry and operations layers
//! pass through untouched:
//! - [`PriKey`], [`LocKey`], [`ComKey`] — item addressing (a primary key
//!   plus the ordered chain of location keys placing an item in its
//!   ancestor hierarchy)
//! - [`ItemQuery`] — the opaque query handed to backends by `all`/`one`
//! - [`CreateOptions`] — key pre-assignment and location targeting for
//!   `create`
//!
//! Everything here is a plain serde value type. The registry never looks
//! inside a query filter or a key identifier; backends own those semantics.

mod keys;
mod query;

pub use keys::{ComKey, LocKey, PriKey};
pub use query::{CreateOptions, ItemQuery, OrderBy};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in key handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed key '{0}': expected `type:id`")]
    MalformedKey(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
