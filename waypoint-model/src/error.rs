//! Error types for the model layer.

use crate::coordinate::MAX_HIERARCHY_DEPTH;
use thiserror::Error;

/// Errors raised while constructing coordinates.
///
/// These are configuration errors: fatal at construction time, never
/// retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordinateError {
    /// A type hierarchy must name at least its primary type.
    #[error("type hierarchy cannot be empty")]
    EmptyHierarchy,

    /// A hierarchy is the primary type plus at most five location types.
    #[error("type hierarchy has {0} levels; at most {max} are supported", max = MAX_HIERARCHY_DEPTH)]
    TooDeep(usize),
}
