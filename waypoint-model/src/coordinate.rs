//! Coordinate identity: an ordered type hierarchy plus scope labels.

use crate::error::CoordinateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Maximum hierarchy depth: the primary type plus five location types.
pub const MAX_HIERARCHY_DEPTH: usize = 6;

/// Ordered sequence of 1–6 type names.
///
/// The first element is the primary type; subsequent elements name ancestor
/// location types from nearest to furthest. The sequence is validated once
/// at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TypeHierarchy(Vec<String>);

impl TypeHierarchy {
    /// Builds a hierarchy from 1–6 type names.
    pub fn try_new<I, S>(parts: I) -> Result<Self, CoordinateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        if parts.is_empty() {
            return Err(CoordinateError::EmptyHierarchy);
        }
        if parts.len() > MAX_HIERARCHY_DEPTH {
            return Err(CoordinateError::TooDeep(parts.len()));
        }
        Ok(Self(parts))
    }

    /// Normalizes a single type name into a one-element hierarchy.
    #[must_use]
    pub fn primary(kt: impl Into<String>) -> Self {
        Self(vec![kt.into()])
    }

    /// The type names, primary type first.
    #[must_use]
    pub fn parts(&self) -> &[String] {
        &self.0
    }

    /// The primary type name.
    #[must_use]
    pub fn primary_type(&self) -> &str {
        &self.0[0]
    }

    /// Number of levels, including the primary type.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Exact-sequence equality against a requested hierarchy: same length,
    /// same names, same order.
    #[must_use]
    pub fn matches(&self, kta: &[&str]) -> bool {
        self.0.len() == kta.len() && self.0.iter().zip(kta).all(|(have, want)| have == want)
    }
}

impl TryFrom<Vec<String>> for TypeHierarchy {
    type Error = CoordinateError;

    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        Self::try_new(parts)
    }
}

impl From<TypeHierarchy> for Vec<String> {
    fn from(kta: TypeHierarchy) -> Self {
        kta.0
    }
}

impl fmt::Display for TypeHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Immutable identity for a registered instance: a type hierarchy plus an
/// unordered set of scope labels.
///
/// Scope order and duplicates are preserved for display but irrelevant to
/// matching. An empty scope set means the instance is available under any
/// scope request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    kta: TypeHierarchy,
    scopes: Vec<String>,
}

impl Coordinate {
    /// Creates a coordinate from a validated hierarchy and scope labels.
    pub fn new<I, S>(kta: TypeHierarchy, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kta,
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }

    /// Convenience for a single-type, unscoped coordinate.
    #[must_use]
    pub fn primary(kt: impl Into<String>) -> Self {
        Self::new(TypeHierarchy::primary(kt), Vec::<String>::new())
    }

    /// Builds a coordinate from string slices, validating the hierarchy.
    pub fn try_new(kta: &[&str], scopes: &[&str]) -> Result<Self, CoordinateError> {
        Ok(Self::new(
            TypeHierarchy::try_new(kta.iter().copied())?,
            scopes.iter().copied(),
        ))
    }

    /// The type hierarchy.
    #[must_use]
    pub fn kta(&self) -> &TypeHierarchy {
        &self.kta
    }

    /// The scope labels, in registration order.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Exact-sequence equality of the hierarchy against a request.
    #[must_use]
    pub fn matches_kta(&self, kta: &[&str]) -> bool {
        self.kta.matches(kta)
    }

    /// True when every requested scope is present on this coordinate.
    ///
    /// An empty request is covered by any coordinate, including an
    /// unscoped one.
    #[must_use]
    pub fn scopes_superset_of(&self, requested: &[&str]) -> bool {
        requested
            .iter()
            .all(|want| self.scopes.iter().any(|have| have == want))
    }

    /// Order- and duplicate-insensitive scope set equality.
    #[must_use]
    pub fn same_scope_set(&self, other: &Coordinate) -> bool {
        let ours: BTreeSet<&str> = self.scopes.iter().map(String::as_str).collect();
        let theirs: BTreeSet<&str> = other.scopes.iter().map(String::as_str).collect();
        ours == theirs
    }
}

impl fmt::Display for Coordinate {
    /// Renders `"t1, t2 - s1, s2"`. An empty scope set leaves a trailing
    /// empty string after the separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kta, self.scopes.join(", "))
    }
}
