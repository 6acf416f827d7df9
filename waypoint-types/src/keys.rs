//! Item addressing keys.
//!
//! A [`PriKey`] identifies an item within its own type. A [`ComKey`] adds
//! the ordered chain of [`LocKey`]s that places the item under its ancestor
//! location types, nearest location first. Identifiers are opaque strings;
//! [`PriKey::generate`] mints time-ordered UUID v7 identifiers for callers
//! that do not bring their own.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Primary key for an item: a type tag plus a primary identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriKey {
    /// Type tag (e.g. `"book"`).
    pub kt: String,
    /// Primary identifier, opaque to the registry.
    pub pk: String,
}

impl PriKey {
    /// Creates a key from an existing identifier.
    pub fn new(kt: impl Into<String>, pk: impl Into<String>) -> Self {
        Self {
            kt: kt.into(),
            pk: pk.into(),
        }
    }

    /// Mints a key with a fresh time-ordered UUID v7 identifier.
    #[must_use]
    pub fn generate(kt: impl Into<String>) -> Self {
        Self {
            kt: kt.into(),
            pk: Uuid::now_v7().to_string(),
        }
    }
}

impl fmt::Display for PriKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kt, self.pk)
    }
}

impl FromStr for PriKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kt, pk) = s
            .split_once(':')
            .ok_or_else(|| Error::MalformedKey(s.to_string()))?;
        if kt.is_empty() || pk.is_empty() {
            return Err(Error::MalformedKey(s.to_string()));
        }
        Ok(Self::new(kt, pk))
    }
}

/// Key for one location level: a location type tag plus its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocKey {
    /// Location type tag (e.g. `"shelf"`).
    pub kt: String,
    /// Location identifier, opaque to the registry.
    pub lk: String,
}

impl LocKey {
    /// Creates a location key from an existing identifier.
    pub fn new(kt: impl Into<String>, lk: impl Into<String>) -> Self {
        Self {
            kt: kt.into(),
            lk: lk.into(),
        }
    }
}

impl fmt::Display for LocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kt, self.lk)
    }
}

impl FromStr for LocKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kt, lk) = s
            .split_once(':')
            .ok_or_else(|| Error::MalformedKey(s.to_string()))?;
        if kt.is_empty() || lk.is_empty() {
            return Err(Error::MalformedKey(s.to_string()));
        }
        Ok(Self::new(kt, lk))
    }
}

/// Composite key: a primary key plus the ordered location chain that places
/// the item in its ancestor hierarchy, nearest location first.
///
/// Top-level items carry an empty chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComKey {
    /// The item's own key.
    pub pri: PriKey,
    /// Ancestor location keys, nearest first. Empty for top-level items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loc: Vec<LocKey>,
}

impl ComKey {
    /// Creates a composite key with an explicit location chain.
    pub fn new(pri: PriKey, loc: Vec<LocKey>) -> Self {
        Self { pri, loc }
    }

    /// Creates a composite key for a top-level item (no locations).
    pub fn primary(pri: PriKey) -> Self {
        Self {
            pri,
            loc: Vec::new(),
        }
    }

    /// Appends the next (further) ancestor location to the chain.
    #[must_use]
    pub fn in_location(mut self, loc: LocKey) -> Self {
        self.loc.push(loc);
        self
    }

    /// The item's type tag.
    #[must_use]
    pub fn kt(&self) -> &str {
        &self.pri.kt
    }
}

impl From<PriKey> for ComKey {
    fn from(pri: PriKey) -> Self {
        Self::primary(pri)
    }
}

impl fmt::Display for ComKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pri)?;
        for (i, loc) in self.loc.iter().enumerate() {
            if i == 0 {
                write!(f, " @ {loc}")?;
            } else {
                write!(f, ", {loc}")?;
            }
        }
        Ok(())
    }
}
