//! Query and creation-option shapes passed through to backends.

use crate::keys::{ComKey, LocKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque query handed to a backend by `all`/`one`.
///
/// The registry never interprets the filter; its structure is a contract
/// between the caller and the backend. The default query matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Backend-defined filter document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,

    /// Result ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,

    /// Maximum number of rows to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Number of rows to skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl ItemQuery {
    /// A query matching everything.
    #[must_use]
    pub fn everything() -> Self {
        Self::default()
    }

    /// Sets the backend-defined filter document.
    #[must_use]
    pub fn with_filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Caps the number of rows returned.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the first `offset` rows.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Ordering directive for query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// Backend-defined field path.
    pub field: String,
    /// Descending when true, ascending otherwise.
    #[serde(default)]
    pub descending: bool,
}

impl OrderBy {
    /// Ascending order on `field`.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    /// Descending order on `field`.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }
}

/// Options accompanying `create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOptions {
    /// Pre-assigned key for the new item. `None` lets the backend mint one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ComKey>,

    /// Location path the item is created under. Empty for top-level items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<LocKey>,
}

impl CreateOptions {
    /// Pins the new item's key instead of letting the backend mint one.
    #[must_use]
    pub fn with_key(mut self, key: ComKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Targets creation at a location path.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<LocKey>) -> Self {
        self.locations = locations;
        self
    }
}
