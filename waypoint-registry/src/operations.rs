//! The raw CRUD contract implemented by storage backends.

use crate::error::OpsResult;
use async_trait::async_trait;
use waypoint_types::{ComKey, CreateOptions, ItemQuery, LocKey};

/// The CRUD contract a backend supplies.
///
/// `get` returns `Ok(None)` for a missing item — absence is a signal, not a
/// fault — and that signal is what [`upsert`] branches on. Backend failures
/// of any kind flow through the wrapping pipeline unchanged.
///
/// Backends are assumed safe for concurrent invocation; the registry layer
/// never serializes calls against one instance.
///
/// [`upsert`]: crate::WrappedOperations::upsert
#[async_trait]
pub trait Operations<V>: Send + Sync
where
    V: Send + Sync + 'static,
{
    /// Returns every item matching `query` within `locations`.
    async fn all(&self, query: &ItemQuery, locations: &[LocKey]) -> OpsResult<Vec<V>>;

    /// Returns the first item matching `query` within `locations`.
    async fn one(&self, query: &ItemQuery, locations: &[LocKey]) -> OpsResult<Option<V>> {
        Ok(self.all(query, locations).await?.into_iter().next())
    }

    /// Stores a new item.
    async fn create(&self, item: V, options: &CreateOptions) -> OpsResult<V>;

    /// Fetches the item stored under `key`, or `None` when absent.
    async fn get(&self, key: &ComKey) -> OpsResult<Option<V>>;

    /// Rewrites the item stored under `key`.
    async fn update(&self, key: &ComKey, item: V) -> OpsResult<V>;

    /// Deletes and returns the item stored under `key`.
    async fn remove(&self, key: &ComKey) -> OpsResult<V>;
}
