//! The decoration pipeline around raw operations.
//!
//! Wrapping enforces validate-then-mutate-then-notify around every mutation
//! and adds name dispatch for finders, actions, and facets. The stages of
//! one invocation run strictly in order (each awaited before the next);
//! distinct invocations are never serialized here.

use crate::error::{OperationsError, OpsResult};
use crate::operations::Operations;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};
use waypoint_model::Definition;
use waypoint_types::{ComKey, CreateOptions, ItemQuery, LocKey};

/// A raw [`Operations`] implementation decorated with the hooks,
/// validators, and dispatch maps of its [`Definition`].
///
/// Implements [`Operations`] itself, so a wrapped object is substitutable
/// wherever a raw one is expected. Read paths (`all`, `one`, `get`) pass
/// through undecorated.
pub struct WrappedOperations<V>
where
    V: Send + Sync + 'static,
{
    raw: Arc<dyn Operations<V>>,
    definition: Arc<Definition<V>>,
}

impl<V> WrappedOperations<V>
where
    V: Send + Sync + 'static,
{
    /// Wraps `raw` with the cross-cutting configuration of `definition`.
    pub fn new(raw: Arc<dyn Operations<V>>, definition: Arc<Definition<V>>) -> Self {
        Self { raw, definition }
    }

    /// The definition this wrapper enforces.
    #[must_use]
    pub fn definition(&self) -> &Arc<Definition<V>> {
        &self.definition
    }

    /// Updates the item when `key` exists, creates it otherwise.
    ///
    /// The existence probe is a plain `get`; there is no transactional
    /// guarantee between the probe and the mutation that follows. Both
    /// branches run through the full wrapped pipeline.
    pub async fn upsert(&self, key: &ComKey, item: V) -> OpsResult<V> {
        if self.get(key).await?.is_some() {
            self.update(key, item).await
        } else {
            let options = CreateOptions::default().with_key(key.clone());
            self.create(item, &options).await
        }
    }

    /// Dispatches to the named finder.
    ///
    /// Finders are full escape hatches: the result is returned untouched,
    /// with no hook or validator interference.
    pub async fn find(&self, name: &str, params: Value, locations: &[LocKey]) -> OpsResult<Vec<V>> {
        let Some(finder) = self.definition.finder(name) else {
            return Err(OperationsError::FinderNotFound {
                name: name.to_string(),
                coordinate: self.definition.coordinate().to_string(),
            });
        };
        debug!(finder = name, coordinate = %self.definition.coordinate(), "dispatching finder");
        Ok(finder(params, locations.to_vec()).await?)
    }

    /// Dispatches to the named item-scoped action.
    pub async fn action(&self, name: &str, key: &ComKey, params: Value) -> OpsResult<V> {
        let Some(action) = self.definition.action(name) else {
            return Err(OperationsError::ActionNotFound {
                name: name.to_string(),
                coordinate: self.definition.coordinate().to_string(),
            });
        };
        debug!(action = name, key = %key, "dispatching action");
        Ok(action(key.clone(), params).await?)
    }

    /// Dispatches to the named item-scoped facet.
    pub async fn facet(&self, name: &str, key: &ComKey, params: Value) -> OpsResult<Value> {
        let Some(facet) = self.definition.facet(name) else {
            return Err(OperationsError::FacetNotFound {
                name: name.to_string(),
                coordinate: self.definition.coordinate().to_string(),
            });
        };
        debug!(facet = name, key = %key, "dispatching facet");
        Ok(facet(key.clone(), params).await?)
    }

    /// Dispatches to the named location-scoped facet.
    pub async fn all_facet(
        &self,
        name: &str,
        params: Value,
        locations: &[LocKey],
    ) -> OpsResult<Value> {
        let Some(facet) = self.definition.all_facet(name) else {
            return Err(OperationsError::FacetNotFound {
                name: name.to_string(),
                coordinate: self.definition.coordinate().to_string(),
            });
        };
        debug!(facet = name, coordinate = %self.definition.coordinate(), "dispatching all-facet");
        Ok(facet(params, locations.to_vec()).await?)
    }

    fn rejected(&self, op: &'static str) -> OperationsError {
        OperationsError::Validation {
            op,
            coordinate: self.definition.coordinate().to_string(),
        }
    }
}

#[async_trait]
impl<V> Operations<V> for WrappedOperations<V>
where
    V: Send + Sync + 'static,
{
    async fn all(&self, query: &ItemQuery, locations: &[LocKey]) -> OpsResult<Vec<V>> {
        self.raw.all(query, locations).await
    }

    async fn one(&self, query: &ItemQuery, locations: &[LocKey]) -> OpsResult<Option<V>> {
        self.raw.one(query, locations).await
    }

    async fn create(&self, item: V, options: &CreateOptions) -> OpsResult<V> {
        let definition = &self.definition;
        let item = definition.hooks().pre_create(item).await?;
        if !definition.validators().on_create(&item).await? {
            warn!(coordinate = %definition.coordinate(), "create rejected by validator");
            return Err(self.rejected("create"));
        }
        let created = self.raw.create(item, options).await?;
        debug!(coordinate = %definition.coordinate(), "created item");
        Ok(definition.hooks().post_create(created).await?)
    }

    async fn get(&self, key: &ComKey) -> OpsResult<Option<V>> {
        self.raw.get(key).await
    }

    async fn update(&self, key: &ComKey, item: V) -> OpsResult<V> {
        let definition = &self.definition;
        let item = definition.hooks().pre_update(key, item).await?;
        if !definition.validators().on_update(key, &item).await? {
            warn!(coordinate = %definition.coordinate(), key = %key, "update rejected by validator");
            return Err(self.rejected("update"));
        }
        let updated = self.raw.update(key, item).await?;
        debug!(coordinate = %definition.coordinate(), key = %key, "updated item");
        Ok(definition.hooks().post_update(updated).await?)
    }

    async fn remove(&self, key: &ComKey) -> OpsResult<V> {
        let definition = &self.definition;
        let key = definition.hooks().pre_remove(key.clone()).await?;
        if !definition.validators().on_remove(&key).await? {
            warn!(coordinate = %definition.coordinate(), key = %key, "remove rejected by validator");
            return Err(self.rejected("remove"));
        }
        let removed = self.raw.remove(&key).await?;
        debug!(coordinate = %definition.coordinate(), key = %key, "removed item");
        Ok(definition.hooks().post_remove(removed).await?)
    }
}
