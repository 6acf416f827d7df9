//! Definition: a coordinate bound to its cross-cutting configuration.

use crate::coordinate::Coordinate;
use crate::hooks::{AcceptAll, ItemHooks, ItemValidators, NoopHooks};
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use waypoint_types::{ComKey, LocKey};

/// Named query escape hatch: `(params, locations)` to matching items.
/// Finders bypass hooks and validators entirely.
pub type FinderFn<V> =
    Arc<dyn Fn(Value, Vec<LocKey>) -> BoxFuture<'static, anyhow::Result<Vec<V>>> + Send + Sync>;

/// Named item-scoped operation: `(key, params)` to the resulting item.
pub type ActionFn<V> =
    Arc<dyn Fn(ComKey, Value) -> BoxFuture<'static, anyhow::Result<V>> + Send + Sync>;

/// Named item-scoped custom read: `(key, params)` to an opaque result.
pub type FacetFn =
    Arc<dyn Fn(ComKey, Value) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync>;

/// Named location-scoped custom read: `(params, locations)` to an opaque
/// result.
pub type AllFacetFn =
    Arc<dyn Fn(Value, Vec<LocKey>) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync>;

/// A coordinate plus the hooks, validators, and named dispatch maps wrapped
/// around an instance's operations.
///
/// A fresh definition is fully callable: hooks pass through, validators
/// accept, and the dispatch maps are empty. Construction is pure; nothing
/// here touches a backend.
pub struct Definition<V>
where
    V: Send + Sync + 'static,
{
    coordinate: Coordinate,
    hooks: Arc<dyn ItemHooks<V>>,
    validators: Arc<dyn ItemValidators<V>>,
    finders: HashMap<String, FinderFn<V>>,
    actions: HashMap<String, ActionFn<V>>,
    facets: HashMap<String, FacetFn>,
    all_facets: HashMap<String, AllFacetFn>,
}

impl<V> Definition<V>
where
    V: Send + Sync + 'static,
{
    /// Creates a definition with pass-through hooks, accept-all validators,
    /// and empty dispatch maps.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            hooks: Arc::new(NoopHooks),
            validators: Arc::new(AcceptAll),
            finders: HashMap::new(),
            actions: HashMap::new(),
            facets: HashMap::new(),
            all_facets: HashMap::new(),
        }
    }

    /// Replaces the hook set. Slots the implementation does not override
    /// keep their pass-through defaults.
    #[must_use]
    pub fn with_hooks(mut self, hooks: Arc<dyn ItemHooks<V>>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replaces the validator set. Slots the implementation does not
    /// override keep their accept-all defaults.
    #[must_use]
    pub fn with_validators(mut self, validators: Arc<dyn ItemValidators<V>>) -> Self {
        self.validators = validators;
        self
    }

    /// Registers a single finder under `name`.
    #[must_use]
    pub fn with_finder<F, Fut>(mut self, name: impl Into<String>, finder: F) -> Self
    where
        F: Fn(Value, Vec<LocKey>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Vec<V>>> + Send + 'static,
    {
        let boxed: FinderFn<V> = Arc::new(move |params, locations| {
            Box::pin(finder(params, locations)) as BoxFuture<'static, _>
        });
        self.finders.insert(name.into(), boxed);
        self
    }

    /// Replaces the finder map wholesale.
    #[must_use]
    pub fn with_finders(mut self, finders: HashMap<String, FinderFn<V>>) -> Self {
        self.finders = finders;
        self
    }

    /// Registers a single action under `name`.
    #[must_use]
    pub fn with_action<F, Fut>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(ComKey, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
    {
        let boxed: ActionFn<V> = Arc::new(move |key, params| {
            Box::pin(action(key, params)) as BoxFuture<'static, _>
        });
        self.actions.insert(name.into(), boxed);
        self
    }

    /// Replaces the action map wholesale.
    #[must_use]
    pub fn with_actions(mut self, actions: HashMap<String, ActionFn<V>>) -> Self {
        self.actions = actions;
        self
    }

    /// Registers a single item-scoped facet under `name`.
    #[must_use]
    pub fn with_facet<F, Fut>(mut self, name: impl Into<String>, facet: F) -> Self
    where
        F: Fn(ComKey, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        let boxed: FacetFn = Arc::new(move |key, params| {
            Box::pin(facet(key, params)) as BoxFuture<'static, _>
        });
        self.facets.insert(name.into(), boxed);
        self
    }

    /// Replaces the facet map wholesale.
    #[must_use]
    pub fn with_facets(mut self, facets: HashMap<String, FacetFn>) -> Self {
        self.facets = facets;
        self
    }

    /// Registers a single location-scoped facet under `name`.
    #[must_use]
    pub fn with_all_facet<F, Fut>(mut self, name: impl Into<String>, facet: F) -> Self
    where
        F: Fn(Value, Vec<LocKey>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        let boxed: AllFacetFn = Arc::new(move |params, locations| {
            Box::pin(facet(params, locations)) as BoxFuture<'static, _>
        });
        self.all_facets.insert(name.into(), boxed);
        self
    }

    /// Replaces the location-scoped facet map wholesale.
    #[must_use]
    pub fn with_all_facets(mut self, all_facets: HashMap<String, AllFacetFn>) -> Self {
        self.all_facets = all_facets;
        self
    }

    /// The identity this definition is registered under.
    #[must_use]
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// The hook set.
    #[must_use]
    pub fn hooks(&self) -> &Arc<dyn ItemHooks<V>> {
        &self.hooks
    }

    /// The validator set.
    #[must_use]
    pub fn validators(&self) -> &Arc<dyn ItemValidators<V>> {
        &self.validators
    }

    /// Looks up a finder by name.
    #[must_use]
    pub fn finder(&self, name: &str) -> Option<&FinderFn<V>> {
        self.finders.get(name)
    }

    /// Looks up an action by name.
    #[must_use]
    pub fn action(&self, name: &str) -> Option<&ActionFn<V>> {
        self.actions.get(name)
    }

    /// Looks up an item-scoped facet by name.
    #[must_use]
    pub fn facet(&self, name: &str) -> Option<&FacetFn> {
        self.facets.get(name)
    }

    /// Looks up a location-scoped facet by name.
    #[must_use]
    pub fn all_facet(&self, name: &str) -> Option<&AllFacetFn> {
        self.all_facets.get(name)
    }
}

impl<V> fmt::Debug for Definition<V>
where
    V: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut finders: Vec<&str> = self.finders.keys().map(String::as_str).collect();
        finders.sort_unstable();
        let mut actions: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        actions.sort_unstable();
        f.debug_struct("Definition")
            .field("coordinate", &self.coordinate.to_string())
            .field("finders", &finders)
            .field("actions", &actions)
            .field("facets", &self.facets.len())
            .field("all_facets", &self.all_facets.len())
            .finish()
    }
}
