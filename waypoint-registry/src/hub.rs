//! Directory of registries keyed by top-level type name.

use crate::error::{RegistryError, RegistryResult};
use crate::instance::{AnyInstance, Instance};
use crate::registry::Registry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::debug;
use waypoint_model::Coordinate;

/// Routes lookups to the right [`Registry`] when an application spans
/// multiple type universes, and aggregates discovery across all of them.
///
/// Created once at bootstrap; registries are added as each domain module
/// initializes and never removed.
pub struct RegistryHub {
    registries: RwLock<HashMap<String, Arc<Registry>>>,
}

impl RegistryHub {
    /// Creates an empty hub.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            registries: RwLock::new(HashMap::new()),
        })
    }

    /// Adds `registry` under its type name.
    ///
    /// An existing entry for that name is overwritten (last write wins),
    /// matching the registry-level re-registration policy.
    pub fn register_registry(&self, registry: Arc<Registry>) {
        debug!(registry = registry.type_name(), "registered registry");
        self.registries
            .write()
            .expect("hub directory lock poisoned")
            .insert(registry.type_name().to_string(), registry);
    }

    /// Creates, stores, and returns a hub-linked registry for `type_name`.
    pub fn create_registry(self: &Arc<Self>, type_name: impl Into<String>) -> Arc<Registry> {
        let registry = Registry::with_hub(type_name, self);
        self.register_registry(Arc::clone(&registry));
        registry
    }

    /// The registry for `type_name`.
    pub fn registry(&self, type_name: &str) -> RegistryResult<Arc<Registry>> {
        self.registries
            .read()
            .expect("hub directory lock poisoned")
            .get(type_name)
            .cloned()
            .ok_or_else(|| RegistryError::RegistryNotFound(type_name.to_string()))
    }

    /// Routes a lookup to the registry for `type_name`, propagating its
    /// result unchanged.
    pub fn get(
        &self,
        type_name: &str,
        kta: &[&str],
        scopes: &[&str],
    ) -> RegistryResult<Arc<dyn AnyInstance>> {
        self.registry(type_name)?.get(kta, scopes)
    }

    /// [`RegistryHub::get`] plus a downcast to the concrete item type.
    pub fn get_instance<V>(
        &self,
        type_name: &str,
        kta: &[&str],
        scopes: &[&str],
    ) -> RegistryResult<Arc<Instance<V>>>
    where
        V: Send + Sync + 'static,
    {
        self.registry(type_name)?.get_instance(kta, scopes)
    }

    /// Registered registry type names.
    #[must_use]
    pub fn types(&self) -> Vec<String> {
        self.registries
            .read()
            .expect("hub directory lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    /// Every registry's coordinates, keyed by registry type name.
    #[must_use]
    pub fn all_coordinates(&self) -> HashMap<String, Vec<Coordinate>> {
        self.registries
            .read()
            .expect("hub directory lock poisoned")
            .iter()
            .map(|(type_name, registry)| (type_name.clone(), registry.coordinates()))
            .collect()
    }
}

impl fmt::Debug for RegistryHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types = self.types();
        types.sort_unstable();
        f.debug_struct("RegistryHub")
            .field("types", &types)
            .finish()
    }
}
