//! Coordinate-keyed directory of instances for one type universe.

use crate::error::{RegistryError, RegistryResult};
use crate::hub::RegistryHub;
use crate::instance::{AnyInstance, Instance};
use std::fmt;
use std::sync::{Arc, RwLock, Weak};
use tracing::debug;
use waypoint_model::Coordinate;

struct Entry {
    coordinate: Coordinate,
    instance: Arc<dyn AnyInstance>,
}

/// In-memory directory of instances for one top-level type name, keyed by
/// coordinate with scope-aware matching.
///
/// Registration is expected during a single-threaded bootstrap phase before
/// concurrent lookups begin; the internal lock makes interleaved
/// registration and lookup memory-safe, nothing more. Instances are never
/// evicted.
pub struct Registry {
    type_name: String,
    hub: Option<Weak<RegistryHub>>,
    entries: RwLock<Vec<Entry>>,
}

impl Registry {
    /// Creates an empty registry for `type_name`.
    pub fn new(type_name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            type_name: type_name.into(),
            hub: None,
            entries: RwLock::new(Vec::new()),
        })
    }

    /// Creates an empty registry that knows its owning hub.
    pub fn with_hub(type_name: impl Into<String>, hub: &Arc<RegistryHub>) -> Arc<Self> {
        Arc::new(Self {
            type_name: type_name.into(),
            hub: Some(Arc::downgrade(hub)),
            entries: RwLock::new(Vec::new()),
        })
    }

    /// The top-level type name this registry serves.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The owning hub, when created through one.
    #[must_use]
    pub fn hub(&self) -> Option<Arc<RegistryHub>> {
        self.hub.as_ref().and_then(Weak::upgrade)
    }

    /// Registers `instance` under its coordinate.
    ///
    /// Re-registration under an identical hierarchy and scope *set*
    /// overwrites the previous entry (last write wins) — re-registration is
    /// routine during hot reload and test setup, so it is not an error. The
    /// overwritten entry keeps its original position, which keeps
    /// [`Registry::coordinates`] ordering stable.
    pub fn register<V>(self: &Arc<Self>, instance: Arc<Instance<V>>) -> RegistryResult<()>
    where
        V: Send + Sync + 'static,
    {
        instance.attach(Arc::downgrade(self))?;
        let coordinate = instance.coordinate().clone();
        let erased: Arc<dyn AnyInstance> = instance;

        let mut entries = self.entries.write().expect("registry directory lock poisoned");
        let existing = entries.iter_mut().find(|entry| {
            entry.coordinate.kta() == coordinate.kta()
                && entry.coordinate.same_scope_set(&coordinate)
        });
        match existing {
            Some(entry) => {
                debug!(registry = %self.type_name, coordinate = %coordinate, "replaced instance");
                entry.coordinate = coordinate;
                entry.instance = erased;
            }
            None => {
                debug!(registry = %self.type_name, coordinate = %coordinate, "registered instance");
                entries.push(Entry {
                    coordinate,
                    instance: erased,
                });
            }
        }
        Ok(())
    }

    /// Resolves the instance registered for `kta` whose scopes cover
    /// `scopes`.
    ///
    /// The hierarchy must match exactly (same length, names, order). Among
    /// hierarchy matches, a candidate qualifies when its scope set is a
    /// superset of the request; an empty request matches every candidate.
    /// More than one qualifying candidate is ambiguous and an error — the
    /// caller disambiguates with more specific scopes.
    pub fn get(&self, kta: &[&str], scopes: &[&str]) -> RegistryResult<Arc<dyn AnyInstance>> {
        let entries = self.entries.read().expect("registry directory lock poisoned");
        let matches: Vec<&Entry> = entries
            .iter()
            .filter(|entry| entry.coordinate.matches_kta(kta))
            .filter(|entry| entry.coordinate.scopes_superset_of(scopes))
            .collect();

        match matches.as_slice() {
            [entry] => Ok(Arc::clone(&entry.instance)),
            [] => Err(RegistryError::InstanceNotFound {
                registry: self.type_name.clone(),
                kta: kta.join(", "),
                scopes: scopes.join(", "),
            }),
            ambiguous => Err(RegistryError::AmbiguousMatch {
                registry: self.type_name.clone(),
                kta: kta.join(", "),
                scopes: scopes.join(", "),
                count: ambiguous.len(),
            }),
        }
    }

    /// [`Registry::get`] plus a downcast to the concrete item type.
    pub fn get_instance<V>(&self, kta: &[&str], scopes: &[&str]) -> RegistryResult<Arc<Instance<V>>>
    where
        V: Send + Sync + 'static,
    {
        let erased = self.get(kta, scopes)?;
        erased
            .as_any()
            .downcast::<Instance<V>>()
            .map_err(|_| RegistryError::InstanceTypeMismatch {
                registry: self.type_name.clone(),
                kta: kta.join(", "),
            })
    }

    /// Every registered coordinate, in registration order.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.entries
            .read()
            .expect("registry directory lock poisoned")
            .iter()
            .map(|entry| entry.coordinate.clone())
            .collect()
    }

    /// Number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .expect("registry directory lock poisoned")
            .len()
    }

    /// True when nothing is registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("type_name", &self.type_name)
            .field("instances", &self.len())
            .finish_non_exhaustive()
    }
}
