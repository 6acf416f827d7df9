//! A registered instance: definition, wrapped operations, and navigation
//! handles.

use crate::error::{RegistryError, RegistryResult};
use crate::operations::Operations;
use crate::registry::Registry;
use crate::wrapped::WrappedOperations;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};
use waypoint_model::{Coordinate, Definition};

/// Type-erased view of an [`Instance`], as stored by a [`Registry`].
///
/// Registries hold instances of many item types; this trait is the common
/// surface for discovery and routing. Typed access goes through
/// [`Registry::get_instance`], which downcasts via [`AnyInstance::as_any`].
pub trait AnyInstance: Send + Sync + fmt::Debug + 'static {
    /// The coordinate this instance is registered under.
    fn coordinate(&self) -> &Coordinate;

    /// Upcast used for typed downcasting.
    fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// A definition bound to its wrapped operations, with non-owning handles to
/// the owning registry and, for contained item types, the parent instance.
///
/// Instances are created once at wiring time, registered into exactly one
/// registry, and never re-parented.
pub struct Instance<V>
where
    V: Send + Sync + 'static,
{
    definition: Arc<Definition<V>>,
    operations: WrappedOperations<V>,
    registry: OnceLock<Weak<Registry>>,
    parent: Option<Weak<dyn AnyInstance>>,
}

impl<V> Instance<V>
where
    V: Send + Sync + 'static,
{
    /// Binds a definition to a raw backend, wrapping the backend through
    /// the decoration pipeline.
    pub fn new(definition: Arc<Definition<V>>, raw: Arc<dyn Operations<V>>) -> Arc<Self> {
        Arc::new(Self {
            operations: WrappedOperations::new(raw, Arc::clone(&definition)),
            definition,
            registry: OnceLock::new(),
            parent: None,
        })
    }

    /// Like [`Instance::new`], additionally recording the instance of the
    /// nearest ancestor location type.
    pub fn contained(
        definition: Arc<Definition<V>>,
        raw: Arc<dyn Operations<V>>,
        parent: &Arc<dyn AnyInstance>,
    ) -> Arc<Self> {
        Arc::new(Self {
            operations: WrappedOperations::new(raw, Arc::clone(&definition)),
            definition,
            registry: OnceLock::new(),
            parent: Some(Arc::downgrade(parent)),
        })
    }

    /// The definition this instance was wired with.
    #[must_use]
    pub fn definition(&self) -> &Arc<Definition<V>> {
        &self.definition
    }

    /// The decorated operations.
    #[must_use]
    pub fn operations(&self) -> &WrappedOperations<V> {
        &self.operations
    }

    /// The coordinate this instance is registered under.
    #[must_use]
    pub fn coordinate(&self) -> &Coordinate {
        self.definition.coordinate()
    }

    /// The owning registry, available once registered.
    ///
    /// Used by operations that resolve sibling instances at call time.
    #[must_use]
    pub fn registry(&self) -> Option<Arc<Registry>> {
        self.registry.get().and_then(Weak::upgrade)
    }

    /// The parent instance, for contained item types.
    #[must_use]
    pub fn parent(&self) -> Option<Arc<dyn AnyInstance>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn attach(&self, registry: Weak<Registry>) -> RegistryResult<()> {
        self.registry
            .set(registry)
            .map_err(|_| RegistryError::AlreadyAttached {
                coordinate: self.coordinate().to_string(),
            })
    }
}

impl<V> AnyInstance for Instance<V>
where
    V: Send + Sync + 'static,
{
    fn coordinate(&self) -> &Coordinate {
        self.definition.coordinate()
    }

    fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl<V> fmt::Debug for Instance<V>
where
    V: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("coordinate", &self.coordinate().to_string())
            .field("registered", &self.registry.get().is_some())
            .finish_non_exhaustive()
    }
}
