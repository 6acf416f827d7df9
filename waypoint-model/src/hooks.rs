//! Lifecycle hooks and validators bracketing item mutations.
//!
//! Every method has a pass-through default, so a [`Definition`] is always
//! fully callable without presence checks and implementors override only
//! the slots they care about. Errors returned from any slot propagate to
//! the caller unchanged.
//!
//! [`Definition`]: crate::Definition

use anyhow::Result;
use async_trait::async_trait;
use waypoint_types::ComKey;

/// Transformation hooks run before and after each mutation.
///
/// Pre-hooks may rewrite their input (stamping defaults onto an item,
/// normalizing a key) before validation and the backend see it; post-hooks
/// may rewrite the backend's output before it reaches the caller.
#[async_trait]
pub trait ItemHooks<V>: Send + Sync
where
    V: Send + Sync + 'static,
{
    /// Runs before `create`; the returned item is what gets validated and
    /// stored.
    async fn pre_create(&self, item: V) -> Result<V> {
        Ok(item)
    }

    /// Runs on the backend's `create` result before it is returned.
    async fn post_create(&self, item: V) -> Result<V> {
        Ok(item)
    }

    /// Runs before `update`; the returned item is what gets validated and
    /// stored.
    async fn pre_update(&self, key: &ComKey, item: V) -> Result<V> {
        let _ = key;
        Ok(item)
    }

    /// Runs on the backend's `update` result before it is returned.
    async fn post_update(&self, item: V) -> Result<V> {
        Ok(item)
    }

    /// Runs before `remove`; may rewrite the key the removal targets.
    async fn pre_remove(&self, key: ComKey) -> Result<ComKey> {
        Ok(key)
    }

    /// Runs on the removed item before it is returned.
    async fn post_remove(&self, item: V) -> Result<V> {
        Ok(item)
    }
}

/// Admission checks run between a pre-hook and the raw mutation.
///
/// Returning `Ok(false)` rejects the mutation without the backend ever
/// being invoked; returning `Err` propagates unchanged.
#[async_trait]
pub trait ItemValidators<V>: Send + Sync
where
    V: Send + Sync + 'static,
{
    /// Admission check for `create`, run on the pre-hooked item.
    async fn on_create(&self, item: &V) -> Result<bool> {
        let _ = item;
        Ok(true)
    }

    /// Admission check for `update`, run on the pre-hooked item.
    async fn on_update(&self, key: &ComKey, item: &V) -> Result<bool> {
        let _ = (key, item);
        Ok(true)
    }

    /// Admission check for `remove`.
    async fn on_remove(&self, key: &ComKey) -> Result<bool> {
        let _ = key;
        Ok(true)
    }
}

/// Pass-through hooks used when a definition supplies none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl<V> ItemHooks<V> for NoopHooks where V: Send + Sync + 'static {}

/// Accept-everything validators used when a definition supplies none.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl<V> ItemValidators<V> for AcceptAll where V: Send + Sync + 'static {}
