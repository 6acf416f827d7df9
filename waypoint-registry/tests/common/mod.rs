//! Shared test fixtures for registry tests.

#![allow(dead_code)]

use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use waypoint_model::{Coordinate, Definition};
use waypoint_registry::{Instance, Operations, OpsResult, Registry};
use waypoint_types::{ComKey, CreateOptions, ItemQuery, LocKey, PriKey};

/// Item type used across the registry tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub key: ComKey,
    pub title: String,
}

/// A top-level book with the given id and title.
pub fn book(id: &str, title: &str) -> Book {
    Book {
        key: ComKey::primary(PriKey::new("book", id)),
        title: title.to_string(),
    }
}

pub fn book_key(id: &str) -> ComKey {
    ComKey::primary(PriKey::new("book", id))
}

/// In-memory CRUD backend keyed by composite key.
///
/// Ignores query filters (queries are opaque to the registry; this backend
/// has no query language) and matches locations by exact chain equality.
#[derive(Default)]
pub struct MemoryBackend {
    items: Mutex<HashMap<ComKey, Book>>,
}

impl MemoryBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_items(items: impl IntoIterator<Item = Book>) -> Arc<Self> {
        let map = items
            .into_iter()
            .map(|item| (item.key.clone(), item))
            .collect();
        Arc::new(Self {
            items: Mutex::new(map),
        })
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn contains(&self, key: &ComKey) -> bool {
        self.items.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl Operations<Book> for MemoryBackend {
    async fn all(&self, _query: &ItemQuery, locations: &[LocKey]) -> OpsResult<Vec<Book>> {
        let items = self.items.lock().unwrap();
        let mut found: Vec<Book> = items
            .values()
            .filter(|item| locations.is_empty() || item.key.loc.as_slice() == locations)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.key.pri.pk.cmp(&b.key.pri.pk));
        Ok(found)
    }

    async fn create(&self, mut item: Book, options: &CreateOptions) -> OpsResult<Book> {
        if let Some(key) = &options.key {
            item.key = key.clone();
        }
        let mut items = self.items.lock().unwrap();
        if items.contains_key(&item.key) {
            return Err(anyhow!("duplicate key {}", item.key).into());
        }
        items.insert(item.key.clone(), item.clone());
        Ok(item)
    }

    async fn get(&self, key: &ComKey) -> OpsResult<Option<Book>> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    async fn update(&self, key: &ComKey, item: Book) -> OpsResult<Book> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(key) {
            return Err(anyhow!("no item under {key}").into());
        }
        items.insert(key.clone(), item.clone());
        Ok(item)
    }

    async fn remove(&self, key: &ComKey) -> OpsResult<Book> {
        self.items
            .lock()
            .unwrap()
            .remove(key)
            .ok_or_else(|| anyhow!("no item under {key}").into())
    }
}

/// A definition for books under the given scopes, with default
/// hooks/validators and empty dispatch maps.
pub fn book_definition(scopes: &[&str]) -> Arc<Definition<Book>> {
    Arc::new(Definition::new(
        Coordinate::try_new(&["book"], scopes).unwrap(),
    ))
}

/// A book instance over a fresh empty in-memory backend.
pub fn book_instance(scopes: &[&str]) -> Arc<Instance<Book>> {
    Instance::new(book_definition(scopes), MemoryBackend::new())
}

/// A registry pre-loaded with one unscoped book instance.
pub fn registry_with_book() -> (Arc<Registry>, Arc<Instance<Book>>) {
    let registry = Registry::new("library");
    let instance = book_instance(&[]);
    registry.register(Arc::clone(&instance)).unwrap();
    (registry, instance)
}

/// Installs a test subscriber so `RUST_LOG` controls trace output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
