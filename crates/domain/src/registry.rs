//! Registry of built entities keyed by identity.

use std::sync::{Arc, OnceLock};

use common::EntityId;
use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::RwLock;
use thiserror::Error;

/// Anything that can be registered under a unique identity.
pub trait Identified {
    fn identity(&self) -> &EntityId;
}

/// Errors raised by [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate identity: {identity} is already registered in {registry}")]
    DuplicateIdentity { identity: EntityId, registry: String },
}

/// Thread-safe store of entities that rejects duplicate identities.
///
/// Entities are kept in registration order and are never removed. The label
/// (season, business day) is fixed at construction.
pub struct Registry<E> {
    label: String,
    entries: RwLock<IndexMap<EntityId, Arc<E>>>,
}

impl<E: Identified> Registry<E> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Season or day this registry covers.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Registers `entity`, failing if its identity is already present.
    ///
    /// The duplicate check and the insert happen under one write lock.
    #[tracing::instrument(skip(self, entity), fields(registry = %self.label, identity = %entity.identity()))]
    pub fn register(&self, entity: E) -> Result<Arc<E>, RegistryError> {
        let mut entries = self.entries.write();
        match entries.entry(entity.identity().clone()) {
            Entry::Occupied(occupied) => {
                metrics::counter!("registry_rejections_total").increment(1);
                tracing::warn!("identity already registered");
                Err(RegistryError::DuplicateIdentity {
                    identity: occupied.key().clone(),
                    registry: self.label.clone(),
                })
            }
            Entry::Vacant(vacant) => {
                let entity = Arc::new(entity);
                vacant.insert(Arc::clone(&entity));
                metrics::counter!("registry_registrations_total").increment(1);
                tracing::info!("entity registered");
                Ok(entity)
            }
        }
    }

    /// Snapshot of all registered entities in registration order.
    pub fn list(&self) -> Vec<Arc<E>> {
        self.entries.read().values().cloned().collect()
    }

    pub fn get(&self, identity: &EntityId) -> Option<Arc<E>> {
        self.entries.read().get(identity).cloned()
    }

    pub fn contains(&self, identity: &EntityId) -> bool {
        self.entries.read().contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<E> std::fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.label)
            .field("len", &self.entries.read().len())
            .finish()
    }
}

/// Initialize-once holder for a process-wide [`Registry`].
///
/// Suitable for a `static`; the registry is created on first access even
/// when several threads race to obtain it.
pub struct LazyRegistry<E> {
    label: fn() -> String,
    cell: OnceLock<Registry<E>>,
}

impl<E: Identified> LazyRegistry<E> {
    pub const fn new(label: fn() -> String) -> Self {
        Self {
            label,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &Registry<E> {
        self.cell.get_or_init(|| {
            let label = (self.label)();
            tracing::debug!(%label, "initializing shared registry");
            Registry::new(label)
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
