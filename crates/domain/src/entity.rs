//! Immutable entities produced by [`EntityBuilder`](crate::builder::EntityBuilder).

use std::sync::Arc;

use common::{EntityId, Money, TaxRate};
use serde::Serialize;

use crate::part::{Part, PartKey};
use crate::policy::PolicyBundle;
use crate::registry::Identified;

/// A built entity: identity, category, shared policy bundle, ordered parts
/// and descriptive details.
///
/// Entities can only be obtained from a successful build, so every instance
/// satisfies its bundle's limits and holds distinct, accepted discriminators.
#[derive(Debug, Clone)]
pub struct Entity<K, O, D> {
    id: EntityId,
    category: String,
    policy: Arc<PolicyBundle<K, O>>,
    parts: Vec<Part<K>>,
    details: D,
}

impl<K: PartKey, O, D> Entity<K, O, D> {
    pub(crate) fn new(
        id: EntityId,
        category: String,
        policy: Arc<PolicyBundle<K, O>>,
        parts: Vec<Part<K>>,
        details: D,
    ) -> Self {
        Self {
            id,
            category,
            policy,
            parts,
            details,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Canonical name of the category the entity was built under.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn policy(&self) -> &PolicyBundle<K, O> {
        &self.policy
    }

    /// Parts in the order they were added.
    pub fn parts(&self) -> &[Part<K>] {
        &self.parts
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.parts.iter().any(|part| part.key() == key)
    }

    pub fn part(&self, key: &K) -> Option<&Part<K>> {
        self.parts.iter().find(|part| part.key() == key)
    }

    pub fn details(&self) -> &D {
        &self.details
    }

    pub fn operations(&self) -> &O {
        self.policy.operations()
    }

    /// Pre-tax price (or fee) computed by the category's price rule.
    pub fn price(&self) -> Money {
        self.policy.price_for(&self.parts)
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.policy.pricing().tax_rate
    }

    /// Tax owed on [`price`](Self::price) at the bundle's own rate.
    pub fn tax(&self) -> Money {
        self.policy.pricing().tax_on(self.price())
    }

    pub fn total(&self) -> Money {
        self.price() + self.tax()
    }

    /// Read-only view for reporting layers.
    pub fn summary(&self) -> EntitySummary<'_, K, O, D> {
        EntitySummary {
            id: &self.id,
            category: &self.category,
            parts: &self.parts,
            details: &self.details,
            operations: self.policy.operations(),
            price: self.price(),
            tax: self.tax(),
            total: self.total(),
        }
    }
}

impl<K: PartKey, O, D> Identified for Entity<K, O, D> {
    fn identity(&self) -> &EntityId {
        &self.id
    }
}

/// Serializable snapshot of an entity and its derived values.
#[derive(Debug, Serialize)]
pub struct EntitySummary<'a, K, O, D> {
    pub id: &'a EntityId,
    pub category: &'a str,
    pub parts: &'a [Part<K>],
    pub details: &'a D,
    pub operations: &'a O,
    pub price: Money,
    pub tax: Money,
    pub total: Money,
}
