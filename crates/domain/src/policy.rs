//! Policy bundles: the immutable rules a category imposes on its entities.

use common::{Money, TaxRate};
use serde::{Deserialize, Serialize};

use crate::part::Part;

/// Price constants for a category.
///
/// The standard formula prices an entity with `n` parts at
/// `base + per_part * max(0, n - included_parts)`. Categories that need a
/// different shape supply their own [`PriceRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub base: Money,
    pub per_part: Money,
    /// Parts covered by the base price before the surcharge applies.
    pub included_parts: u32,
    pub tax_rate: TaxRate,
}

impl Pricing {
    /// Flat base price plus a surcharge for every part, untaxed.
    pub const fn per_part(base: Money, per_part: Money) -> Self {
        Self {
            base,
            per_part,
            included_parts: 0,
            tax_rate: TaxRate::EXEMPT,
        }
    }

    pub const fn with_included_parts(mut self, included_parts: u32) -> Self {
        self.included_parts = included_parts;
        self
    }

    pub const fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Standard pre-tax price for an entity holding `part_count` parts.
    pub fn price_for(&self, part_count: usize) -> Money {
        let count = u32::try_from(part_count).unwrap_or(u32::MAX);
        let surcharged = count.saturating_sub(self.included_parts);
        self.base + self.per_part.multiply(surcharged)
    }

    pub fn tax_on(&self, amount: Money) -> Money {
        self.tax_rate.apply(amount)
    }
}

/// Inclusive bounds on the number of parts an entity may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartLimits {
    pub min: usize,
    pub max: usize,
}

impl PartLimits {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl std::fmt::Display for PartLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Predicate a part discriminator must satisfy to be accepted.
pub struct PartRule<K> {
    description: &'static str,
    predicate: fn(&K) -> bool,
}

impl<K> PartRule<K> {
    /// Creates a rule; `description` is reported when a value is rejected.
    pub const fn new(description: &'static str, predicate: fn(&K) -> bool) -> Self {
        Self {
            description,
            predicate,
        }
    }

    /// A rule that accepts every value.
    pub fn any() -> Self {
        Self::new("any value", accept_all::<K>)
    }

    pub fn accepts(&self, key: &K) -> bool {
        (self.predicate)(key)
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

fn accept_all<K>(_: &K) -> bool {
    true
}

impl<K> Clone for PartRule<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for PartRule<K> {}

impl<K> std::fmt::Debug for PartRule<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Fee or price function evaluated over an entity's parts.
pub struct PriceRule<K> {
    description: &'static str,
    compute: fn(&Pricing, &[Part<K>]) -> Money,
}

impl<K> PriceRule<K> {
    pub const fn new(
        description: &'static str,
        compute: fn(&Pricing, &[Part<K>]) -> Money,
    ) -> Self {
        Self {
            description,
            compute,
        }
    }

    /// [`Pricing::price_for`] applied to the part count.
    pub fn standard() -> Self {
        Self::new("per part", standard_price::<K>)
    }

    pub fn price(&self, pricing: &Pricing, parts: &[Part<K>]) -> Money {
        (self.compute)(pricing, parts)
    }

    pub fn description(&self) -> &'static str {
        self.description
    }
}

fn standard_price<K>(pricing: &Pricing, parts: &[Part<K>]) -> Money {
    pricing.price_for(parts.len())
}

impl<K> Clone for PriceRule<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for PriceRule<K> {}

impl<K> std::fmt::Debug for PriceRule<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceRule")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Immutable set of rules produced by a category factory.
///
/// `O` carries the category's operational parameters (match timing, bake
/// profile). The price rule defaults to [`PriceRule::standard`]. Bundles are shared by every entity built under them and are
/// never mutated after creation.
#[derive(Debug, Clone)]
pub struct PolicyBundle<K, O> {
    pricing: Pricing,
    price_rule: PriceRule<K>,
    limits: PartLimits,
    rule: PartRule<K>,
    operations: O,
}

impl<K, O> PolicyBundle<K, O> {
    pub fn new(pricing: Pricing, limits: PartLimits, rule: PartRule<K>, operations: O) -> Self {
        Self {
            pricing,
            price_rule: PriceRule::standard(),
            limits,
            rule,
            operations,
        }
    }

    /// Replaces the standard formula with a category-specific one.
    pub fn with_price_rule(mut self, price_rule: PriceRule<K>) -> Self {
        self.price_rule = price_rule;
        self
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn price_rule(&self) -> &PriceRule<K> {
        &self.price_rule
    }

    pub fn limits(&self) -> PartLimits {
        self.limits
    }

    pub fn rule(&self) -> &PartRule<K> {
        &self.rule
    }

    pub fn operations(&self) -> &O {
        &self.operations
    }

    /// Returns true if `key` may be used as a part discriminator.
    pub fn accepts(&self, key: &K) -> bool {
        self.rule.accepts(key)
    }

    /// Pre-tax price (or fee) of an entity holding `parts`.
    pub fn price_for(&self, parts: &[Part<K>]) -> Money {
        self.price_rule.price(&self.pricing, parts)
    }
}
