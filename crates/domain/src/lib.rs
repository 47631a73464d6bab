//! Category-scoped entity assembly.
//!
//! This crate provides the generalized core:
//! - [`CategoryFactory`] trait yielding immutable [`PolicyBundle`]s
//! - [`EntityBuilder`] validating parts against the selected bundle
//! - [`TemplateCatalog`] handing out independent copies of canned parts
//! - [`Registry`] enforcing unique identities
//!
//! and two domains built on it: [`league`] (divisions and teams) and
//! [`pizzeria`] (styles, pizzas and orders).

pub mod builder;
pub mod catalog;
pub mod category;
pub mod entity;
pub mod error;
pub mod league;
pub mod part;
pub mod pizzeria;
pub mod policy;
pub mod registry;

pub use builder::{BuilderError, BuilderState, EntityBuilder};
pub use catalog::{CatalogError, Template, TemplateCatalog};
pub use category::{CategoryFactory, ParseCategoryError};
pub use entity::{Entity, EntitySummary};
pub use error::{DomainError, Result};
pub use part::{Part, PartKey};
pub use policy::{PartLimits, PartRule, PolicyBundle, PriceRule, Pricing};
pub use registry::{Identified, LazyRegistry, Registry, RegistryError};
