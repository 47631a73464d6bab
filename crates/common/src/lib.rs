//! Shared value types for the lineup workspace.
//!
//! - [`EntityId`] and [`OrderId`] identify registered entities and orders
//! - [`Money`] and [`TaxRate`] carry prices as integer cents

mod money;
mod types;

pub use money::{Money, TaxRate};
pub use types::{EntityId, OrderId};
