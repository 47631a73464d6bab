//! Customer orders: a read-only projection over built pizzas.

use std::sync::Arc;

use common::{EntityId, Money, OrderId, TaxRate};
use serde::Serialize;

use super::{DailyRegister, Pizza};

/// An immutable list of pizzas with derived totals.
///
/// Each line is taxed at the rate of its own style, so orders mixing styles
/// sum differently-taxed lines.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    lines: Vec<Arc<Pizza>>,
}

impl Order {
    pub fn new(lines: impl IntoIterator<Item = Arc<Pizza>>) -> Self {
        Self::with_id(OrderId::new(), lines)
    }

    pub fn with_id(id: OrderId, lines: impl IntoIterator<Item = Arc<Pizza>>) -> Self {
        Self {
            id,
            lines: lines.into_iter().collect(),
        }
    }

    /// Order covering every pizza registered so far, in registration order.
    pub fn from_register(register: &DailyRegister) -> Self {
        Self::new(register.list())
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn lines(&self) -> &[Arc<Pizza>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|line| line.price()).sum()
    }

    /// Sum of each line's tax at its own style's rate.
    pub fn tax(&self) -> Money {
        self.lines.iter().map(|line| line.tax()).sum()
    }

    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id,
            lines: self
                .lines
                .iter()
                .map(|line| OrderLine {
                    ticket: line.id().clone(),
                    style: line.category().to_string(),
                    toppings: line.part_count(),
                    price: line.price(),
                    tax_rate: line.tax_rate(),
                    tax: line.tax(),
                })
                .collect(),
            subtotal: self.subtotal(),
            tax: self.tax(),
            total: self.total(),
        }
    }
}

/// One line of an [`OrderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub ticket: EntityId,
    pub style: String,
    pub toppings: usize,
    pub price: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
}

/// Serializable snapshot of an order for receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub lines: Vec<OrderLine>,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}
