//! Pizzas and their builder.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::builder::{BuilderError, BuilderState, EntityBuilder};
use crate::catalog::Template;
use crate::category::CategoryFactory;
use crate::entity::Entity;
use crate::registry::Registry;

use super::{BakeProfile, Topping};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaDetails {
    pub crust: Option<String>,
    pub customer: Option<String>,
}

/// A single pizza line, identified by its ticket.
pub type Pizza = Entity<Topping, BakeProfile, PizzaDetails>;

/// Registry of pizzas sold during one business day.
pub type DailyRegister = Registry<Pizza>;

impl Pizza {
    pub fn toppings(&self) -> impl Iterator<Item = Topping> + '_ {
        self.parts().iter().map(|part| *part.key())
    }

    pub fn bake(&self) -> &BakeProfile {
        self.operations()
    }

    pub fn crust(&self) -> Option<&str> {
        self.details().crust.as_deref()
    }

    pub fn customer(&self) -> Option<&str> {
        self.details().customer.as_deref()
    }
}

/// Builder facade for [`Pizza`].
#[derive(Default)]
pub struct PizzaBuilder {
    inner: EntityBuilder<Topping, BakeProfile, PizzaDetails>,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BuilderState {
        self.inner.state()
    }

    pub fn style<F>(&mut self, style: &F) -> Result<&mut Self, BuilderError>
    where
        F: CategoryFactory<Key = Topping, Operations = BakeProfile> + ?Sized,
    {
        self.inner.select_category(style)?;
        Ok(self)
    }

    /// Sets the ticket the pizza is registered under.
    pub fn ticket(&mut self, ticket: impl Into<EntityId>) -> Result<&mut Self, BuilderError> {
        self.inner.set_identity(ticket)?;
        Ok(self)
    }

    pub fn crust(&mut self, crust: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let crust = crust.into();
        self.inner.describe(|d| d.crust = Some(crust))?;
        Ok(self)
    }

    pub fn customer(&mut self, customer: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let customer = customer.into();
        self.inner.describe(|d| d.customer = Some(customer))?;
        Ok(self)
    }

    pub fn add_topping(
        &mut self,
        label: impl Into<String>,
        topping: Topping,
    ) -> Result<&mut Self, BuilderError> {
        self.inner.add_part(label, topping)?;
        Ok(self)
    }

    /// Adds every topping of a recipe, or none if one is rejected.
    pub fn add_recipe(&mut self, recipe: Template<Topping>) -> Result<&mut Self, BuilderError> {
        self.inner.add_parts(recipe)?;
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Pizza, BuilderError> {
        self.inner.build()
    }
}

#[cfg(test)]
mod tests {
    use common::Money;

    use super::*;
    use crate::pizzeria::Style;

    #[test]
    fn builds_new_york_pizza() {
        let mut builder = PizzaBuilder::new();
        builder
            .style(&Style::NewYork)
            .unwrap()
            .ticket("NY-001")
            .unwrap()
            .crust("thin")
            .unwrap()
            .customer("Marta")
            .unwrap()
            .add_topping("Sauce", Topping::Tomato)
            .unwrap()
            .add_topping("Cheese", Topping::Mozzarella)
            .unwrap()
            .add_topping("Pepperoni", Topping::Pepperoni)
            .unwrap();

        let pizza = builder.build().unwrap();
        assert_eq!(pizza.category(), "New York");
        assert_eq!(pizza.crust(), Some("thin"));
        assert_eq!(pizza.customer(), Some("Marta"));
        assert_eq!(
            pizza.toppings().collect::<Vec<_>>(),
            vec![Topping::Tomato, Topping::Mozzarella, Topping::Pepperoni]
        );
        assert_eq!(pizza.price(), Money::from_dollars(12));
        assert_eq!(pizza.tax(), Money::from_cents(120));
        assert_eq!(pizza.bake().temperature_celsius, 290);
    }

    #[test]
    fn napolitana_rejects_pepperoni() {
        let mut builder = PizzaBuilder::new();
        builder.style(&Style::Napolitana).unwrap();
        let err = builder
            .add_topping("Pepperoni", Topping::Pepperoni)
            .err()
            .unwrap();
        assert_eq!(
            err,
            BuilderError::InvalidDiscriminator {
                value: "pepperoni".to_string(),
                category: "Napolitana".to_string(),
                rule: "traditional topping",
            }
        );
    }

    #[test]
    fn same_topping_twice_is_a_duplicate() {
        let mut builder = PizzaBuilder::new();
        builder
            .style(&Style::NewYork)
            .unwrap()
            .ticket("NY-002")
            .unwrap()
            .add_topping("Cheese", Topping::Mozzarella)
            .unwrap()
            .add_topping("Extra cheese", Topping::Mozzarella)
            .unwrap();
        assert_eq!(
            builder.build().unwrap_err(),
            BuilderError::DuplicatePart {
                value: "mozzarella".to_string()
            }
        );
    }

    #[test]
    fn pizza_without_toppings_is_out_of_bounds() {
        let mut builder = PizzaBuilder::new();
        builder.style(&Style::NewYork).unwrap().ticket("NY-003").unwrap();
        assert!(matches!(
            builder.build().unwrap_err(),
            BuilderError::OutOfBounds {
                actual: 0,
                min: 1,
                max: 6,
                ..
            }
        ));
    }
}
