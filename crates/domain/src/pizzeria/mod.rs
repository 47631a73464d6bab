//! Pizzeria domain: styles, toppings, pizzas and customer orders.

mod order;
mod pizza;
mod recipes;
mod style;
mod topping;

pub use order::{Order, OrderLine, OrderSummary};
pub use pizza::{DailyRegister, Pizza, PizzaBuilder, PizzaDetails};
pub use recipes::{CAPRICCIOSA, MARGHERITA, MARINARA, PEPPERONI, default_recipes};
pub use style::{BakeProfile, Style};
pub use topping::Topping;
