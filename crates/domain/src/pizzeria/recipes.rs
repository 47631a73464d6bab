//! Canned recipes for the pizza template catalog.

use crate::catalog::TemplateCatalog;
use crate::part::Part;

use super::Topping;

pub const MARGHERITA: &str = "margherita";
pub const MARINARA: &str = "marinara";
pub const PEPPERONI: &str = "pepperoni";
pub const CAPRICCIOSA: &str = "capricciosa";

fn recipe(toppings: &[(&str, Topping)]) -> Vec<Part<Topping>> {
    toppings
        .iter()
        .map(|(label, topping)| Part::new(*label, *topping))
        .collect()
}

/// Catalog preloaded with the house recipes.
pub fn default_recipes() -> TemplateCatalog<Topping> {
    let mut catalog = TemplateCatalog::new();
    catalog.store(
        MARGHERITA,
        recipe(&[
            ("San Marzano tomato", Topping::Tomato),
            ("Fior di latte", Topping::Mozzarella),
            ("Fresh basil", Topping::Basil),
        ]),
    );
    catalog.store(
        MARINARA,
        recipe(&[
            ("San Marzano tomato", Topping::Tomato),
            ("Sliced garlic", Topping::Garlic),
            ("Oregano", Topping::Oregano),
        ]),
    );
    catalog.store(
        PEPPERONI,
        recipe(&[
            ("Tomato sauce", Topping::Tomato),
            ("Mozzarella", Topping::Mozzarella),
            ("Pepperoni", Topping::Pepperoni),
        ]),
    );
    catalog.store(
        CAPRICCIOSA,
        recipe(&[
            ("Tomato sauce", Topping::Tomato),
            ("Mozzarella", Topping::Mozzarella),
            ("Cooked ham", Topping::Ham),
            ("Mushrooms", Topping::Mushroom),
            ("Artichokes", Topping::Artichoke),
            ("Black olives", Topping::Olive),
        ]),
    );
    catalog
}
