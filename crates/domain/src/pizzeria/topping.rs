//! Pizza toppings and the traditional set Napolitana accepts.

use serde::{Deserialize, Serialize};

/// Toppings offered by the pizzeria; a pizza holds each at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Tomato,
    Mozzarella,
    Basil,
    Oregano,
    Garlic,
    Anchovy,
    Olive,
    Pepperoni,
    Mushroom,
    Ham,
    Onion,
    Artichoke,
    Sausage,
    Pineapple,
}

impl Topping {
    /// Toppings permitted on a traditional Neapolitan pizza.
    pub fn is_traditional(&self) -> bool {
        matches!(
            self,
            Topping::Tomato
                | Topping::Mozzarella
                | Topping::Basil
                | Topping::Oregano
                | Topping::Garlic
                | Topping::Anchovy
                | Topping::Olive
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topping::Tomato => "tomato",
            Topping::Mozzarella => "mozzarella",
            Topping::Basil => "basil",
            Topping::Oregano => "oregano",
            Topping::Garlic => "garlic",
            Topping::Anchovy => "anchovy",
            Topping::Olive => "olive",
            Topping::Pepperoni => "pepperoni",
            Topping::Mushroom => "mushroom",
            Topping::Ham => "ham",
            Topping::Onion => "onion",
            Topping::Artichoke => "artichoke",
            Topping::Sausage => "sausage",
            Topping::Pineapple => "pineapple",
        }
    }
}

impl std::fmt::Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
