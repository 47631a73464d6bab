//! Pizza styles and their bake profiles.

use std::str::FromStr;

use common::{Money, TaxRate};
use serde::{Deserialize, Serialize};

use crate::category::{CategoryFactory, ParseCategoryError, normalize_name};
use crate::policy::{PartLimits, PartRule, PolicyBundle, Pricing};

use super::Topping;

/// Oven parameters for a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BakeProfile {
    pub seconds: u32,
    pub temperature_celsius: u32,
}

impl std::fmt::Display for BakeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.seconds % 60 == 0 {
            write!(f, "{} min at {} °C", self.seconds / 60, self.temperature_celsius)
        } else {
            write!(f, "{} s at {} °C", self.seconds, self.temperature_celsius)
        }
    }
}

/// Pizza style; each style prices, limits and bakes its pizzas differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    NewYork,
    Napolitana,
}

impl Style {
    const ALL: [Style; 2] = [Style::NewYork, Style::Napolitana];

    pub fn all() -> &'static [Style] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::NewYork => "New York",
            Style::Napolitana => "Napolitana",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Style {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|style| normalize_name(style.as_str()) == wanted)
            .ok_or_else(|| ParseCategoryError {
                kind: "style",
                input: s.to_string(),
            })
    }
}

fn traditional(topping: &Topping) -> bool {
    topping.is_traditional()
}

impl CategoryFactory for Style {
    type Key = Topping;
    type Operations = BakeProfile;

    fn name(&self) -> &str {
        self.as_str()
    }

    fn create(&self) -> PolicyBundle<Topping, BakeProfile> {
        match self {
            Style::NewYork => PolicyBundle::new(
                Pricing::per_part(Money::from_dollars(10), Money::from_dollars(1))
                    .with_included_parts(1)
                    .with_tax_rate(TaxRate::from_percent(10)),
                PartLimits::new(1, 6),
                PartRule::any(),
                BakeProfile {
                    seconds: 12 * 60,
                    temperature_celsius: 290,
                },
            ),
            Style::Napolitana => PolicyBundle::new(
                Pricing::per_part(Money::from_dollars(12), Money::from_cents(150))
                    .with_included_parts(2)
                    .with_tax_rate(TaxRate::from_percent(8)),
                PartLimits::new(1, 4),
                PartRule::new("traditional topping", traditional),
                BakeProfile {
                    seconds: 90,
                    temperature_celsius: 485,
                },
            ),
        }
    }
}
