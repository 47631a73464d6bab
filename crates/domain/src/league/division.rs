//! Divisions and their match rules.

use std::str::FromStr;

use common::Money;
use serde::{Deserialize, Serialize};

use crate::category::{CategoryFactory, ParseCategoryError, normalize_name};
use crate::policy::{PartLimits, PartRule, PolicyBundle, Pricing};

use super::JerseyNumber;

/// Match timing for a division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub halves: u8,
    pub half_minutes: u32,
}

impl MatchRules {
    /// Regulation playing time in minutes.
    pub fn duration_minutes(&self) -> u32 {
        u32::from(self.halves) * self.half_minutes
    }
}

/// Competition division a team registers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    Masculina,
    Femenina,
    Sub17,
}

impl Division {
    const ALL: [Division; 3] = [Division::Masculina, Division::Femenina, Division::Sub17];

    pub fn all() -> &'static [Division] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Masculina => "Masculina",
            Division::Femenina => "Femenina",
            Division::Sub17 => "Sub-17",
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Division {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Self::ALL
            .into_iter()
            .find(|d| normalize_name(d.as_str()) == wanted)
            .ok_or_else(|| ParseCategoryError {
                kind: "division",
                input: s.to_string(),
            })
    }
}

fn senior_number(n: &JerseyNumber) -> bool {
    (1..=99).contains(&n.get())
}

fn youth_number(n: &JerseyNumber) -> bool {
    (1..=50).contains(&n.get())
}

impl CategoryFactory for Division {
    type Key = JerseyNumber;
    type Operations = MatchRules;

    fn name(&self) -> &str {
        self.as_str()
    }

    fn create(&self) -> PolicyBundle<JerseyNumber, MatchRules> {
        match self {
            Division::Masculina => PolicyBundle::new(
                Pricing::per_part(Money::from_dollars(500), Money::from_dollars(20)),
                PartLimits::new(11, 23),
                PartRule::new("jersey number between 1 and 99", senior_number),
                MatchRules {
                    halves: 2,
                    half_minutes: 45,
                },
            ),
            Division::Femenina => PolicyBundle::new(
                Pricing::per_part(Money::from_dollars(450), Money::from_dollars(20)),
                PartLimits::new(11, 23),
                PartRule::new("jersey number between 1 and 99", senior_number),
                MatchRules {
                    halves: 2,
                    half_minutes: 45,
                },
            ),
            Division::Sub17 => PolicyBundle::new(
                Pricing::per_part(Money::from_dollars(200), Money::from_dollars(10)),
                PartLimits::new(7, 20),
                PartRule::new("jersey number between 1 and 50", youth_number),
                MatchRules {
                    halves: 2,
                    half_minutes: 35,
                },
            ),
        }
    }
}
