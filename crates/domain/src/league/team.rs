//! Teams and their builder.

use common::{EntityId, Money};
use serde::{Deserialize, Serialize};

use crate::builder::{BuilderError, BuilderState, EntityBuilder};
use crate::catalog::Template;
use crate::category::CategoryFactory;
use crate::entity::Entity;
use crate::part::Part;
use crate::registry::Registry;

use super::MatchRules;

/// Shirt number worn by a player; unique within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JerseyNumber(u8);

impl JerseyNumber {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for JerseyNumber {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

/// Descriptive team fields; none of them are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDetails {
    pub coach: Option<String>,
    pub captain: Option<String>,
    pub color: Option<String>,
}

pub type Player = Part<JerseyNumber>;

/// A registered-ready team.
pub type Team = Entity<JerseyNumber, MatchRules, TeamDetails>;

/// Registry of teams for one season.
pub type League = Registry<Team>;

impl Team {
    /// Registration fee owed by the team.
    pub fn registration_fee(&self) -> Money {
        self.price()
    }

    pub fn match_duration_minutes(&self) -> u32 {
        self.operations().duration_minutes()
    }

    pub fn player(&self, number: u8) -> Option<&Player> {
        self.part(&JerseyNumber::new(number))
    }

    pub fn coach(&self) -> Option<&str> {
        self.details().coach.as_deref()
    }

    pub fn captain(&self) -> Option<&str> {
        self.details().captain.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.details().color.as_deref()
    }
}

/// Builder facade for [`Team`].
#[derive(Default)]
pub struct TeamBuilder {
    inner: EntityBuilder<JerseyNumber, MatchRules, TeamDetails>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BuilderState {
        self.inner.state()
    }

    /// Selects the division; any factory yielding jersey-number rules works.
    pub fn division<F>(&mut self, division: &F) -> Result<&mut Self, BuilderError>
    where
        F: CategoryFactory<Key = JerseyNumber, Operations = MatchRules> + ?Sized,
    {
        self.inner.select_category(division)?;
        Ok(self)
    }

    pub fn name(&mut self, name: impl Into<EntityId>) -> Result<&mut Self, BuilderError> {
        self.inner.set_identity(name)?;
        Ok(self)
    }

    pub fn coach(&mut self, coach: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let coach = coach.into();
        self.inner.describe(|d| d.coach = Some(coach))?;
        Ok(self)
    }

    pub fn captain(&mut self, captain: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let captain = captain.into();
        self.inner.describe(|d| d.captain = Some(captain))?;
        Ok(self)
    }

    pub fn color(&mut self, color: impl Into<String>) -> Result<&mut Self, BuilderError> {
        let color = color.into();
        self.inner.describe(|d| d.color = Some(color))?;
        Ok(self)
    }

    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        number: u8,
    ) -> Result<&mut Self, BuilderError> {
        self.inner.add_part(name, JerseyNumber::new(number))?;
        Ok(self)
    }

    /// Adds every player of a lineup template, or none if one is rejected.
    pub fn add_lineup(
        &mut self,
        lineup: Template<JerseyNumber>,
    ) -> Result<&mut Self, BuilderError> {
        self.inner.add_parts(lineup)?;
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Team, BuilderError> {
        self.inner.build()
    }
}
