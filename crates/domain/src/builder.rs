//! Validating, single-use builder for entities.

use std::collections::HashSet;
use std::sync::Arc;

use common::EntityId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::CategoryFactory;
use crate::entity::Entity;
use crate::part::{Part, PartKey};
use crate::policy::PolicyBundle;

/// Lifecycle of an [`EntityBuilder`].
///
/// ```text
/// Unconfigured ──► Configuring ──► Built
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BuilderState {
    /// No category selected yet; parts cannot be added.
    #[default]
    Unconfigured,

    /// Category selected, parts and details may be set.
    Configuring,

    /// An entity has been produced (terminal state).
    Built,
}

impl BuilderState {
    pub fn can_select_category(&self) -> bool {
        matches!(self, BuilderState::Unconfigured)
    }

    pub fn can_add_part(&self) -> bool {
        matches!(self, BuilderState::Configuring)
    }

    /// Identity and descriptive details may be set until the entity is built.
    pub fn can_describe(&self) -> bool {
        !self.is_terminal()
    }

    pub fn can_build(&self) -> bool {
        !self.is_terminal()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BuilderState::Built)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuilderState::Unconfigured => "Unconfigured",
            BuilderState::Configuring => "Configuring",
            BuilderState::Built => "Built",
        }
    }
}

impl std::fmt::Display for BuilderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised while assembling an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A part was added before any category was selected.
    #[error("Category not selected: select a category before adding parts")]
    CategoryNotSelected,

    /// The category's part rule rejected a discriminator.
    #[error("Invalid discriminator {value} for category {category} (expected {rule})")]
    InvalidDiscriminator {
        value: String,
        category: String,
        rule: &'static str,
    },

    /// `build` was called without a category or an identity.
    #[error("Incomplete configuration: missing {}", missing.join(", "))]
    IncompleteConfiguration { missing: Vec<&'static str> },

    /// Part count outside the category's limits.
    #[error("Out of bounds: {actual} parts, category {category} requires between {min} and {max}")]
    OutOfBounds {
        category: String,
        actual: usize,
        min: usize,
        max: usize,
    },

    /// Two parts share a discriminator.
    #[error("Duplicate discriminator: {value}")]
    DuplicatePart { value: String },

    /// The builder is not in a state that allows the operation.
    #[error("Invalid state transition: cannot {action} from {state} state")]
    InvalidStateTransition {
        state: BuilderState,
        action: &'static str,
    },
}

struct SelectedCategory<K, O> {
    name: String,
    policy: Arc<PolicyBundle<K, O>>,
}

/// Staging object that validates parts against a category's policy bundle
/// and produces an immutable [`Entity`].
///
/// A builder is single use: once [`build`](Self::build) succeeds every
/// further call fails with [`BuilderError::InvalidStateTransition`]. A
/// failed build leaves the builder configurable so the caller can fix it.
pub struct EntityBuilder<K, O, D> {
    state: BuilderState,
    identity: Option<EntityId>,
    category: Option<SelectedCategory<K, O>>,
    parts: Vec<Part<K>>,
    details: D,
}

impl<K, O, D> EntityBuilder<K, O, D>
where
    K: PartKey,
    D: Default,
{
    pub fn new() -> Self {
        Self {
            state: BuilderState::Unconfigured,
            identity: None,
            category: None,
            parts: Vec::new(),
            details: D::default(),
        }
    }
}

impl<K, O, D> Default for EntityBuilder<K, O, D>
where
    K: PartKey,
    D: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, O, D> EntityBuilder<K, O, D>
where
    K: PartKey,
{
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Name of the selected category, if any.
    pub fn category(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Parts accepted so far, in call order.
    pub fn parts(&self) -> &[Part<K>] {
        &self.parts
    }

    /// Selects the category whose bundle governs every later operation.
    pub fn select_category<F>(&mut self, factory: &F) -> Result<&mut Self, BuilderError>
    where
        F: CategoryFactory<Key = K, Operations = O> + ?Sized,
    {
        if !self.state.can_select_category() {
            return Err(BuilderError::InvalidStateTransition {
                state: self.state,
                action: "select category",
            });
        }

        let name = factory.name().to_string();
        tracing::debug!(category = %name, "category selected");
        self.category = Some(SelectedCategory {
            name,
            policy: Arc::new(factory.create()),
        });
        self.state = BuilderState::Configuring;
        Ok(self)
    }

    pub fn set_identity(&mut self, id: impl Into<EntityId>) -> Result<&mut Self, BuilderError> {
        self.ensure_describable("set identity")?;
        self.identity = Some(id.into());
        Ok(self)
    }

    /// Updates the descriptive details (coach, crust, ...).
    pub fn describe(&mut self, update: impl FnOnce(&mut D)) -> Result<&mut Self, BuilderError> {
        self.ensure_describable("describe")?;
        update(&mut self.details);
        Ok(self)
    }

    /// Validates `key` against the category rule and appends the part.
    ///
    /// On failure the builder is left unchanged.
    pub fn add_part(
        &mut self,
        label: impl Into<String>,
        key: K,
    ) -> Result<&mut Self, BuilderError> {
        let part = Part::new(label, key);
        self.check_part(&part)?;
        tracing::debug!(part = %part, "part accepted");
        self.parts.push(part);
        Ok(self)
    }

    /// Appends several parts; if any is rejected none are added.
    pub fn add_parts(
        &mut self,
        parts: impl IntoIterator<Item = Part<K>>,
    ) -> Result<&mut Self, BuilderError> {
        let parts: Vec<_> = parts.into_iter().collect();
        for part in &parts {
            self.check_part(part)?;
        }
        tracing::debug!(count = parts.len(), "parts accepted");
        self.parts.extend(parts);
        Ok(self)
    }

    /// Validates the whole configuration and produces the entity.
    #[tracing::instrument(skip(self), fields(category = self.category(), parts = self.parts.len()))]
    pub fn build(&mut self) -> Result<Entity<K, O, D>, BuilderError>
    where
        D: Default,
    {
        match self.validate() {
            Ok(()) => {}
            Err(err) => {
                metrics::counter!("entity_build_failures_total", "reason" => failure_reason(&err))
                    .increment(1);
                tracing::debug!(error = %err, "build rejected");
                return Err(err);
            }
        }

        let (Some(identity), Some(category)) = (self.identity.take(), self.category.take())
        else {
            return Err(BuilderError::IncompleteConfiguration {
                missing: self.missing_fields(),
            });
        };

        self.state = BuilderState::Built;
        let parts = std::mem::take(&mut self.parts);
        let details = std::mem::take(&mut self.details);

        metrics::counter!("entities_built_total", "category" => category.name.clone())
            .increment(1);
        tracing::info!(identity = %identity, category = %category.name, "entity built");

        Ok(Entity::new(
            identity,
            category.name,
            category.policy,
            parts,
            details,
        ))
    }

    fn validate(&self) -> Result<(), BuilderError> {
        if !self.state.can_build() {
            return Err(BuilderError::InvalidStateTransition {
                state: self.state,
                action: "build",
            });
        }

        let missing = self.missing_fields();
        let Some(category) = self.category.as_ref().filter(|_| missing.is_empty()) else {
            return Err(BuilderError::IncompleteConfiguration { missing });
        };

        let limits = category.policy.limits();
        if !limits.contains(self.parts.len()) {
            return Err(BuilderError::OutOfBounds {
                category: category.name.clone(),
                actual: self.parts.len(),
                min: limits.min,
                max: limits.max,
            });
        }

        let mut seen = HashSet::with_capacity(self.parts.len());
        if let Some(duplicate) = self.parts.iter().find(|part| !seen.insert(part.key())) {
            return Err(BuilderError::DuplicatePart {
                value: duplicate.key().to_string(),
            });
        }

        Ok(())
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.category.is_none() {
            missing.push("category");
        }
        if self.identity.is_none() {
            missing.push("identity");
        }
        missing
    }

    fn check_part(&self, part: &Part<K>) -> Result<(), BuilderError> {
        if self.state == BuilderState::Unconfigured {
            return Err(BuilderError::CategoryNotSelected);
        }
        if !self.state.can_add_part() {
            return Err(BuilderError::InvalidStateTransition {
                state: self.state,
                action: "add part",
            });
        }

        let Some(category) = self.category.as_ref() else {
            return Err(BuilderError::CategoryNotSelected);
        };

        if !category.policy.accepts(part.key()) {
            return Err(BuilderError::InvalidDiscriminator {
                value: part.key().to_string(),
                category: category.name.clone(),
                rule: category.policy.rule().description(),
            });
        }
        Ok(())
    }

    fn ensure_describable(&self, action: &'static str) -> Result<(), BuilderError> {
        if self.state.can_describe() {
            Ok(())
        } else {
            Err(BuilderError::InvalidStateTransition {
                state: self.state,
                action,
            })
        }
    }
}

fn failure_reason(err: &BuilderError) -> &'static str {
    match err {
        BuilderError::CategoryNotSelected => "category_not_selected",
        BuilderError::InvalidDiscriminator { .. } => "invalid_discriminator",
        BuilderError::IncompleteConfiguration { .. } => "incomplete_configuration",
        BuilderError::OutOfBounds { .. } => "out_of_bounds",
        BuilderError::DuplicatePart { .. } => "duplicate_part",
        BuilderError::InvalidStateTransition { .. } => "invalid_state_transition",
    }
}
