//! Parts: the labelled, discriminated pieces an entity is assembled from.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Bound for part discriminators (jersey numbers, toppings).
///
/// Discriminators must be unique within a single entity.
pub trait PartKey: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

impl<T> PartKey for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {}

/// A single labelled part of an entity, such as a player or a topping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Part<K> {
    label: String,
    key: K,
}

impl<K: PartKey> Part<K> {
    pub fn new(label: impl Into<String>, key: K) -> Self {
        Self {
            label: label.into(),
            key,
        }
    }

    /// Human readable label (player name, topping description).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The discriminator that identifies this part within its entity.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns a copy of this part that owns fresh storage for its label.
    pub fn duplicate(&self) -> Self {
        Self {
            label: self.label.as_str().to_owned(),
            key: self.key.clone(),
        }
    }

    /// Renames the part in place.
    pub fn relabel(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Splits the part into its label and discriminator.
    pub fn into_inner(self) -> (String, K) {
        (self.label, self.key)
    }
}

impl<K: Display> Display for Part<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.key)
    }
}
