//! Template catalog: canned parts and part sequences handed out as copies.

use std::collections::HashMap;

use thiserror::Error;

use crate::part::{Part, PartKey};

/// Errors raised by [`TemplateCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Template not found: {key}")]
    UnknownTemplate { key: String },
}

/// A reusable part or ordered sequence of parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template<K> {
    Single(Part<K>),
    Sequence(Vec<Part<K>>),
}

impl<K: PartKey> Template<K> {
    /// Deep copy: every part in the result owns its own storage.
    pub fn duplicate(&self) -> Self {
        match self {
            Template::Single(part) => Template::Single(part.duplicate()),
            Template::Sequence(parts) => {
                Template::Sequence(parts.iter().map(Part::duplicate).collect())
            }
        }
    }

    pub fn parts(&self) -> &[Part<K>] {
        match self {
            Template::Single(part) => std::slice::from_ref(part),
            Template::Sequence(parts) => parts,
        }
    }

    pub fn parts_mut(&mut self) -> &mut [Part<K>] {
        match self {
            Template::Single(part) => std::slice::from_mut(part),
            Template::Sequence(parts) => parts,
        }
    }

    pub fn len(&self) -> usize {
        self.parts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts().is_empty()
    }

    /// Consumes the template, yielding its parts in order.
    pub fn into_parts(self) -> Vec<Part<K>> {
        match self {
            Template::Single(part) => vec![part],
            Template::Sequence(parts) => parts,
        }
    }
}

impl<K> From<Part<K>> for Template<K> {
    fn from(part: Part<K>) -> Self {
        Template::Single(part)
    }
}

impl<K> From<Vec<Part<K>>> for Template<K> {
    fn from(parts: Vec<Part<K>>) -> Self {
        Template::Sequence(parts)
    }
}

impl<K: PartKey> IntoIterator for Template<K> {
    type Item = Part<K>;
    type IntoIter = std::vec::IntoIter<Part<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_parts().into_iter()
    }
}

/// Keyed store of templates.
///
/// The catalog owns the canonical copy of every template;
/// [`retrieve`](Self::retrieve) always returns an independent deep copy.
#[derive(Debug, Clone)]
pub struct TemplateCatalog<K> {
    templates: HashMap<String, Template<K>>,
}

impl<K> Default for TemplateCatalog<K> {
    fn default() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }
}

impl<K: PartKey> TemplateCatalog<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `template` under `key`, returning the template it replaced.
    pub fn store(
        &mut self,
        key: impl Into<String>,
        template: impl Into<Template<K>>,
    ) -> Option<Template<K>> {
        self.templates.insert(key.into(), template.into())
    }

    /// Returns a deep copy of the template stored under `key`.
    pub fn retrieve(&self, key: &str) -> Result<Template<K>, CatalogError> {
        let template = self
            .templates
            .get(key)
            .ok_or_else(|| CatalogError::UnknownTemplate {
                key: key.to_string(),
            })?;
        metrics::counter!("catalog_retrievals_total").increment(1);
        tracing::debug!(key, parts = template.len(), "template retrieved");
        Ok(template.duplicate())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Template keys in lexical order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
