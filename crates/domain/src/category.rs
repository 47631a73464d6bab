//! Category factories: named providers of policy bundles.

use std::fmt::Debug;

use thiserror::Error;

use crate::part::PartKey;
use crate::policy::PolicyBundle;

/// Provider of the policy bundle for one category (division, style).
///
/// Implementations must be pure: every call to [`create`](Self::create)
/// returns a fresh bundle with the same rules. New categories are added by
/// implementing this trait; builders and entities are generic over it.
pub trait CategoryFactory {
    /// Discriminator type of the parts this category validates.
    type Key: PartKey;

    /// Operational parameters carried by the bundle.
    type Operations: Clone + Debug + Send + Sync + 'static;

    /// Canonical display name of the category.
    fn name(&self) -> &str;

    /// Builds the category's policy bundle.
    fn create(&self) -> PolicyBundle<Self::Key, Self::Operations>;
}

/// A category name that matches none of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {input}")]
pub struct ParseCategoryError {
    pub kind: &'static str,
    pub input: String,
}

/// Folds a category name for lenient matching: lowercase, ASCII only,
/// without spaces, dashes or underscores.
pub(crate) fn normalize_name(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .map(|c| match c {
            'á' | 'Á' => 'a',
            'é' | 'É' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'Ó' => 'o',
            'ú' | 'Ú' | 'ü' | 'Ü' => 'u',
            'ñ' | 'Ñ' => 'n',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
