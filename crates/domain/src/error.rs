//! Domain error types.

use thiserror::Error;

use crate::builder::BuilderError;
use crate::catalog::CatalogError;
use crate::category::ParseCategoryError;
use crate::registry::RegistryError;

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An entity could not be assembled.
    #[error("Builder error: {0}")]
    Builder(#[from] BuilderError),

    /// A template lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An entity could not be registered.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A category name did not match any known variant.
    #[error(transparent)]
    UnknownCategory(#[from] ParseCategoryError),
}

/// Convenience type alias for domain results.
pub type Result<T> = std::result::Result<T, DomainError>;
