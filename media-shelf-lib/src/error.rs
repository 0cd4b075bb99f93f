use thiserror::Error;

use media_shelf_catalog::ValidationError;

/// Errors returned by catalog operations.
///
/// None of these leave the working set modified.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A field failed its rule on create or update
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An item with this code is already in the catalog
    #[error("an item with code '{0}' already exists")]
    DuplicateCode(String),

    /// No item with this code
    #[error("no item with code '{0}'")]
    NotFound(String),
}

impl CatalogError {
    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }
}
