//! Error types for catalogue loading.

use doca_model::ModelError;
use thiserror::Error;

/// Errors raised while building a [`BlueprintRegistry`](crate::BlueprintRegistry).
///
/// All of these indicate defective catalogue data. The embedded catalogue
/// is checked by the test suite, so a release build never reports them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogueError {
    /// Catalogue text is not valid TOML or does not match the schema.
    #[error("failed to parse catalogue: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    /// Blueprint or category data breaks a model invariant.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A blueprint names a category that is not in the index.
    #[error("blueprint '{key}' names unknown category '{category}'")]
    UnknownCategory { key: String, category: String },

    /// A blueprint is not listed under the category it names.
    #[error("blueprint '{key}' is not listed under category '{category}'")]
    Unlisted { key: String, category: String },

    /// Two blueprints share a stored catalogue id.
    #[error("catalogue id '{id}' is used by both '{first}' and '{second}'")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },

    /// The configured fallback key has no blueprint.
    #[error("fallback blueprint '{key}' is not defined")]
    FallbackMissing { key: String },
}

/// Result type for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;
