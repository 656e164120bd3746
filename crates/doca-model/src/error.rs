//! Error types for blueprint data integrity.

use thiserror::Error;

/// Integrity violations in blueprint or category data.
///
/// These are defects in catalogue data, caught when the catalogue is built.
/// They never describe a runtime condition of a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// A blueprint declares no sections.
    #[error("blueprint '{title}' has no sections")]
    EmptySections { title: String },

    /// A section index does not match its position in the sequence.
    #[error("blueprint '{title}': section at position {position} has index {found}")]
    SectionIndex {
        title: String,
        position: usize,
        found: usize,
    },

    /// A category label appears twice in the index.
    #[error("duplicate category '{label}'")]
    DuplicateCategory { label: String },

    /// A document key appears more than once across the index.
    #[error("document '{key}' is listed more than once")]
    DuplicateDocument { key: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
