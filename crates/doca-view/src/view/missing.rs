//! Placeholder for documents without a blueprint.

use serde::Serialize;

/// Diagnostic code carried by the missing placeholder.
pub const MISSING_CODE: &str = "BLUEPRINT_MISSING";

/// Selected document has no blueprint. Not an error: the catalogue lists
/// documents whose blueprint is not written yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingView {
    /// The key that was selected.
    pub label: String,
    pub message: String,
    /// Always [`MISSING_CODE`].
    pub code: String,
}

pub(super) fn project(label: &str) -> MissingView {
    MissingView {
        label: label.to_string(),
        message: "Blueprint definition not found in local schema.".to_string(),
        code: MISSING_CODE.to_string(),
    }
}
