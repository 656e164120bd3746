//! Data model for the DOCA blueprint catalogue.
//!
//! A [`Blueprint`] describes the compliance structure of one professional
//! document type: its ordered [`Section`]s, the content it must not
//! contain, and the tone it must be written in. The [`CategoryIndex`]
//! groups document keys for navigation.

pub mod blueprint;
pub mod category;
pub mod error;

pub use blueprint::{Blueprint, Section};
pub use category::CategoryIndex;
pub use error::{ModelError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blueprint_serializes_for_export() {
        let blueprint = Blueprint::new(
            "Memo",
            Some("DOC-MEMO-1".to_string()),
            "Core Professional",
            vec![("Purpose", true, "Why the memo exists.")],
            vec!["Slang".to_string()],
            "Direct",
        )
        .expect("valid blueprint");
        let json = serde_json::to_value(&blueprint).expect("serialize blueprint");
        assert_eq!(json["title"], "Memo");
        assert_eq!(json["sections"][0]["index"], 1);
        assert_eq!(json["forbidden"][0], "Slang");
    }
}
