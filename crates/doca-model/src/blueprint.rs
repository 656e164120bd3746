//! Blueprint and section types.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One heading in a blueprint's structural sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based position within the owning blueprint.
    pub index: usize,
    /// Section heading.
    pub title: String,
    /// Whether the section must be present in a conforming document.
    pub required: bool,
    /// One-sentence explanation of the expected content.
    pub description: String,
}

impl Section {
    /// Two-digit display number, e.g. `01`.
    pub fn number(&self) -> String {
        format!("{:02}", self.index)
    }
}

/// Compliance rules for one document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    /// Display name.
    pub title: String,
    /// Catalogue code such as `DOC-WP-101`, when one is assigned.
    pub id: Option<String>,
    /// Category label the blueprint is listed under.
    pub category: String,
    /// Ordered structural sequence. Never empty.
    pub sections: Vec<Section>,
    /// Content patterns a conforming document must avoid.
    pub forbidden: Vec<String>,
    /// Required register and voice.
    pub tone: String,
}

impl Blueprint {
    /// Build a blueprint, numbering sections by their position.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptySections`] when `sections` yields nothing.
    pub fn new<S, T, D>(
        title: impl Into<String>,
        id: Option<String>,
        category: impl Into<String>,
        sections: S,
        forbidden: Vec<String>,
        tone: impl Into<String>,
    ) -> Result<Self>
    where
        S: IntoIterator<Item = (T, bool, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        let sections = sections
            .into_iter()
            .enumerate()
            .map(|(position, (title, required, description))| Section {
                index: position + 1,
                title: title.into(),
                required,
                description: description.into(),
            })
            .collect();
        let blueprint = Self {
            title: title.into(),
            id,
            category: category.into(),
            sections,
            forbidden,
            tone: tone.into(),
        };
        blueprint.validate()?;
        Ok(blueprint)
    }

    /// Check the section invariants: non-empty, indices contiguous from 1.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.sections.is_empty() {
            return Err(ModelError::EmptySections {
                title: self.title.clone(),
            });
        }
        for (position, section) in self.sections.iter().enumerate() {
            if section.index != position + 1 {
                return Err(ModelError::SectionIndex {
                    title: self.title.clone(),
                    position: position + 1,
                    found: section.index,
                });
            }
        }
        Ok(())
    }

    /// Number of sections marked as required.
    pub fn required_count(&self) -> usize {
        self.sections.iter().filter(|s| s.required).count()
    }

    /// Section titles in document order.
    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }
}
