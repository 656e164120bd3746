//! Blueprint detail panel.

use serde::Serialize;

use doca_model::Blueprint;

use crate::doc_id;
use crate::state::NavigationState;

/// Full compliance blueprint of the selected document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Key the user selected.
    pub requested_key: String,
    /// True when the blueprint came from the registry's fallback tier.
    pub fallback: bool,
    pub header: DetailHeader,
    pub structure: StructurePanel,
    pub tone: TextPanel,
    pub violations: ListPanel,
    pub validation: ValidationPanel,
    pub actions: Vec<ActionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailHeader {
    pub title: String,
    pub display_id: String,
    /// The display id was synthesized rather than stored in the catalogue.
    pub id_synthesized: bool,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructurePanel {
    pub heading: String,
    pub flow: String,
    /// Sections in blueprint order, numbered from 1.
    pub sections: Vec<SectionRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    pub index: usize,
    /// Zero-padded display number, e.g. `01`.
    pub number: String,
    pub title: String,
    pub required: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPanel {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPanel {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationPanel {
    pub heading: String,
    pub level: String,
    pub note: String,
}

/// Actions offered on a blueprint. The engine only describes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ExportJson,
    InitializeDocument,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::ExportJson => "Export JSON",
            Self::InitializeDocument => "Initialize Doc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionView {
    pub action: ActionKind,
    pub label: String,
}

pub(super) fn project(
    key: &str,
    blueprint: &Blueprint,
    fallback: bool,
    state: &NavigationState,
) -> DetailView {
    let (display_id, id_synthesized) = match &blueprint.id {
        Some(id) => (id.clone(), false),
        None => (
            state
                .synthesized_id()
                .map_or_else(|| doc_id::stable_id(key), str::to_string),
            true,
        ),
    };
    let sections = blueprint
        .sections
        .iter()
        .map(|section| SectionRow {
            index: section.index,
            number: section.number(),
            title: section.title.clone(),
            required: section.required,
            description: section.description.clone(),
        })
        .collect();
    DetailView {
        requested_key: key.to_string(),
        fallback,
        header: DetailHeader {
            title: blueprint.title.clone(),
            display_id,
            id_synthesized,
            category: blueprint.category.clone(),
        },
        structure: StructurePanel {
            heading: "Structural Sequence".to_string(),
            flow: "LINEAR".to_string(),
            sections,
        },
        tone: TextPanel {
            heading: "Tone Calibration".to_string(),
            body: blueprint.tone.clone(),
        },
        violations: ListPanel {
            heading: "Compliance Violations".to_string(),
            items: blueprint.forbidden.clone(),
        },
        validation: ValidationPanel {
            heading: "Validation Level".to_string(),
            level: "Strict".to_string(),
            note: "Any deviation from the required structure will be flagged during export."
                .to_string(),
        },
        actions: [ActionKind::ExportJson, ActionKind::InitializeDocument]
            .into_iter()
            .map(|action| ActionView {
                action,
                label: action.label().to_string(),
            })
            .collect(),
    }
}
