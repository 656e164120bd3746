//! Landing panel shown before any document is selected.

use serde::Serialize;

use doca_catalogue::BlueprintRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingView {
    pub title: String,
    pub description: String,
    pub features: Vec<FeatureCallout>,
    /// Number of document types in the catalogue.
    pub document_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCallout {
    pub title: String,
    pub description: String,
}

const FEATURES: [(&str, &str); 3] = [
    (
        "Structural Sequence",
        "Required and optional sections in the order a conforming document presents them.",
    ),
    (
        "Compliance Violations",
        "Content patterns that fail review for the selected document type.",
    ),
    (
        "Tone Calibration",
        "The register and voice each document type must be written in.",
    ),
];

pub(super) fn project(registry: &BlueprintRegistry) -> LandingView {
    LandingView {
        title: "Document Oriented Compliance Architecture".to_string(),
        description: "Select a document type from the catalogue to view its compliance blueprint."
            .to_string(),
        features: FEATURES
            .iter()
            .map(|(title, description)| FeatureCallout {
                title: (*title).to_string(),
                description: (*description).to_string(),
            })
            .collect(),
        document_count: registry.total_count(),
    }
}
