//! Sidebar navigation tree.

use serde::Serialize;

use doca_catalogue::BlueprintRegistry;

use crate::state::NavigationState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub title: String,
    pub subtitle: String,
    /// Documents listed across all categories.
    pub total_documents: usize,
    pub visible: bool,
    /// Categories in catalogue order.
    pub categories: Vec<CategoryNode>,
}

impl SidebarView {
    /// Keys marked active. Holds at most one element.
    pub fn active_keys(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.documents.iter())
            .filter(|d| d.active)
            .map(|d| d.key.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    pub label: String,
    pub expanded: bool,
    pub document_count: usize,
    /// Entries in catalogue order; empty while collapsed.
    pub documents: Vec<DocumentEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentEntry {
    pub key: String,
    /// The currently selected document.
    pub active: bool,
    /// Whether the document has a blueprint of its own.
    pub defined: bool,
}

pub(super) fn project(registry: &BlueprintRegistry, state: &NavigationState) -> SidebarView {
    let active = state.active_document();
    let categories = registry
        .categories()
        .map(|(label, keys)| {
            let expanded = state.is_expanded(label);
            let documents = if expanded {
                keys.iter()
                    .map(|key| DocumentEntry {
                        key: key.clone(),
                        active: active == Some(key.as_str()),
                        defined: registry.is_defined(key),
                    })
                    .collect()
            } else {
                Vec::new()
            };
            CategoryNode {
                label: label.to_string(),
                expanded,
                document_count: keys.len(),
                documents,
            }
        })
        .collect();
    SidebarView {
        title: "DOCA".to_string(),
        subtitle: "Document Oriented Compliance Architecture".to_string(),
        total_documents: registry.total_count(),
        visible: state.sidebar_shown(),
        categories,
    }
}
