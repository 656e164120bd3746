//! View projection.
//!
//! [`project`] maps (registry, state) to a [`ViewTree`]: plain nested
//! records of panels, lists and labeled fields. It has no side effects, so
//! a front-end can re-project after every intent.

mod detail;
mod landing;
mod missing;
mod sidebar;

use serde::Serialize;

use doca_catalogue::{BlueprintRegistry, Resolution};

use crate::state::{NavigationState, ViewportMode};

pub use detail::{
    ActionKind, ActionView, DetailHeader, DetailView, ListPanel, SectionRow, StructurePanel,
    TextPanel, ValidationPanel,
};
pub use landing::{FeatureCallout, LandingView};
pub use missing::{MISSING_CODE, MissingView};
pub use sidebar::{CategoryNode, DocumentEntry, SidebarView};

/// Complete renderable view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTree {
    pub layout: LayoutView,
    pub sidebar: SidebarView,
    pub main: MainPanel,
}

/// Responsive layout flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutView {
    pub viewport_mode: ViewportMode,
    /// Whether the sidebar is on screen. Always true in wide mode.
    pub sidebar_visible: bool,
    /// Dimming overlay behind an open sidebar in narrow mode.
    pub overlay_visible: bool,
}

/// Content of the main panel. Exactly one variant is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum MainPanel {
    /// No document selected.
    Landing(LandingView),
    /// The selected document's blueprint.
    Detail(DetailView),
    /// A document is selected but has no blueprint.
    Missing(MissingView),
}

impl MainPanel {
    pub fn is_landing(&self) -> bool {
        matches!(self, Self::Landing(_))
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// Project the registry and navigation state into a view tree.
pub fn project(registry: &BlueprintRegistry, state: &NavigationState) -> ViewTree {
    let sidebar_visible = state.sidebar_shown();
    let layout = LayoutView {
        viewport_mode: state.viewport_mode(),
        sidebar_visible,
        overlay_visible: state.viewport_mode().is_narrow() && sidebar_visible,
    };
    let main = match state.active_document() {
        None => MainPanel::Landing(landing::project(registry)),
        Some(key) => match registry.resolve(key) {
            Resolution::Exact(blueprint) => {
                MainPanel::Detail(detail::project(key, blueprint, false, state))
            }
            Resolution::Fallback { blueprint, .. } => {
                MainPanel::Detail(detail::project(key, blueprint, true, state))
            }
            Resolution::Missing => MainPanel::Missing(missing::project(key)),
        },
    };
    ViewTree {
        layout,
        sidebar: sidebar::project(registry, state),
        main,
    }
}
