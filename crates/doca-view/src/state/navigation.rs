//! Navigation state.
//!
//! One instance per session, owned by the
//! [`InteractionController`](crate::InteractionController). Every change goes
//! through [`NavigationState::apply`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use doca_catalogue::BlueprintRegistry;

use super::settings::NavigationSettings;
use crate::handler::{self, IntentContext};
use crate::message::Intent;

/// Viewport width below which the narrow layout applies.
pub const BREAKPOINT: u32 = 768;

// =============================================================================
// VIEWPORT MODE
// =============================================================================

/// Layout regime derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    /// Width below [`BREAKPOINT`]: the sidebar is a toggleable overlay.
    Narrow,
    /// Width at or above [`BREAKPOINT`]: the sidebar is always shown.
    Wide,
}

impl ViewportMode {
    pub fn from_width(width: u32) -> Self {
        if width < BREAKPOINT {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }

    pub fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

// =============================================================================
// NAVIGATION STATE
// =============================================================================

/// Selection and layout state of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub(crate) active_document: Option<String>,
    pub(crate) expanded_categories: BTreeSet<String>,
    pub(crate) sidebar_visible: bool,
    pub(crate) viewport_mode: ViewportMode,
    pub(crate) viewport_width: u32,
    /// Display id drawn for the active document when its blueprint has none.
    pub(crate) synthesized_id: Option<String>,
}

impl NavigationState {
    /// Startup state: nothing selected, only the default category expanded,
    /// sidebar shown iff the initial viewport is wide.
    pub fn initial(registry: &BlueprintRegistry, settings: &NavigationSettings) -> Self {
        let mut expanded_categories = BTreeSet::new();
        if let Some(label) = &settings.default_open_category {
            if registry.has_category(label) {
                expanded_categories.insert(label.clone());
            } else {
                debug!(category = %label, "default-open category not in catalogue");
            }
        }
        let viewport_mode = ViewportMode::from_width(settings.initial_width);
        Self {
            active_document: None,
            expanded_categories,
            sidebar_visible: viewport_mode.is_wide(),
            viewport_mode,
            viewport_width: settings.initial_width,
            synthesized_id: None,
        }
    }

    /// The state that results from `intent`.
    ///
    /// The receiver is left untouched; the transition either applies in full
    /// in the returned value or not at all.
    #[must_use]
    pub fn apply(&self, intent: Intent, ctx: &IntentContext<'_>) -> Self {
        let mut next = self.clone();
        handler::dispatch(ctx, &mut next, intent);
        next
    }

    /// Selected document key, `None` on the landing view.
    pub fn active_document(&self) -> Option<&str> {
        self.active_document.as_deref()
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded_categories.contains(label)
    }

    /// Expanded category labels, in no particular presentation order.
    pub fn expanded_categories(&self) -> impl Iterator<Item = &str> {
        self.expanded_categories.iter().map(String::as_str)
    }

    /// The stored sidebar flag. Only meaningful in narrow mode.
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    /// Whether the sidebar is on screen: always in wide mode.
    pub fn sidebar_shown(&self) -> bool {
        self.viewport_mode.is_wide() || self.sidebar_visible
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport_mode
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn synthesized_id(&self) -> Option<&str> {
        self.synthesized_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_splits_modes() {
        assert_eq!(ViewportMode::from_width(0), ViewportMode::Narrow);
        assert_eq!(ViewportMode::from_width(767), ViewportMode::Narrow);
        assert_eq!(ViewportMode::from_width(768), ViewportMode::Wide);
        assert_eq!(ViewportMode::from_width(1920), ViewportMode::Wide);
    }

    #[test]
    fn initial_state_opens_default_category() {
        let registry = BlueprintRegistry::load_default().unwrap();
        let state = NavigationState::initial(&registry, &NavigationSettings::default());
        assert_eq!(state.active_document(), None);
        assert!(state.is_expanded("Core Professional"));
        assert_eq!(state.expanded_categories().count(), 1);
        assert_eq!(state.viewport_mode(), ViewportMode::Wide);
        assert!(state.sidebar_visible());
    }

    #[test]
    fn initial_narrow_viewport_hides_sidebar() {
        let registry = BlueprintRegistry::load_default().unwrap();
        let settings = NavigationSettings {
            default_open_category: Some("Nowhere".to_string()),
            initial_width: 400,
        };
        let state = NavigationState::initial(&registry, &settings);
        assert_eq!(state.viewport_mode(), ViewportMode::Narrow);
        assert!(!state.sidebar_visible());
        assert!(!state.sidebar_shown());
        assert_eq!(state.expanded_categories().count(), 0);
    }
}
