//! Sidebar visibility and viewport changes.

use tracing::debug;

use super::{IntentContext, IntentHandler};
use crate::state::{NavigationState, ViewportMode};

/// Handles [`Intent::ToggleSidebar`](crate::Intent::ToggleSidebar).
///
/// Only the narrow layout has a hideable sidebar; in wide mode the intent
/// is accepted and does nothing.
pub struct SidebarHandler;

impl IntentHandler<()> for SidebarHandler {
    fn handle(&self, _ctx: &IntentContext<'_>, state: &mut NavigationState, _payload: ()) {
        if state.viewport_mode.is_narrow() {
            state.sidebar_visible = !state.sidebar_visible;
        }
    }
}

/// Handles [`Intent::ViewportResize`](crate::Intent::ViewportResize).
///
/// Every resize resets sidebar visibility from the mode: shown when wide,
/// hidden when narrow. Prior toggles never survive a resize, so returning to
/// wide mode cannot leave the sidebar hidden.
pub struct ViewportHandler;

impl IntentHandler<u32> for ViewportHandler {
    fn handle(&self, _ctx: &IntentContext<'_>, state: &mut NavigationState, width: u32) {
        let mode = ViewportMode::from_width(width);
        if mode != state.viewport_mode {
            debug!(width, mode = mode.as_str(), "viewport crossed breakpoint");
        }
        state.viewport_width = width;
        state.viewport_mode = mode;
        state.sidebar_visible = mode.is_wide();
    }
}
