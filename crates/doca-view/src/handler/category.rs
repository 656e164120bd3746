//! Category expansion.

use tracing::debug;

use super::{IntentContext, IntentHandler};
use crate::state::NavigationState;

/// Handles [`Intent::ToggleCategory`](crate::Intent::ToggleCategory).
///
/// Flips one category independently of the others. Unknown labels are
/// ignored.
pub struct CategoryHandler;

impl IntentHandler<String> for CategoryHandler {
    fn handle(&self, ctx: &IntentContext<'_>, state: &mut NavigationState, label: String) {
        if !ctx.registry.has_category(&label) {
            debug!(category = %label, "ignoring toggle for unknown category");
            return;
        }
        if !state.expanded_categories.remove(&label) {
            state.expanded_categories.insert(label);
        }
    }
}
