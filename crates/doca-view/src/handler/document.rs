//! Document selection.

use tracing::debug;

use super::{IntentContext, IntentHandler};
use crate::state::NavigationState;

/// Handles [`Intent::SelectDocument`](crate::Intent::SelectDocument).
///
/// Any key is accepted, including keys without a blueprint; the projector
/// turns those into the missing placeholder. In narrow mode the sidebar
/// closes so the selected blueprint is visible.
pub struct DocumentHandler;

impl IntentHandler<String> for DocumentHandler {
    fn handle(&self, ctx: &IntentContext<'_>, state: &mut NavigationState, key: String) {
        if state.active_document.as_deref() != Some(key.as_str()) {
            // Only a change of document draws a new id, so reselecting is a no-op.
            state.synthesized_id = ctx
                .registry
                .resolve(&key)
                .blueprint()
                .filter(|blueprint| blueprint.id.is_none())
                .map(|_| ctx.id_strategy.synthesize(&key));
            debug!(
                key = %key,
                defined = ctx.registry.is_defined(&key),
                synthesized_id = state.synthesized_id.as_deref().unwrap_or("-"),
                "document selected"
            );
            state.active_document = Some(key);
        }
        if state.viewport_mode.is_narrow() {
            state.sidebar_visible = false;
        }
    }
}
