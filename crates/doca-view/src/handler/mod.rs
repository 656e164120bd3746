//! Intent handlers.
//!
//! Each intent variant has a handler that mutates a working copy of the
//! [`NavigationState`]. [`NavigationState::apply`] owns the copy, so a
//! handler never exposes a half-applied state.
//!
//! ```ignore
//! match intent {
//!     Intent::SelectDocument(key) => DocumentHandler.handle(ctx, state, key),
//!     Intent::ToggleSidebar => SidebarHandler.handle(ctx, state, ()),
//!     // ...
//! }
//! ```

mod category;
mod document;
mod viewport;

use doca_catalogue::BlueprintRegistry;

use crate::doc_id::IdStrategy;
use crate::message::Intent;
use crate::state::NavigationState;

pub use category::CategoryHandler;
pub use document::DocumentHandler;
pub use viewport::{SidebarHandler, ViewportHandler};

/// Read-only collaborators a handler may consult.
#[derive(Debug, Clone, Copy)]
pub struct IntentContext<'a> {
    /// Catalogue used to validate labels and resolve blueprints.
    pub registry: &'a BlueprintRegistry,
    /// Strategy for display ids of blueprints without one.
    pub id_strategy: IdStrategy,
}

impl<'a> IntentContext<'a> {
    pub fn new(registry: &'a BlueprintRegistry, id_strategy: IdStrategy) -> Self {
        Self {
            registry,
            id_strategy,
        }
    }
}

/// Handles one intent payload type.
///
/// # Type Parameters
///
/// * `P` - The payload carried by the intent variant
pub trait IntentHandler<P> {
    /// Apply the intent to `state`.
    fn handle(&self, ctx: &IntentContext<'_>, state: &mut NavigationState, payload: P);
}

/// Route an intent to its handler.
pub(crate) fn dispatch(ctx: &IntentContext<'_>, state: &mut NavigationState, intent: Intent) {
    match intent {
        Intent::SelectDocument(key) => DocumentHandler.handle(ctx, state, key),
        Intent::ToggleCategory(label) => CategoryHandler.handle(ctx, state, label),
        Intent::ToggleSidebar => SidebarHandler.handle(ctx, state, ()),
        Intent::ViewportResize(width) => ViewportHandler.handle(ctx, state, width),
    }
}
