//! Interaction controller.
//!
//! Owns the single [`NavigationState`] of a session. Intents are applied one
//! at a time, to completion; after each one the view is re-projected.
//!
//! ```ignore
//! let mut controller = InteractionController::new(&registry, &settings);
//! let tree = controller.dispatch(Intent::viewport_resize(500));
//! render(&tree);
//! ```

use tracing::{debug, debug_span};

use doca_catalogue::BlueprintRegistry;
use doca_model::Blueprint;

use crate::doc_id::IdStrategy;
use crate::handler::IntentContext;
use crate::message::Intent;
use crate::state::{NavigationState, Settings};
use crate::view::{ViewTree, project};

/// Whether an intent altered the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    pub fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Applies intents to the navigation state and projects views.
#[derive(Debug, Clone)]
pub struct InteractionController<'r> {
    ctx: IntentContext<'r>,
    state: NavigationState,
}

impl<'r> InteractionController<'r> {
    /// Start a session with the initial state described by `settings`.
    pub fn new(registry: &'r BlueprintRegistry, settings: &Settings) -> Self {
        let state = NavigationState::initial(registry, &settings.navigation);
        Self::with_state(registry, settings.display.id_strategy, state)
    }

    /// Start a session from an existing state.
    pub fn with_state(
        registry: &'r BlueprintRegistry,
        id_strategy: IdStrategy,
        state: NavigationState,
    ) -> Self {
        Self {
            ctx: IntentContext::new(registry, id_strategy),
            state,
        }
    }

    /// Apply one intent without projecting.
    pub fn apply(&mut self, intent: Intent) -> Transition {
        let span = debug_span!("intent", kind = intent.name());
        let _guard = span.enter();
        let next = self.state.apply(intent, &self.ctx);
        let transition = if next == self.state {
            Transition::Unchanged
        } else {
            Transition::Changed
        };
        self.state = next;
        debug!(?transition, "intent applied");
        transition
    }

    /// Apply one intent and return the resulting view.
    pub fn dispatch(&mut self, intent: Intent) -> ViewTree {
        self.apply(intent);
        self.view()
    }

    /// Project the current state.
    pub fn view(&self) -> ViewTree {
        project(self.ctx.registry, &self.state)
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn registry(&self) -> &'r BlueprintRegistry {
        self.ctx.registry
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ctx.id_strategy
    }

    /// Blueprint behind the active document, for export and copy actions.
    ///
    /// Includes a fallback blueprint when the registry served one.
    pub fn current_blueprint(&self) -> Option<&'r Blueprint> {
        let key = self.state.active_document()?;
        self.ctx.registry.resolve(key).blueprint()
    }
}
