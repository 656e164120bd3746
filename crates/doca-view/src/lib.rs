//! DOCA view-state engine.
//!
//! Elm-style core for browsing the blueprint catalogue:
//!
//! - [`state`]: navigation state and settings
//! - [`message`]: the closed set of user [`Intent`]s
//! - [`handler`]: one handler per intent, producing the next state
//! - [`view`]: pure projection of (registry, state) into a [`ViewTree`]
//! - [`controller`]: owns the state, applies intents, re-projects
//!
//! # Example
//!
//! ```
//! use doca_catalogue::BlueprintRegistry;
//! use doca_view::{Intent, InteractionController, MainPanel, Settings};
//!
//! let registry = BlueprintRegistry::load_default().unwrap();
//! let mut controller = InteractionController::new(&registry, &Settings::default());
//!
//! let tree = controller.dispatch(Intent::select_document("White Paper"));
//! let MainPanel::Detail(detail) = &tree.main else {
//!     panic!("White Paper has a blueprint");
//! };
//! assert_eq!(detail.structure.sections.len(), 5);
//! ```

pub mod controller;
pub mod doc_id;
pub mod handler;
pub mod message;
pub mod state;
pub mod view;

pub use controller::{InteractionController, Transition};
pub use doc_id::IdStrategy;
pub use message::{Intent, IntentParseError};
pub use state::{BREAKPOINT, NavigationState, Settings, SettingsError, ViewportMode};
pub use view::{MISSING_CODE, MainPanel, ViewTree, project};
