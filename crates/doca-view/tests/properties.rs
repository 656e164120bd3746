//! Property tests over arbitrary intent sequences.

use std::sync::LazyLock;

use proptest::prelude::*;
use proptest::sample::select;

use doca_catalogue::BlueprintRegistry;
use doca_view::handler::IntentContext;
use doca_view::state::NavigationSettings;
use doca_view::{
    BREAKPOINT, IdStrategy, Intent, InteractionController, NavigationState, Settings,
    ViewportMode, project,
};

static REGISTRY: LazyLock<BlueprintRegistry> =
    LazyLock::new(|| BlueprintRegistry::load_default().expect("embedded catalogue is valid"));

fn document_keys() -> Vec<String> {
    let mut keys: Vec<String> = REGISTRY
        .categories()
        .flat_map(|(_, docs)| docs.iter().cloned())
        .collect();
    keys.push("unknown".to_string());
    keys.push(String::new());
    keys
}

fn category_labels() -> Vec<String> {
    let mut labels: Vec<String> = REGISTRY
        .categories()
        .map(|(label, _)| label.to_string())
        .collect();
    labels.push("Not A Category".to_string());
    labels
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        select(document_keys()).prop_map(Intent::SelectDocument),
        select(category_labels()).prop_map(Intent::ToggleCategory),
        Just(Intent::ToggleSidebar),
        (0u32..2400).prop_map(Intent::ViewportResize),
    ]
}

fn strategy() -> impl Strategy<Value = IdStrategy> {
    prop_oneof![Just(IdStrategy::Stable), Just(IdStrategy::Random)]
}

fn replay(strategy: IdStrategy, intents: &[Intent]) -> NavigationState {
    let ctx = IntentContext::new(&REGISTRY, strategy);
    intents.iter().cloned().fold(
        NavigationState::initial(&REGISTRY, &NavigationSettings::default()),
        |state, intent| state.apply(intent, &ctx),
    )
}

proptest! {
    #[test]
    fn main_panel_is_exclusive(intents in prop::collection::vec(intent(), 0..40)) {
        let state = replay(IdStrategy::Stable, &intents);
        let tree = project(&REGISTRY, &state);
        let shown = [tree.main.is_landing(), tree.main.is_detail(), tree.main.is_missing()];
        prop_assert_eq!(shown.iter().filter(|on| **on).count(), 1);
        prop_assert_eq!(tree.main.is_landing(), state.active_document().is_none());
        if let Some(key) = state.active_document() {
            prop_assert_eq!(tree.main.is_detail(), REGISTRY.is_defined(key));
        }
    }

    #[test]
    fn at_most_one_document_is_active(
        intents in prop::collection::vec(intent(), 0..40),
    ) {
        let mut state = replay(IdStrategy::Stable, &intents);
        let ctx = IntentContext::new(&REGISTRY, IdStrategy::Stable);
        // Expand everything so every entry is listed.
        for (label, _) in REGISTRY.categories() {
            if !state.is_expanded(label) {
                state = state.apply(Intent::toggle_category(label), &ctx);
            }
        }
        let tree = project(&REGISTRY, &state);
        let active = tree.sidebar.active_keys();
        prop_assert!(active.len() <= 1);
        let listed = state
            .active_document()
            .filter(|key| REGISTRY.category_index().category_of(key).is_some());
        prop_assert_eq!(active.first().copied(), listed);
    }

    #[test]
    fn reselecting_is_idempotent(
        prefix in prop::collection::vec(intent(), 0..20),
        key in select(document_keys()),
        id_strategy in strategy(),
    ) {
        let ctx = IntentContext::new(&REGISTRY, id_strategy);
        let once = replay(id_strategy, &prefix).apply(Intent::select_document(key.clone()), &ctx);
        let twice = once.apply(Intent::select_document(key), &ctx);
        prop_assert_eq!(project(&REGISTRY, &once), project(&REGISTRY, &twice));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn resize_determines_mode_and_resets_sidebar(
        prefix in prop::collection::vec(intent(), 0..30),
        width in 0u32..4000,
    ) {
        let ctx = IntentContext::new(&REGISTRY, IdStrategy::Stable);
        let state = replay(IdStrategy::Stable, &prefix).apply(Intent::viewport_resize(width), &ctx);
        let expected = if width < BREAKPOINT { ViewportMode::Narrow } else { ViewportMode::Wide };
        prop_assert_eq!(state.viewport_mode(), expected);
        prop_assert_eq!(state.sidebar_visible(), expected.is_wide());
        prop_assert_eq!(state.viewport_width(), width);

        let again = state.apply(Intent::viewport_resize(width), &ctx);
        prop_assert_eq!(again, state);
    }

    #[test]
    fn wide_sidebar_is_always_shown(intents in prop::collection::vec(intent(), 0..40)) {
        let state = replay(IdStrategy::Stable, &intents);
        let tree = project(&REGISTRY, &state);
        if state.viewport_mode().is_wide() {
            prop_assert!(tree.layout.sidebar_visible);
            prop_assert!(!tree.layout.overlay_visible);
        } else {
            prop_assert_eq!(tree.layout.overlay_visible, tree.layout.sidebar_visible);
        }
    }

    #[test]
    fn toggles_touch_only_their_category(
        prefix in prop::collection::vec(intent(), 0..30),
        label in select(category_labels()),
    ) {
        let ctx = IntentContext::new(&REGISTRY, IdStrategy::Stable);
        let before = replay(IdStrategy::Stable, &prefix);
        let after = before.apply(Intent::toggle_category(label.clone()), &ctx);
        for (other, _) in REGISTRY.categories() {
            if other == label {
                prop_assert_ne!(before.is_expanded(other), after.is_expanded(other));
            } else {
                prop_assert_eq!(before.is_expanded(other), after.is_expanded(other));
            }
        }
        prop_assert_eq!(before.active_document(), after.active_document());
        prop_assert_eq!(before.sidebar_visible(), after.sidebar_visible());
        prop_assert_eq!(after.apply(Intent::toggle_category(label), &ctx), before);
    }

    #[test]
    fn controller_matches_pure_replay(intents in prop::collection::vec(intent(), 0..30)) {
        let mut controller = InteractionController::new(&REGISTRY, &Settings::default());
        for intent in intents.iter().cloned() {
            controller.apply(intent);
        }
        prop_assert_eq!(controller.state(), &replay(IdStrategy::Stable, &intents));
    }
}
