//! Rendering of projected views.

use doca_catalogue::{BlueprintRegistry, RegistryConfig};
use doca_cli::render::{catalogue_table, outline, sections_table};
use doca_view::{Intent, InteractionController, MainPanel, Settings};

fn registry() -> BlueprintRegistry {
    BlueprintRegistry::load_default().expect("embedded catalogue is valid")
}

fn narrow_settings() -> Settings {
    let mut settings = Settings::default();
    settings.navigation.initial_width = 500;
    settings
}

#[test]
fn landing_outline() {
    let registry = registry();
    let controller = InteractionController::new(&registry, &Settings::default());
    insta::assert_snapshot!(outline(&controller.view()), @r"
    layout: wide, sidebar shown
    DOCA | Document Oriented Compliance Architecture | 22 documents
      v Core Professional (5)
          White Paper
          Technical Report
          Case Study
          Executive Brief (no blueprint)
          General Document
      > Business & Corporate (5)
      > Legal & Compliance (5)
      > Technical & Engineering (4)
      > Academic & Research (3)
    landing: Document Oriented Compliance Architecture
      documents: 22
      - Structural Sequence
      - Compliance Violations
      - Tone Calibration
    ");
}

#[test]
fn detail_outline_in_narrow_layout() {
    let registry = registry();
    let mut controller = InteractionController::new(&registry, &narrow_settings());
    let tree = controller.dispatch(Intent::select_document("White Paper"));
    insta::assert_snapshot!(outline(&tree), @r"
    layout: narrow, sidebar hidden
    detail: White Paper [DOC-WP-101]
      category: Core Professional
      Structural Sequence (LINEAR):
        01 Executive Summary
        02 Problem Statement
        03 Proposed Solution
        04 Technical Architecture (optional)
        05 Conclusion
      Compliance Violations:
        - First-person narration ('I think')
        - Uncited statistics
        - Marketing fluff
      Tone Calibration: Authoritative, Objective, Educational
      Validation Level: Strict
      actions: Export JSON, Initialize Doc
    ");
}

#[test]
fn missing_outline_with_overlay() {
    let registry = registry();
    let mut controller = InteractionController::new(&registry, &Settings::default());
    for intent in [
        Intent::viewport_resize(500),
        Intent::toggle_category("Legal & Compliance"),
        Intent::select_document("Privacy Policy"),
        Intent::toggle_sidebar(),
    ] {
        controller.apply(intent);
    }
    insta::assert_snapshot!(outline(&controller.view()), @r"
    layout: narrow, sidebar shown, overlay
    DOCA | Document Oriented Compliance Architecture | 22 documents
      v Core Professional (5)
          White Paper
          Technical Report
          Case Study
          Executive Brief (no blueprint)
          General Document
      > Business & Corporate (5)
      v Legal & Compliance (5)
          Service Level Agreement (SLA)
          Non-Disclosure Agreement (NDA)
        * Privacy Policy (no blueprint)
          Terms of Service (no blueprint)
          Compliance Audit Report (no blueprint)
      > Technical & Engineering (4)
      > Academic & Research (3)
    missing: Privacy Policy [BLUEPRINT_MISSING]
      Blueprint definition not found in local schema.
    ");
}

#[test]
fn fallback_and_synthesized_ids_are_marked() {
    let registry = BlueprintRegistry::load(&RegistryConfig::with_fallback("General Document"))
        .expect("fallback is defined");
    let mut controller = InteractionController::new(&registry, &narrow_settings());

    let text = outline(&controller.dispatch(Intent::select_document("Terms of Service")));
    assert!(text.contains("detail: General Document [DOC-GEN-100]"));
    assert!(text.contains("  fallback for: Terms of Service"));

    let text = outline(&controller.dispatch(Intent::select_document("Press Release")));
    assert!(text.contains(", synthesized]"));
    assert!(!text.contains("fallback for"));
}

#[test]
fn catalogue_table_lists_every_document() {
    let registry = registry();
    let rendered = catalogue_table(&registry).to_string();
    for key in ["White Paper", "Annual Report", "Research Paper", "DOC-WP-101"] {
        assert!(rendered.contains(key), "{key} missing from table");
    }
    assert_eq!(catalogue_table(&registry).row_iter().count(), 22);
}

#[test]
fn sections_table_has_one_row_per_section() {
    let registry = registry();
    let mut controller = InteractionController::new(&registry, &Settings::default());
    let tree = controller.dispatch(Intent::select_document("Research Paper"));
    let MainPanel::Detail(detail) = &tree.main else {
        panic!("Research Paper has a blueprint");
    };
    let table = sections_table(detail);
    assert_eq!(table.row_iter().count(), 6);
    assert!(table.to_string().contains("References"));
}
