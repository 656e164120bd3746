//! Integrity checks for the embedded catalogue.

use std::collections::HashSet;

use doca_catalogue::{BlueprintRegistry, RegistryConfig, Resolution};

fn registry() -> BlueprintRegistry {
    BlueprintRegistry::load_default().expect("embedded catalogue is valid")
}

#[test]
fn embedded_catalogue_loads() {
    let registry = registry();
    assert_eq!(registry.category_index().len(), 5);
    assert_eq!(registry.total_count(), 22);
    assert_eq!(registry.defined_count(), 11);
}

#[test]
fn category_order_matches_catalogue() {
    let registry = registry();
    let labels: Vec<&str> = registry.categories().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        vec![
            "Core Professional",
            "Business & Corporate",
            "Legal & Compliance",
            "Technical & Engineering",
            "Academic & Research",
        ]
    );
    let core = registry.category("Core Professional").unwrap();
    assert_eq!(core[0], "White Paper");
    assert_eq!(core.len(), 5);
}

#[test]
fn total_count_is_sum_of_category_lengths() {
    let registry = registry();
    let summed: usize = registry.categories().map(|(_, keys)| keys.len()).sum();
    assert_eq!(registry.total_count(), summed);
    assert_eq!(registry.total_count(), registry.total_count());
}

#[test]
fn every_blueprint_has_contiguous_sections() {
    let registry = registry();
    for (key, blueprint) in registry.blueprints() {
        assert!(!blueprint.sections.is_empty(), "{key} has no sections");
        for (position, section) in blueprint.sections.iter().enumerate() {
            assert_eq!(section.index, position + 1, "{key} section {}", section.title);
        }
        assert!(blueprint.validate().is_ok(), "{key} fails validation");
        assert_eq!(
            registry.category_index().category_of(key),
            Some(blueprint.category.as_str())
        );
    }
}

#[test]
fn stored_ids_are_unique() {
    let registry = registry();
    let mut seen = HashSet::new();
    for (key, blueprint) in registry.blueprints() {
        if let Some(id) = &blueprint.id {
            assert!(seen.insert(id.clone()), "{key} reuses id {id}");
        }
    }
    let synthesized = registry
        .blueprints()
        .filter(|(_, blueprint)| blueprint.id.is_none())
        .count();
    assert!(synthesized > 0, "catalogue should exercise id synthesis");
}

#[test]
fn white_paper_blueprint() {
    let registry = registry();
    let blueprint = registry.lookup("White Paper").unwrap();
    assert_eq!(blueprint.id.as_deref(), Some("DOC-WP-101"));
    assert_eq!(blueprint.sections.len(), 5);
    assert_eq!(blueprint.sections[0].title, "Executive Summary");
    assert!(!blueprint.sections[3].required);
    assert_eq!(blueprint.tone, "Authoritative, Objective, Educational");
    assert_eq!(blueprint.forbidden.len(), 3);
}

#[test]
fn undefined_documents_are_listed_but_missing() {
    let registry = registry();
    assert_eq!(
        registry.category_index().category_of("Privacy Policy"),
        Some("Legal & Compliance")
    );
    assert!(!registry.is_defined("Privacy Policy"));
    assert_eq!(registry.resolve("Privacy Policy"), Resolution::Missing);
}

#[test]
fn general_document_serves_as_fallback() {
    let registry = BlueprintRegistry::load(&RegistryConfig::with_fallback("General Document"))
        .expect("fallback is defined");
    match registry.resolve("Privacy Policy") {
        Resolution::Fallback {
            blueprint,
            fallback_key,
        } => {
            assert_eq!(fallback_key, "General Document");
            assert_eq!(blueprint.title, "General Document");
        }
        other => panic!("expected fallback, got {other:?}"),
    }
    assert!(matches!(
        registry.resolve("White Paper"),
        Resolution::Exact(_)
    ));
}
