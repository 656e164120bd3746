use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use doca_catalogue::BlueprintRegistry;
use doca_cli::render::{catalogue_table, outline, sections_table};
use doca_view::{Intent, InteractionController, MainPanel, Settings, ViewTree};

use crate::cli::{Cli, ReplayArgs, ShowArgs};

/// Settings file (if any) with command-line overrides applied.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(width) = cli.width {
        settings.navigation.initial_width = width;
    }
    if let Some(strategy) = cli.id_strategy {
        settings.display.id_strategy = strategy.into();
    }
    if let Some(key) = &cli.fallback {
        settings.catalogue.fallback_key = Some(key.clone());
    }
    Ok(settings)
}

pub fn load_registry(settings: &Settings) -> Result<BlueprintRegistry> {
    BlueprintRegistry::load(&settings.registry_config()).context("load blueprint catalogue")
}

pub fn run_catalogue(registry: &BlueprintRegistry) {
    println!(
        "{} documents in {} categories, {} with blueprints",
        registry.total_count(),
        registry.category_index().len(),
        registry.defined_count()
    );
    println!("{}", catalogue_table(registry));
}

/// Print one document's blueprint. Returns the exit code: 1 when the
/// document has no blueprint.
pub fn run_show(
    registry: &BlueprintRegistry,
    settings: &Settings,
    args: &ShowArgs,
) -> Result<i32> {
    let mut controller = InteractionController::new(registry, settings);
    let tree = controller.dispatch(Intent::select_document(args.key.as_str()));
    if args.json {
        let Some(blueprint) = controller.current_blueprint() else {
            eprintln!("no blueprint for {}", args.key);
            return Ok(1);
        };
        let json = serde_json::to_string_pretty(blueprint).context("serialize blueprint")?;
        println!("{json}");
        return Ok(0);
    }
    print_view(&tree);
    Ok(if tree.main.is_missing() { 1 } else { 0 })
}

pub fn run_replay(
    registry: &BlueprintRegistry,
    settings: &Settings,
    args: &ReplayArgs,
) -> Result<i32> {
    let mut controller = InteractionController::new(registry, settings);
    let span = info_span!(
        "replay",
        intents = args.intents.len(),
        id_strategy = controller.id_strategy().as_str(),
        fallback = controller.registry().fallback_key().unwrap_or("none")
    );
    let _guard = span.enter();
    let mut tree = controller.view();
    for (step, intent) in args.intents.iter().enumerate() {
        warn_unknown_target(controller.registry(), intent);
        let transition = controller.apply(intent.clone());
        info!(step = step + 1, %intent, changed = transition.is_changed(), "intent applied");
        tree = controller.view();
        if args.each && !args.json {
            println!("# {}: {intent}", step + 1);
            println!("{}", outline(&tree));
            println!();
        }
    }
    if args.json {
        let json = serde_json::to_string_pretty(&tree).context("serialize view tree")?;
        println!("{json}");
    } else if !args.each || args.intents.is_empty() {
        print_view(&tree);
    }
    Ok(0)
}

fn print_view(tree: &ViewTree) {
    println!("{}", outline(tree));
    if let MainPanel::Detail(detail) = &tree.main {
        println!("{}", sections_table(detail));
    }
}

fn warn_unknown_target(registry: &BlueprintRegistry, intent: &Intent) {
    match intent {
        Intent::ToggleCategory(label) if !registry.has_category(label) => {
            warn!(category = %label, "unknown category, toggle has no effect");
        }
        Intent::SelectDocument(key) if registry.category_index().category_of(key).is_none() => {
            warn!(key = %key, "document is not listed in the catalogue");
        }
        _ => {}
    }
}
