//! Text rendering of the catalogue and of projected view trees.
//!
//! [`outline`] is plain text with stable layout, used for `replay` output.
//! The table renderers use comfy-table and may wrap to the terminal width.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use doca_catalogue::BlueprintRegistry;
use doca_view::MainPanel;
use doca_view::ViewTree;
use doca_view::view::{DetailView, LandingView, MissingView, SidebarView};

// =============================================================================
// OUTLINE
// =============================================================================

/// Indented plain-text rendering of a view tree.
///
/// The sidebar is listed only while it is on screen.
pub fn outline(tree: &ViewTree) -> String {
    let mut lines = Vec::new();
    let layout = &tree.layout;
    lines.push(format!(
        "layout: {}, sidebar {}{}",
        layout.viewport_mode.as_str(),
        if layout.sidebar_visible { "shown" } else { "hidden" },
        if layout.overlay_visible { ", overlay" } else { "" },
    ));
    if layout.sidebar_visible {
        sidebar_lines(&tree.sidebar, &mut lines);
    }
    match &tree.main {
        MainPanel::Landing(landing) => landing_lines(landing, &mut lines),
        MainPanel::Detail(detail) => detail_lines(detail, &mut lines),
        MainPanel::Missing(missing) => missing_lines(missing, &mut lines),
    }
    lines.join("\n")
}

fn sidebar_lines(sidebar: &SidebarView, lines: &mut Vec<String>) {
    lines.push(format!(
        "{} | {} | {} documents",
        sidebar.title, sidebar.subtitle, sidebar.total_documents
    ));
    for category in &sidebar.categories {
        let marker = if category.expanded { "v" } else { ">" };
        lines.push(format!(
            "  {marker} {} ({})",
            category.label, category.document_count
        ));
        for entry in &category.documents {
            let active = if entry.active { "*" } else { " " };
            let missing = if entry.defined { "" } else { " (no blueprint)" };
            lines.push(format!("    {active} {}{missing}", entry.key));
        }
    }
}

fn landing_lines(landing: &LandingView, lines: &mut Vec<String>) {
    lines.push(format!("landing: {}", landing.title));
    lines.push(format!("  documents: {}", landing.document_count));
    for feature in &landing.features {
        lines.push(format!("  - {}", feature.title));
    }
}

fn detail_lines(detail: &DetailView, lines: &mut Vec<String>) {
    let header = &detail.header;
    let synthesized = if header.id_synthesized {
        ", synthesized"
    } else {
        ""
    };
    lines.push(format!(
        "detail: {} [{}{synthesized}]",
        header.title, header.display_id
    ));
    if detail.fallback {
        lines.push(format!("  fallback for: {}", detail.requested_key));
    }
    lines.push(format!("  category: {}", header.category));
    lines.push(format!(
        "  {} ({}):",
        detail.structure.heading, detail.structure.flow
    ));
    for section in &detail.structure.sections {
        let optional = if section.required { "" } else { " (optional)" };
        lines.push(format!("    {} {}{optional}", section.number, section.title));
    }
    lines.push(format!("  {}:", detail.violations.heading));
    for item in &detail.violations.items {
        lines.push(format!("    - {item}"));
    }
    lines.push(format!("  {}: {}", detail.tone.heading, detail.tone.body));
    lines.push(format!(
        "  {}: {}",
        detail.validation.heading, detail.validation.level
    ));
    let actions: Vec<&str> = detail.actions.iter().map(|a| a.label.as_str()).collect();
    lines.push(format!("  actions: {}", actions.join(", ")));
}

fn missing_lines(missing: &MissingView, lines: &mut Vec<String>) {
    lines.push(format!("missing: {} [{}]", missing.label, missing.code));
    lines.push(format!("  {}", missing.message));
}

// =============================================================================
// TABLES
// =============================================================================

/// One row per listed document, in catalogue order.
pub fn catalogue_table(registry: &BlueprintRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Document"),
        header_cell("ID"),
        header_cell("Sections"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (label, keys) in registry.categories() {
        for (position, key) in keys.iter().enumerate() {
            let category = if position == 0 {
                Cell::new(label).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            let row = match registry.lookup(key) {
                Some(blueprint) => vec![
                    category,
                    Cell::new(key),
                    blueprint
                        .id
                        .as_deref()
                        .map_or_else(|| dim_cell("-"), Cell::new),
                    Cell::new(format!(
                        "{}/{}",
                        blueprint.required_count(),
                        blueprint.sections.len()
                    )),
                ],
                None => vec![category, dim_cell(key), dim_cell("-"), dim_cell("-")],
            };
            table.add_row(row);
        }
    }
    table
}

/// Section rows of a detail view, with descriptions.
pub fn sections_table(detail: &DetailView) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Section"),
        header_cell("Required"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for section in &detail.structure.sections {
        let required = if section.required {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(&section.number),
            Cell::new(&section.title),
            required,
            Cell::new(&section.description),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
