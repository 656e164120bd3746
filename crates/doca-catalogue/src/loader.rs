//! Catalogue parsing.
//!
//! Converts the TOML catalogue into model types and checks cross-record
//! integrity (categories, listing, stored ids).

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracing::debug;

use doca_model::{Blueprint, CategoryIndex, ModelError};

use crate::error::{CatalogueError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalogue {
    #[serde(default)]
    category: Vec<RawCategory>,
    #[serde(default)]
    blueprint: BTreeMap<String, RawBlueprint>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategory {
    label: String,
    #[serde(default)]
    documents: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBlueprint {
    title: String,
    id: Option<String>,
    category: String,
    sections: Vec<RawSection>,
    #[serde(default)]
    forbidden: Vec<String>,
    tone: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSection {
    id: Option<usize>,
    title: String,
    #[serde(default)]
    required: bool,
    description: String,
}

/// Parsed catalogue contents.
#[derive(Debug)]
pub(crate) struct Parsed {
    pub categories: CategoryIndex,
    pub blueprints: HashMap<String, Blueprint>,
}

/// Parse catalogue TOML and validate it.
pub(crate) fn parse(text: &str) -> Result<Parsed> {
    let raw: RawCatalogue =
        toml::from_str(text).map_err(|source| CatalogueError::Parse { source })?;

    let mut categories = CategoryIndex::new();
    for category in raw.category {
        categories.push(category.label, category.documents)?;
    }

    let mut blueprints = HashMap::with_capacity(raw.blueprint.len());
    let mut ids: HashMap<String, String> = HashMap::new();
    for (key, raw) in raw.blueprint {
        let blueprint = convert(raw)?;
        check_listing(&categories, &key, &blueprint)?;
        if let Some(id) = &blueprint.id {
            if let Some(first) = ids.insert(id.clone(), key.clone()) {
                return Err(CatalogueError::DuplicateId {
                    id: id.clone(),
                    first,
                    second: key,
                });
            }
        }
        debug!(key = %key, sections = blueprint.sections.len(), "parsed blueprint");
        blueprints.insert(key, blueprint);
    }

    Ok(Parsed {
        categories,
        blueprints,
    })
}

fn convert(raw: RawBlueprint) -> Result<Blueprint> {
    for (position, section) in raw.sections.iter().enumerate() {
        if let Some(id) = section.id {
            if id != position + 1 {
                return Err(ModelError::SectionIndex {
                    title: raw.title.clone(),
                    position: position + 1,
                    found: id,
                }
                .into());
            }
        }
    }
    let sections = raw
        .sections
        .into_iter()
        .map(|s| (s.title, s.required, s.description));
    Ok(Blueprint::new(
        raw.title,
        raw.id,
        raw.category,
        sections,
        raw.forbidden,
        raw.tone,
    )?)
}

fn check_listing(categories: &CategoryIndex, key: &str, blueprint: &Blueprint) -> Result<()> {
    if !categories.contains(&blueprint.category) {
        return Err(CatalogueError::UnknownCategory {
            key: key.to_string(),
            category: blueprint.category.clone(),
        });
    }
    if categories.category_of(key) != Some(blueprint.category.as_str()) {
        return Err(CatalogueError::Unlisted {
            key: key.to_string(),
            category: blueprint.category.clone(),
        });
    }
    Ok(())
}
