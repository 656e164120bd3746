//! Blueprint registry.
//!
//! Immutable table of blueprints keyed by document type, plus the category
//! index used for navigation. Built once at startup.

use std::collections::HashMap;

use tracing::info;

use doca_model::{Blueprint, CategoryIndex};

use crate::embedded;
use crate::error::{CatalogueError, Result};
use crate::loader;

/// Configuration for building a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Blueprint served when a key has no definition of its own.
    ///
    /// `None` disables the fallback tier, so unknown keys resolve to
    /// [`Resolution::Missing`].
    pub fallback_key: Option<String>,
}

impl RegistryConfig {
    /// Config with the given fallback blueprint.
    pub fn with_fallback(key: impl Into<String>) -> Self {
        Self {
            fallback_key: Some(key.into()),
        }
    }
}

/// Outcome of the two-tier lookup in [`BlueprintRegistry::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The key has its own blueprint.
    Exact(&'a Blueprint),
    /// The key has no blueprint; the configured fallback was used.
    Fallback {
        blueprint: &'a Blueprint,
        fallback_key: &'a str,
    },
    /// Neither tier produced a blueprint.
    Missing,
}

impl<'a> Resolution<'a> {
    /// The resolved blueprint, from either tier.
    pub fn blueprint(&self) -> Option<&'a Blueprint> {
        match *self {
            Self::Exact(blueprint) | Self::Fallback { blueprint, .. } => Some(blueprint),
            Self::Missing => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Read-only catalogue of blueprints and categories.
#[derive(Debug, Clone)]
pub struct BlueprintRegistry {
    blueprints: HashMap<String, Blueprint>,
    categories: CategoryIndex,
    fallback_key: Option<String>,
}

impl BlueprintRegistry {
    /// Build the registry from the embedded catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is invalid or the configured
    /// fallback key has no blueprint.
    pub fn load(config: &RegistryConfig) -> Result<Self> {
        Self::from_toml_str(embedded::CATALOGUE, config)
    }

    /// Build the registry from the embedded catalogue with no fallback.
    pub fn load_default() -> Result<Self> {
        Self::load(&RegistryConfig::default())
    }

    /// Build a registry from catalogue TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text fails to parse or breaks an integrity rule.
    pub fn from_toml_str(text: &str, config: &RegistryConfig) -> Result<Self> {
        let parsed = loader::parse(text)?;
        if let Some(key) = &config.fallback_key {
            if !parsed.blueprints.contains_key(key) {
                return Err(CatalogueError::FallbackMissing { key: key.clone() });
            }
        }
        let registry = Self {
            blueprints: parsed.blueprints,
            categories: parsed.categories,
            fallback_key: config.fallback_key.clone(),
        };
        info!(
            categories = registry.categories.len(),
            documents = registry.total_count(),
            blueprints = registry.defined_count(),
            fallback = registry.fallback_key.as_deref().unwrap_or("none"),
            "blueprint catalogue loaded"
        );
        Ok(registry)
    }

    /// Exact-key lookup. `None` is an expected outcome, not a defect.
    pub fn lookup(&self, key: &str) -> Option<&Blueprint> {
        self.blueprints.get(key)
    }

    /// Two-tier lookup: the key's own blueprint, else the fallback.
    pub fn resolve(&self, key: &str) -> Resolution<'_> {
        if let Some(blueprint) = self.lookup(key) {
            return Resolution::Exact(blueprint);
        }
        let fallback = self
            .fallback_key
            .as_deref()
            .and_then(|fallback_key| Some((self.lookup(fallback_key)?, fallback_key)));
        match fallback {
            Some((blueprint, fallback_key)) => Resolution::Fallback {
                blueprint,
                fallback_key,
            },
            None => Resolution::Missing,
        }
    }

    /// Categories and their document keys, in presentation order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories.iter()
    }

    /// Document keys of one category.
    pub fn category(&self, label: &str) -> Option<&[String]> {
        self.categories.get(label)
    }

    pub fn has_category(&self, label: &str) -> bool {
        self.categories.contains(label)
    }

    /// The underlying category index.
    pub fn category_index(&self) -> &CategoryIndex {
        &self.categories
    }

    /// Number of documents listed across all categories.
    pub fn total_count(&self) -> usize {
        self.categories.total_count()
    }

    /// Number of documents that have a blueprint.
    pub fn defined_count(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_defined(&self, key: &str) -> bool {
        self.blueprints.contains_key(key)
    }

    /// Key of the fallback blueprint, if configured.
    pub fn fallback_key(&self) -> Option<&str> {
        self.fallback_key.as_deref()
    }

    /// Defined blueprints in category order.
    pub fn blueprints(&self) -> impl Iterator<Item = (&str, &Blueprint)> {
        self.categories
            .iter()
            .flat_map(|(_, keys)| keys.iter())
            .filter_map(|key| Some((key.as_str(), self.blueprints.get(key)?)))
    }
}
