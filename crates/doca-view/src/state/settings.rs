//! Startup settings.
//!
//! Settings are read once at startup from a TOML file. Nothing is written
//! back: sessions are not persisted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use doca_catalogue::RegistryConfig;

use crate::doc_id::IdStrategy;

/// Errors loading settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML for [`Settings`].
    #[error("invalid settings: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
    },
}

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Engine settings.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial navigation layout.
    pub navigation: NavigationSettings,

    /// Detail view presentation.
    pub display: DisplaySettings,

    /// Registry lookup behavior.
    pub catalogue: CatalogueSettings,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|source| SettingsError::Parse { source })
    }

    /// Load settings from a file.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Registry configuration derived from the catalogue settings.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            fallback_key: self.catalogue.fallback_key.clone(),
        }
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Initial navigation layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    /// Category expanded at startup.
    pub default_open_category: Option<String>,

    /// Viewport width assumed at startup.
    pub initial_width: u32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            default_open_category: Some("Core Professional".to_string()),
            initial_width: 1280,
        }
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// How ids are synthesized for blueprints without a stored id.
    pub id_strategy: IdStrategy,
}

// =============================================================================
// CATALOGUE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueSettings {
    /// Blueprint shown for documents without their own definition.
    pub fallback_key: Option<String>,
}
