//! Session state and configuration.
//!
//! - **NavigationState**: selection, expanded categories, sidebar visibility
//! - **Settings**: startup configuration loaded from TOML

mod navigation;
mod settings;

pub use navigation::{BREAKPOINT, NavigationState, ViewportMode};
pub use settings::{
    CatalogueSettings, DisplaySettings, NavigationSettings, Settings, SettingsError,
};
