//! Blueprint catalogue for DOCA.
//!
//! This crate provides:
//!
//! - **Embedded catalogue data** compiled in from `data/catalogue.toml`
//! - **Loader** that parses the catalogue and checks its integrity
//! - **Registry** with exact and fallback lookup plus the category index
//!
//! # Example
//!
//! ```
//! use doca_catalogue::{BlueprintRegistry, Resolution};
//!
//! let registry = BlueprintRegistry::load_default().unwrap();
//! let Resolution::Exact(blueprint) = registry.resolve("White Paper") else {
//!     panic!("White Paper is defined");
//! };
//! assert_eq!(blueprint.sections[0].title, "Executive Summary");
//! ```

pub mod embedded;
pub mod error;
mod loader;
pub mod registry;

pub use error::{CatalogueError, Result};
pub use registry::{BlueprintRegistry, RegistryConfig, Resolution};
