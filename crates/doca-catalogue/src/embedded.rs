//! Embedded catalogue data.
//!
//! The catalogue is compiled in with `include_str!()`, so building the
//! registry never touches the filesystem.

/// Default DOCA catalogue: categories and blueprint definitions.
pub const CATALOGUE: &str = include_str!("../data/catalogue.toml");
