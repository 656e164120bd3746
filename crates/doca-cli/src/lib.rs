//! Terminal front-end for the DOCA blueprint catalogue.

pub mod logging;
pub mod render;
