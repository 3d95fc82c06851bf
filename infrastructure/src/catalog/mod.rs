//! Supplemental catalog loading
//!
//! Loads extra question definitions and their defaults from a TOML file
//! and grafts them onto the built-in questionnaire as the supplement tier.

mod toml_catalog;

pub use toml_catalog::{CatalogFileError, TomlCatalogLoader};
