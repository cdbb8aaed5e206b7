//! Shared domain types for the review-extraction pipeline.
//!
//! This crate holds the normalized record shapes produced by
//! `revcrawl-extract` and the serde-level locator configuration that the
//! extraction schema is compiled from. It deliberately knows nothing about
//! HTML: markup handling lives entirely in `revcrawl-extract`.

pub mod locator_config;
pub mod records;

use thiserror::Error;

pub use locator_config::{LocatorConfig, LocatorEntry};
pub use records::{AmenityRating, PageResultSet, ReviewRecord};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read locator file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid locator YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
