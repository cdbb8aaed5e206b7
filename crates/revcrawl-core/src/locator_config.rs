//! Serde-level locator configuration.
//!
//! A locator maps a logical field name to the element kind and exact
//! `class` attribute value that carries the field on the rendered page.
//! The class strings are obfuscated build artifacts of the review site's
//! frontend and rotate when the site redeploys, so the table is versioned
//! as an operator-maintained YAML file, separate from this code. The
//! compiled-in [`LocatorConfig::builtin`] table is the snapshot the
//! original crawl was written against.
//!
//! ## File format
//!
//! ```yaml
//! review_block:
//!   element: div
//!   class: "_2wrUUKlw _3hFEdNs8"
//! reviewer_name:
//!   element: a
//!   class: "ui_header_link _1r_My98y"
//! ```
//!
//! Field names are validated against the extraction schema's field set when
//! the config is compiled into selectors; unknown names are rejected there.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One field's locator: element kind plus exact `class` attribute value.
///
/// Matching is exact-attribute, not class-token: `class: "a b"` matches
/// `<div class="a b">` but not `<div class="a b c">`. The review site emits
/// stable full class strings per element, so exact matching avoids
/// accidental hits on shared utility classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorEntry {
    pub element: String,
    pub class: String,
}

/// The full field-name → locator table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocatorConfig {
    pub fields: BTreeMap<String, LocatorEntry>,
}

impl LocatorConfig {
    /// The compiled-in table for the hotel review site, covering every
    /// logical field the record assembler reads.
    #[must_use]
    pub fn builtin() -> Self {
        let table: [(&str, &str, &str); 12] = [
            ("review_block", "div", "_2wrUUKlw _3hFEdNs8"),
            ("reviewer_name", "a", "ui_header_link _1r_My98y"),
            ("reviewer_name_n_date", "div", "_2fxQ4TOx"),
            ("reviewer_origin", "span", "default _3J15flPT small"),
            ("reviewer_rating", "div", "nf9vGX55"),
            ("reviewer_details", "span", "_3fPsSAYi"),
            ("review_title", "a", "ocfR3SKN"),
            ("review_text", "q", "IRsGHoPm"),
            ("stay_date", "span", "_34Xs-BQm"),
            ("trip_type", "span", "_2bVY3aT5"),
            ("amenity_group", "div", "_3ErKuh24 _1OrVnQ-J"),
            ("amenity", "span", "_3-8hSrXs"),
        ];

        let fields = table
            .into_iter()
            .map(|(name, element, class)| {
                (
                    name.to_owned(),
                    LocatorEntry {
                        element: element.to_owned(),
                        class: class.to_owned(),
                    },
                )
            })
            .collect();

        Self { fields }
    }

    /// Parses a locator table from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on malformed YAML or a non-conforming
    /// shape.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a locator table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Yaml`] if its contents do not parse.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Serializes the table back to YAML, e.g. to seed an operator-owned
    /// locator file from the built-in snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_twelve_fields() {
        let config = LocatorConfig::builtin();
        assert_eq!(config.fields.len(), 12);
        assert!(config.fields.contains_key("review_block"));
        assert!(config.fields.contains_key("amenity"));
    }

    #[test]
    fn yaml_round_trip_is_lossless() {
        let config = LocatorConfig::builtin();
        let yaml = config.to_yaml_string().unwrap();
        let reparsed = LocatorConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn parses_hand_written_yaml() {
        let yaml = r#"
review_block:
  element: div
  class: "review card"
reviewer_name:
  element: a
  class: "member-name"
"#;
        let config = LocatorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.fields.len(), 2);
        assert_eq!(config.fields["review_block"].element, "div");
        assert_eq!(config.fields["reviewer_name"].class, "member-name");
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = LocatorConfig::from_yaml_str("review_block: [not a map").unwrap_err();
        assert!(matches!(err, crate::ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LocatorConfig::from_yaml_file(Path::new("/nonexistent/locators.yaml"))
            .unwrap_err();
        assert!(matches!(err, crate::ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/locators.yaml"));
    }
}
