//! The locator schema: logical fields compiled to CSS selectors.
//!
//! Field names are a closed enum so that call sites cannot reference a
//! field the code does not know about — the string-keyed lookup of the
//! original site map survives only at the configuration boundary, where
//! operator-supplied YAML keys are validated into [`Field`] values before
//! a [`Schema`] exists. After construction the schema is immutable; there
//! is no way to add, remove, or swap a locator mid-crawl.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use revcrawl_core::{LocatorConfig, LocatorEntry};
use scraper::Selector;

use crate::error::ExtractError;

/// Logical fields of a review page.
///
/// Singular fields (`ReviewerName`, `ReviewTitle`, ...) are read with
/// [`crate::extract::find_one`] / [`crate::extract::text_one`];
/// multi-valued fields (`ReviewBlock`, `ReviewerDetails`, `AmenityGroup`,
/// `AmenityRating`) with the `_all` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// One review's whole DOM region; splitting key for a page.
    ReviewBlock,
    ReviewerName,
    /// The combined "name wrote a review <date>" header line.
    ReviewerNameDate,
    ReviewerOrigin,
    /// Overall bubble rating container. Never carries text; see
    /// [`crate::rating::decode_rating`].
    ReviewerRating,
    /// Contribution / helpful-vote annotation phrases.
    ReviewerDetails,
    ReviewTitle,
    ReviewText,
    StayDate,
    TripType,
    /// One amenity's sub-region (name plus bubble rating).
    AmenityGroup,
    /// The bubble-rating element inside an amenity group.
    AmenityRating,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::ReviewBlock,
        Field::ReviewerName,
        Field::ReviewerNameDate,
        Field::ReviewerOrigin,
        Field::ReviewerRating,
        Field::ReviewerDetails,
        Field::ReviewTitle,
        Field::ReviewText,
        Field::StayDate,
        Field::TripType,
        Field::AmenityGroup,
        Field::AmenityRating,
    ];

    /// The snake_case name used in locator YAML files. These are the
    /// original site-map keys, kept stable so existing locator files keep
    /// working ("amenity" is the rating element, not the group).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::ReviewBlock => "review_block",
            Field::ReviewerName => "reviewer_name",
            Field::ReviewerNameDate => "reviewer_name_n_date",
            Field::ReviewerOrigin => "reviewer_origin",
            Field::ReviewerRating => "reviewer_rating",
            Field::ReviewerDetails => "reviewer_details",
            Field::ReviewTitle => "review_title",
            Field::ReviewText => "review_text",
            Field::StayDate => "stay_date",
            Field::TripType => "trip_type",
            Field::AmenityGroup => "amenity_group",
            Field::AmenityRating => "amenity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ExtractError::UnknownField {
                name: s.to_owned(),
            })
    }
}

/// Immutable field → selector table.
///
/// Selectors are compiled once here; extraction never parses selector
/// strings on the hot path. A schema built from external configuration may
/// register only a subset of fields — looking up an unregistered field is
/// a hard [`ExtractError::UnknownField`], regardless of fragment content.
#[derive(Debug)]
pub struct Schema {
    selectors: HashMap<Field, Selector>,
}

impl Schema {
    /// The compiled-in locator table for the hotel review site.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table fails to compile, which would be a
    /// defect in the table itself; the `builtin_table_compiles` test pins
    /// this down.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_config(&LocatorConfig::builtin()).expect("built-in locator table compiles")
    }

    /// Compiles an operator-supplied locator table into a schema.
    ///
    /// Locators match on element kind plus *exact* `class` attribute
    /// value, mirroring how the original site map addressed elements.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnknownField`] for a config key that is not
    /// a known logical field, and [`ExtractError::Selector`] for an entry
    /// that does not compile to a valid CSS selector.
    pub fn from_config(config: &LocatorConfig) -> Result<Self, ExtractError> {
        let mut selectors = HashMap::with_capacity(config.fields.len());
        for (name, entry) in &config.fields {
            let field = Field::from_str(name)?;
            selectors.insert(field, compile_locator(field, entry)?);
        }
        Ok(Self { selectors })
    }

    /// Looks up the compiled selector for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnknownField`] if this schema did not
    /// register the field.
    pub fn locate(&self, field: Field) -> Result<&Selector, ExtractError> {
        self.selectors
            .get(&field)
            .ok_or_else(|| ExtractError::UnknownField {
                name: field.as_str().to_owned(),
            })
    }
}

/// Builds the exact-attribute selector `element[class="..."]` for a
/// locator entry.
fn compile_locator(field: Field, entry: &LocatorEntry) -> Result<Selector, ExtractError> {
    let css = format!(r#"{}[class="{}"]"#, entry.element, entry.class);
    Selector::parse(&css).map_err(|e| ExtractError::Selector {
        field,
        reason: e.to_string(),
    })
}
