//! Field-level extraction over a parsed fragment.
//!
//! Every lookup here is scoped to the given fragment (descendants only,
//! the fragment's own element never matches) and preserves document order.
//! Finding nothing is never an error: singular lookups yield
//! [`ExtractedField::Absent`], batch lookups an empty list. The only hard
//! failure is a lookup against a field the schema does not register.

use scraper::ElementRef;

use crate::error::ExtractError;
use crate::rating;
use crate::schema::{Field, Schema};

/// The atomic result of applying one field locator to a fragment, with one
/// defined default per field type so "not found" means the same thing at
/// every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedField {
    /// Locator found no match; resolves to the field type's default.
    Absent,
    /// Concatenated text content of the first matching element.
    Text(String),
    /// A class-encoded bubble rating, 1–5.
    EncodedRating(i32),
    /// Text of every matching element, in document order.
    Items(Vec<String>),
}

impl ExtractedField {
    /// Resolves to the text default: the contained text, or `""` when
    /// absent or of another type.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            ExtractedField::Text(text) => text,
            _ => String::new(),
        }
    }

    /// Resolves to the list default: the contained items, or `[]`.
    #[must_use]
    pub fn into_items(self) -> Vec<String> {
        match self {
            ExtractedField::Items(items) => items,
            _ => Vec::new(),
        }
    }

    /// Resolves to the rating default: the contained rating, or `-1`.
    #[must_use]
    pub fn into_rating(self) -> i32 {
        match self {
            ExtractedField::EncodedRating(rating) => rating,
            _ => -1,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, ExtractedField::Absent)
    }
}

/// Returns the first element matching `field` inside `fragment`, or `None`.
///
/// The raw element handle is for callers that need further structural
/// inspection (rating decoding, nested traversal); plain text callers use
/// [`text_one`].
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// `field`.
pub fn find_one<'a>(
    schema: &Schema,
    fragment: ElementRef<'a>,
    field: Field,
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let selector = schema.locate(field)?;
    Ok(fragment.select(selector).next())
}

/// Returns every element matching `field` inside `fragment`, in document
/// order. Zero matches is a legitimate empty result, never a failure.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// `field`.
pub fn find_all<'a>(
    schema: &Schema,
    fragment: ElementRef<'a>,
    field: Field,
) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let selector = schema.locate(field)?;
    Ok(fragment.select(selector).collect())
}

/// Extracts the concatenated text of the first element matching `field`.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// `field`.
pub fn text_one(
    schema: &Schema,
    fragment: ElementRef<'_>,
    field: Field,
) -> Result<ExtractedField, ExtractError> {
    Ok(match find_one(schema, fragment, field)? {
        Some(element) => ExtractedField::Text(element.text().collect()),
        None => ExtractedField::Absent,
    })
}

/// Extracts the concatenated text of every element matching `field`, in
/// document order.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// `field`.
pub fn text_all(
    schema: &Schema,
    fragment: ElementRef<'_>,
    field: Field,
) -> Result<ExtractedField, ExtractError> {
    let items = find_all(schema, fragment, field)?
        .into_iter()
        .map(|element| element.text().collect())
        .collect();
    Ok(ExtractedField::Items(items))
}

/// Extracts and decodes the class-encoded rating of the first element
/// matching `field`. Both a missing element and an undecodable one resolve
/// to [`ExtractedField::Absent`] — missing bubble ratings are common and
/// must not halt a crawl.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// `field`.
pub fn rating_one(
    schema: &Schema,
    fragment: ElementRef<'_>,
    field: Field,
) -> Result<ExtractedField, ExtractError> {
    Ok(match find_one(schema, fragment, field)? {
        Some(element) => match rating::decode_rating(element) {
            -1 => ExtractedField::Absent,
            decoded => ExtractedField::EncodedRating(decoded),
        },
        None => ExtractedField::Absent,
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
