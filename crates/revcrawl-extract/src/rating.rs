//! Decoding of class-encoded bubble ratings.
//!
//! The review site never renders ratings as text. A rating element wraps a
//! child whose *second* class token carries the value in its second-to-last
//! character: `"ui_rating bubble_50"` is a 5-bubble rating. The decoders
//! here isolate that one structural rule so a markup-schema change touches
//! a single place.

use scraper::ElementRef;

use crate::error::ExtractError;
use crate::extract::find_all;
use crate::schema::{Field, Schema};

/// Sentinel for "no decodable rating". Absent ratings are expected,
/// frequent input, so decoding failure is a value, not an error.
pub const RATING_UNKNOWN: i32 = -1;

/// Decodes the rating carried by `element`'s first class-bearing
/// descendant.
///
/// Returns [`RATING_UNKNOWN`] when the element has no class-bearing
/// descendant, the class attribute has fewer than two tokens, or the
/// second token's second-to-last character is not a digit in 1–5.
#[must_use]
pub fn decode_rating(element: ElementRef<'_>) -> i32 {
    element
        .descendants()
        .skip(1) // a traversal starts at the element itself
        .filter_map(ElementRef::wrap)
        .find_map(|descendant| descendant.value().attr("class"))
        .map_or(RATING_UNKNOWN, decode_class_attr)
}

/// Batch form for amenity-style rating blocks: finds every element
/// matching `field` inside `container` and decodes each, in document
/// order. Elements whose rating does not decode are skipped, so the result
/// holds only values in 1–5; it is empty when nothing matches.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// `field`.
pub fn decode_ratings(
    schema: &Schema,
    container: ElementRef<'_>,
    field: Field,
) -> Result<Vec<i32>, ExtractError> {
    Ok(find_all(schema, container, field)?
        .into_iter()
        .map(decode_rating)
        .filter(|&rating| rating != RATING_UNKNOWN)
        .collect())
}

/// Decodes one class attribute value: second whitespace token, second-to-
/// last character, as a digit 1–5.
fn decode_class_attr(class_attr: &str) -> i32 {
    let mut tokens = class_attr.split_whitespace();
    let Some(token) = tokens.nth(1) else {
        return RATING_UNKNOWN;
    };

    let chars: Vec<char> = token.chars().collect();
    let Some(&encoded) = chars.len().checked_sub(2).and_then(|i| chars.get(i)) else {
        return RATING_UNKNOWN;
    };

    match encoded.to_digit(10).and_then(|d| i32::try_from(d).ok()) {
        Some(rating @ 1..=5) => rating,
        _ => RATING_UNKNOWN,
    }
}
