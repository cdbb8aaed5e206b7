//! Page-level record assembly.
//!
//! A page is split into independent review blocks, and each block is
//! assembled into one [`ReviewRecord`] by running every logical field
//! through the extractors. Assembly is stateless: the only mutable thing
//! in sight is the caller's [`PageResultSet`], which accumulates records
//! across the pages of one crawl session.

use revcrawl_core::{AmenityRating, PageResultSet, ReviewRecord};
use scraper::{ElementRef, Html};

use crate::error::ExtractError;
use crate::extract::{find_all, find_one, rating_one, text_all, text_one};
use crate::numbers::split_contributions_votes;
use crate::rating::{decode_rating, RATING_UNKNOWN};
use crate::schema::{Field, Schema};

/// What happened to one page's review blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOutcome {
    /// Blocks successfully assembled into records.
    pub assembled: usize,
    /// Blocks skipped because a present field was corrupt.
    pub failed: usize,
}

/// Segments one parsed page into its review blocks, in page order.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] if the schema does not register
/// the review-block field.
pub fn split_page<'a>(
    schema: &Schema,
    document: &'a Html,
) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    find_all(schema, document.root_element(), Field::ReviewBlock)
}

/// Assembles one review block into a [`ReviewRecord`].
///
/// Missing fields resolve to their typed defaults; see the record's
/// documentation for the conventions. The reviewer rating goes through the
/// class decoder rather than text extraction, since it is never present as
/// text.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] for an unregistered field and
/// [`ExtractError::MalformedNumber`] when a reviewer-details phrase is
/// present but corrupt.
pub fn assemble(schema: &Schema, fragment: ElementRef<'_>) -> Result<ReviewRecord, ExtractError> {
    let reviewer_name = text_one(schema, fragment, Field::ReviewerName)?.into_text();
    let review_date_raw = text_one(schema, fragment, Field::ReviewerNameDate)?.into_text();
    let reviewer_origin = text_one(schema, fragment, Field::ReviewerOrigin)?.into_text();
    let title = text_one(schema, fragment, Field::ReviewTitle)?.into_text();
    let text = text_one(schema, fragment, Field::ReviewText)?.into_text();
    let stay_date = text_one(schema, fragment, Field::StayDate)?.into_text();
    let trip_type = text_one(schema, fragment, Field::TripType)?.into_text();

    let reviewer_rating = rating_one(schema, fragment, Field::ReviewerRating)?.into_rating();

    let details = text_all(schema, fragment, Field::ReviewerDetails)?.into_items();
    let (contributions, helpful_votes) = split_contributions_votes(&details)?;

    let amenity_ratings = assemble_amenities(schema, fragment)?;

    Ok(ReviewRecord {
        reviewer_name,
        review_date_raw,
        reviewer_origin,
        reviewer_rating,
        contributions,
        helpful_votes,
        title,
        text,
        stay_date,
        trip_type,
        amenity_ratings,
    })
}

/// Two-level amenity traversal: locate each amenity group, take the
/// group's first non-empty text node as the amenity name and pair it with
/// the decoded rating of the bubble element inside that group. Groups with
/// no name or no decodable rating are dropped; order follows the page.
fn assemble_amenities(
    schema: &Schema,
    fragment: ElementRef<'_>,
) -> Result<Vec<AmenityRating>, ExtractError> {
    let mut amenities = Vec::new();

    for group in find_all(schema, fragment, Field::AmenityGroup)? {
        let Some(name) = first_text(group) else {
            continue;
        };
        let Some(bubble) = find_one(schema, group, Field::AmenityRating)? else {
            continue;
        };
        let rating = decode_rating(bubble);
        if rating != RATING_UNKNOWN {
            amenities.push(AmenityRating { name, rating });
        }
    }

    Ok(amenities)
}

/// First non-whitespace text node of an element, trimmed.
fn first_text(element: ElementRef<'_>) -> Option<String> {
    element
        .text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(ToOwned::to_owned)
}

/// The orchestration entry point: parses one fully-rendered page, splits
/// it into review blocks, assembles each, and appends the records to
/// `results` in page order.
///
/// A block whose present data is corrupt is isolated: it is logged,
/// counted in [`PageOutcome::failed`], and the rest of the page survives.
/// `results.review_count` grows by the number of blocks processed, failed
/// ones included.
///
/// # Errors
///
/// Returns [`ExtractError::UnknownField`] or [`ExtractError::Selector`]
/// on schema misconfiguration — programmer errors that must not be
/// swallowed per-block.
pub fn assemble_page(
    schema: &Schema,
    page_html: &str,
    results: &mut PageResultSet,
) -> Result<PageOutcome, ExtractError> {
    let document = Html::parse_document(page_html);
    let fragments = split_page(schema, &document)?;

    let mut outcome = PageOutcome {
        assembled: 0,
        failed: 0,
    };

    for (index, fragment) in fragments.iter().enumerate() {
        match assemble(schema, *fragment) {
            Ok(record) => {
                results.append(record);
                outcome.assembled += 1;
            }
            Err(err @ (ExtractError::UnknownField { .. } | ExtractError::Selector { .. })) => {
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping review block with corrupt data");
                outcome.failed += 1;
            }
        }
    }

    results.note_processed(fragments.len());
    tracing::debug!(
        blocks = fragments.len(),
        assembled = outcome.assembled,
        failed = outcome.failed,
        "page assembled"
    );

    Ok(outcome)
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod assemble_test;
