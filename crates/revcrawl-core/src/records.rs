//! Normalized review records and the session-level accumulator.
//!
//! ## Absence conventions
//!
//! Review pages are partial by nature: not every reviewer fills every
//! optional field. A missing field never fails extraction, it lands here as
//! a typed default instead:
//!
//! - text fields: empty string,
//! - `reviewer_rating`: `-1` (ratings are 1–5, so `-1` is unambiguous),
//! - `contributions` / `helpful_votes`: `0`,
//! - `amenity_ratings`: empty vec.

use serde::{Deserialize, Serialize};

/// One reviewer's 1–5 rating of a single hotel amenity ("Location",
/// "Cleanliness", ...), kept in the order the amenities appear on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenityRating {
    pub name: String,
    pub rating: i32,
}

/// A single review, fully assembled from one review block of a rendered
/// page. Immutable once built; re-assembling the same block yields an
/// identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Display name of the reviewer. Empty when withheld.
    pub reviewer_name: String,

    /// Raw "name wrote a review <date>" line as shown on the page. Date
    /// normalization is left to downstream consumers.
    pub review_date_raw: String,

    /// Reviewer's self-reported home location. Empty when withheld.
    pub reviewer_origin: String,

    /// Overall bubble rating, 1–5, or `-1` when the rating element is
    /// missing from the block.
    pub reviewer_rating: i32,

    /// Lifetime contribution count of the reviewer.
    pub contributions: u32,

    /// Helpful-vote count of the reviewer.
    pub helpful_votes: u32,

    /// Review headline.
    pub title: String,

    /// Full review body. The page is assumed already expanded ("Read more"
    /// clicked) before it reaches the extractor.
    pub text: String,

    /// Raw "Date of stay: ..." text. Empty when withheld.
    pub stay_date: String,

    /// Trip type label (solo, family, business, ...). Empty when withheld.
    pub trip_type: String,

    /// Per-amenity bubble ratings in document order.
    pub amenity_ratings: Vec<AmenityRating>,
}

/// Append-only collection of records across one crawl session.
///
/// The extractor appends to this once per page; appends preserve arrival
/// order within a single caller. `review_count` tracks how many review
/// blocks were processed in total, including blocks that failed assembly,
/// so it can run ahead of `len()`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PageResultSet {
    records: Vec<ReviewRecord>,
    review_count: usize,
}

impl PageResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one assembled record, preserving arrival order.
    pub fn append(&mut self, record: ReviewRecord) {
        self.records.push(record);
    }

    /// Bumps the cumulative count of processed review blocks by `fragments`.
    ///
    /// Called once per page with the number of blocks found on that page,
    /// not re-derived from `len()` — failed blocks count as processed.
    pub fn note_processed(&mut self, fragments: usize) {
        self.review_count += fragments;
    }

    /// Read-only view of the collected records, for export.
    #[must_use]
    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Cumulative number of review blocks processed across all pages.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.review_count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
