//! Schema-driven extraction of review records from rendered page markup.
//!
//! The pipeline has three layers, composed leaf-to-root:
//!
//! 1. [`schema`] — the immutable field → locator table, compiled to CSS
//!    selectors at construction time.
//! 2. [`extract`] / [`rating`] / [`numbers`] — field-level extraction:
//!    text lookup, class-encoded rating decoding, and the contribution /
//!    helpful-vote phrase splitter.
//! 3. [`assemble`] — per-page record assembly: split a document into review
//!    blocks and turn each block into one [`revcrawl_core::ReviewRecord`].
//!
//! Everything here is synchronous and free of I/O. Fetching pages, waiting
//! for loads, and expanding "Read more" truncations are the caller's job;
//! this crate receives fully-rendered markup as a string.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod numbers;
pub mod rating;
pub mod schema;

pub use assemble::{assemble, assemble_page, split_page, PageOutcome};
pub use error::ExtractError;
pub use extract::ExtractedField;
pub use schema::{Field, Schema};
