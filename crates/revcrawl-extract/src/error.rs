use thiserror::Error;

use crate::schema::Field;

/// Errors raised by the extraction pipeline.
///
/// The taxonomy is deliberately asymmetric: a field locator that finds
/// nothing on a given fragment is *not* an error (callers get a typed
/// default instead), because partial review blocks are normal input. Only
/// schema misconfiguration and present-but-corrupt numeric data surface
/// here.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A logical field name is not registered in the locator schema.
    /// This is a programmer or configuration error and aborts the
    /// operation that triggered it.
    #[error("unknown field \"{name}\" in locator schema")]
    UnknownField { name: String },

    /// A locator entry could not be compiled into a CSS selector.
    /// Raised at schema construction, never mid-crawl.
    #[error("invalid locator for field {field}: {reason}")]
    Selector { field: Field, reason: String },

    /// A number-like phrase was present but did not parse, e.g. a
    /// corrupted thousands-separated count. Distinct from absence, which
    /// silently defaults to zero.
    #[error("malformed number \"{input}\": {reason}")]
    MalformedNumber { input: String, reason: String },
}
