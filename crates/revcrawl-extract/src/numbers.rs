//! Parsing of the reviewer-details annotation phrases.
//!
//! The reviewer header carries zero, one, or two phrases like
//! `"1,416 contributions"` and `"523 helpful votes"`. Counts use a comma
//! thousands separator, which `str::parse` rejects, so the groups are
//! combined by decreasing powers of 1000 instead.

use crate::error::ExtractError;

/// Parses a decimal string with optional comma thousands separators:
/// `"1,416"` → `1416`, `"523"` → `523`, `"2,034,199"` → `2034199`.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] when any group is not a plain
/// decimal number or the combined value overflows `u32`. A number that is
/// present but corrupt is a data-integrity signal, not an absence.
pub fn parse_thousands(input: &str) -> Result<u32, ExtractError> {
    let malformed = |reason: &str| ExtractError::MalformedNumber {
        input: input.to_owned(),
        reason: reason.to_owned(),
    };

    let mut accumulated: u32 = 0;
    for group in input.split(',') {
        let value: u32 = group
            .parse()
            .map_err(|_| malformed("expected decimal digit group"))?;
        accumulated = accumulated
            .checked_mul(1000)
            .and_then(|acc| acc.checked_add(value))
            .ok_or_else(|| malformed("value out of range"))?;
    }
    Ok(accumulated)
}

/// Splits reviewer-detail phrases into `(contributions, helpful_votes)`.
///
/// Each phrase is whitespace-tokenized; the leading token is the count and
/// the remaining tokens label it. Any label token starting with
/// `"contribution"` routes the count to contributions, everything else to
/// helpful votes. When the same kind appears more than once the last
/// occurrence wins. An empty slice yields `(0, 0)`.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] when a phrase is empty or its
/// leading token does not parse as a count.
pub fn split_contributions_votes(details: &[String]) -> Result<(u32, u32), ExtractError> {
    let mut contributions = 0;
    let mut helpful_votes = 0;

    for phrase in details {
        let mut tokens = phrase.split_whitespace();
        let Some(count) = tokens.next() else {
            return Err(ExtractError::MalformedNumber {
                input: phrase.clone(),
                reason: "empty detail phrase".to_owned(),
            });
        };
        let value = parse_thousands(count)?;

        if tokens.any(|token| token.starts_with("contribution")) {
            contributions = value;
        } else {
            helpful_votes = value;
        }
    }

    Ok((contributions, helpful_votes))
}

#[cfg(test)]
#[path = "numbers_test.rs"]
mod numbers_test;
