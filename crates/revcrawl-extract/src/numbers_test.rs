use super::*;

fn phrases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// -----------------------------------------------------------------------
// parse_thousands
// -----------------------------------------------------------------------

#[test]
fn plain_number_without_separator() {
    assert_eq!(parse_thousands("523").unwrap(), 523);
}

#[test]
fn one_separator() {
    assert_eq!(parse_thousands("1,416").unwrap(), 1416);
}

#[test]
fn two_separators() {
    assert_eq!(parse_thousands("2,034,199").unwrap(), 2_034_199);
}

#[test]
fn zero_parses() {
    assert_eq!(parse_thousands("0").unwrap(), 0);
}

#[test]
fn matches_plain_read_after_stripping_separators() {
    // Round-trip property against a literal reference.
    for raw in ["7", "84", "999", "1,000", "12,345", "987,654,321"] {
        let stripped: u32 = raw.replace(',', "").parse().unwrap();
        assert_eq!(parse_thousands(raw).unwrap(), stripped, "input {raw}");
    }
}

#[test]
fn non_numeric_group_is_malformed() {
    let err = parse_thousands("1,4x6").unwrap_err();
    assert!(matches!(
        err,
        ExtractError::MalformedNumber { input, .. } if input == "1,4x6"
    ));
}

#[test]
fn empty_string_is_malformed() {
    assert!(parse_thousands("").is_err());
}

#[test]
fn trailing_separator_is_malformed() {
    assert!(parse_thousands("1,").is_err());
}

#[test]
fn negative_number_is_malformed() {
    assert!(parse_thousands("-5").is_err());
}

// -----------------------------------------------------------------------
// split_contributions_votes
// -----------------------------------------------------------------------

#[test]
fn empty_details_default_to_zero() {
    assert_eq!(split_contributions_votes(&[]).unwrap(), (0, 0));
}

#[test]
fn contributions_only() {
    let details = phrases(&["1,416 contributions"]);
    assert_eq!(split_contributions_votes(&details).unwrap(), (1416, 0));
}

#[test]
fn helpful_votes_only() {
    let details = phrases(&["523 helpful votes"]);
    assert_eq!(split_contributions_votes(&details).unwrap(), (0, 523));
}

#[test]
fn both_kinds_in_page_order() {
    let details = phrases(&["1,416 contributions", "523 helpful votes"]);
    assert_eq!(split_contributions_votes(&details).unwrap(), (1416, 523));
}

#[test]
fn singular_contribution_label_matches() {
    let details = phrases(&["1 contribution"]);
    assert_eq!(split_contributions_votes(&details).unwrap(), (1, 0));
}

#[test]
fn last_occurrence_of_a_kind_wins() {
    let details = phrases(&["10 contributions", "25 contributions"]);
    assert_eq!(split_contributions_votes(&details).unwrap(), (25, 0));
}

#[test]
fn unlabelled_phrase_routes_to_votes() {
    // Mirrors the site's habit of dropping "helpful" from short labels.
    let details = phrases(&["42 votes"]);
    assert_eq!(split_contributions_votes(&details).unwrap(), (0, 42));
}

#[test]
fn corrupt_count_propagates() {
    let details = phrases(&["abc contributions"]);
    let err = split_contributions_votes(&details).unwrap_err();
    assert!(matches!(err, ExtractError::MalformedNumber { .. }));
}

#[test]
fn whitespace_only_phrase_is_malformed() {
    let details = phrases(&["   "]);
    assert!(split_contributions_votes(&details).is_err());
}
