//! Stage result selection.

use regex::Regex;
use tracing::warn;

use super::models::{CandidateResult, Selection};

/// Pick results from one stage's candidates.
///
/// - all digits: 1-based index, out of range selects nothing
/// - empty: every candidate
/// - anything else: regex over the message text, first match wins; no match
///   (or an invalid pattern) falls back to every candidate
pub fn select(candidates: Vec<CandidateResult>, selector: &str) -> Selection {
    if is_index(selector) {
        return select_index(candidates, selector);
    }

    if selector.is_empty() {
        return Selection::All(candidates);
    }

    let pattern = match Regex::new(selector) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!(selector, error = %e, "Invalid selector pattern, keeping all results");
            return Selection::All(candidates);
        }
    };

    let mut candidates = candidates;
    match candidates
        .iter()
        .position(|c| c.text().is_some_and(|text| pattern.is_match(text)))
    {
        Some(position) => Selection::One(candidates.swap_remove(position)),
        None => Selection::All(candidates),
    }
}

fn is_index(selector: &str) -> bool {
    !selector.is_empty() && selector.bytes().all(|b| b.is_ascii_digit())
}

fn select_index(candidates: Vec<CandidateResult>, selector: &str) -> Selection {
    let Some(index) = selector.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
        return Selection::Empty;
    };

    candidates
        .into_iter()
        .nth(index)
        .map(Selection::One)
        .unwrap_or(Selection::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::text_candidate;

    fn candidates() -> Vec<CandidateResult> {
        vec![
            text_candidate("1", "hello"),
            text_candidate("2", "h3ll0 eleet"),
            text_candidate("3", "HELLO"),
        ]
    }

    #[test]
    fn test_numeric_selector_is_one_based() {
        let selection = select(candidates(), "2");
        assert_eq!(selection, Selection::One(text_candidate("2", "h3ll0 eleet")));
    }

    #[test]
    fn test_numeric_selector_out_of_range() {
        assert_eq!(select(candidates(), "0"), Selection::Empty);
        assert_eq!(select(candidates(), "4"), Selection::Empty);
        assert_eq!(select(candidates(), "99999999999999999999999"), Selection::Empty);
    }

    #[test]
    fn test_empty_selector_takes_everything() {
        assert_eq!(select(candidates(), ""), Selection::All(candidates()));
    }

    #[test]
    fn test_regex_selector_first_match_wins() {
        let selection = select(candidates(), "(?i)^hello$");
        assert_eq!(selection, Selection::One(text_candidate("1", "hello")));

        let selection = select(candidates(), "eleet");
        assert_eq!(selection.handoff_text(), Some("h3ll0 eleet"));
    }

    #[test]
    fn test_regex_without_match_falls_back_to_all() {
        assert_eq!(select(candidates(), "nothing"), Selection::All(candidates()));
    }

    #[test]
    fn test_invalid_regex_falls_back_to_all() {
        assert_eq!(select(candidates(), "(unclosed"), Selection::All(candidates()));
    }

    #[test]
    fn test_signed_number_is_a_pattern() {
        // "-1" is not an index, and matches no text
        assert_eq!(select(candidates(), "-1"), Selection::All(candidates()));
    }
}
