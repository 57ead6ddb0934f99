//! Pipe syntax: `<free text> [| <handle>[:<selector>]]* $`

use lazy_static::lazy_static;
use regex::Regex;

use super::models::{ParsedQuery, StageDescriptor};

lazy_static! {
    // Everything before a trailing `$`, which may be followed by whitespace
    static ref TERMINATED_QUERY: Regex = Regex::new(r"(?s)\A(.*)\$\s*\z").unwrap();
}

/// Split a raw inline query into its free text and stages.
///
/// Without the trailing `$` the whole string is free text and there are no
/// stages. Each stage splits on its first `:` only, so selectors may contain
/// colons.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let Some(content) = TERMINATED_QUERY
        .captures(raw)
        .and_then(|captures| captures.get(1))
    else {
        return ParsedQuery::plain(raw);
    };

    let mut segments = content.as_str().split('|').map(str::trim);
    let text = segments.next().unwrap_or_default().to_string();

    let stages = segments
        .map(|segment| match segment.split_once(':') {
            Some((handle, selector)) => StageDescriptor::new(handle.trim_end(), selector),
            None => StageDescriptor::new(segment, ""),
        })
        .collect();

    ParsedQuery { text, stages }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unterminated_query_is_plain_text() {
        for raw in ["hello world", "a | @bot:1", "price is 5$ today", ""] {
            let parsed = parse_query(raw);
            assert_eq!(parsed.text, raw);
            assert!(!parsed.is_piped());
        }
    }

    #[test]
    fn test_parse_multi_stage_query() {
        let parsed = parse_query("draw a cat | @filtersbot:eleet | @lolcatzbot $");

        assert_eq!(parsed.text, "draw a cat");
        assert_eq!(
            parsed.stages,
            vec![
                StageDescriptor::new("@filtersbot", "eleet"),
                StageDescriptor::new("@lolcatzbot", ""),
            ]
        );
    }

    #[test]
    fn test_terminator_tolerates_trailing_whitespace() {
        let parsed = parse_query("hi | @bot:2$  \n");
        assert_eq!(parsed.text, "hi");
        assert_eq!(parsed.stages, vec![StageDescriptor::new("@bot", "2")]);
    }

    #[test]
    fn test_selector_keeps_extra_colons() {
        let parsed = parse_query("time | @clockbot:\\d+:\\d+ $");
        assert_eq!(parsed.stages[0].provider_handle, "@clockbot");
        assert_eq!(parsed.stages[0].selector, "\\d+:\\d+");
    }

    #[test]
    fn test_empty_handle_is_self_referential() {
        let parsed = parse_query("hello | :3 | @bot $");
        assert!(parsed.stages[0].is_self_referential());
        assert!(!parsed.stages[1].is_self_referential());

        let parsed = parse_query("hello | $");
        assert_eq!(parsed.stages.len(), 1);
        assert!(parsed.stages[0].is_self_referential());
    }

    #[test]
    fn test_terminated_query_without_stages() {
        let parsed = parse_query("just text $");
        assert_eq!(parsed.text, "just text");
        assert!(!parsed.is_piped());
    }

    #[test]
    fn test_multiline_free_text() {
        let parsed = parse_query("line one\nline two | @bot $");
        assert_eq!(parsed.text, "line one\nline two");
        assert_eq!(parsed.stages.len(), 1);
    }
}
