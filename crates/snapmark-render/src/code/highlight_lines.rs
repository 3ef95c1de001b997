//! Highlighted-line range parsing for fence info strings.
//!
//! A fence like ```` ```js{1,4-6} ```` asks for lines 1 and 4 through 6 to
//! be marked in the rendered block. The `{…}` spec may appear anywhere after
//! the language tag.

use std::sync::LazyLock;

use regex::Regex;

/// Inclusive 1-indexed line range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

/// `{N}` / `{N-M}` / `{N,M-K,…}` — at least one group, digits only.
static RANGE_SPEC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+(?:-\d+)?(?:,\d+(?:-\d+)?)*)\}").expect("range spec pattern"));

/// Parse the highlight-range spec out of a fence info string.
///
/// Returns `None` when the info string is empty/whitespace, carries no
/// `{…}` block, or the block does not match the range grammar — a
/// malformed spec is indistinguishable from an absent one. An inverted
/// range (`5-3`) parses fine and simply never matches a line.
pub fn resolve_highlight_lines(info: &str) -> Option<Vec<LineRange>> {
    if info.trim().is_empty() {
        return None;
    }
    let captures = RANGE_SPEC.captures(info)?;
    let spec = captures.get(1)?.as_str();

    let mut ranges = Vec::new();
    for part in spec.split(',') {
        let range = match part.split_once('-') {
            Some((start, end)) => LineRange {
                start: start.parse().ok()?,
                end: end.parse().ok()?,
            },
            None => {
                let line = part.parse().ok()?;
                LineRange { start: line, end: line }
            }
        };
        ranges.push(range);
    }
    Some(ranges)
}

/// Whether a 1-indexed emitted line position falls inside any range.
pub fn is_highlight_line(line: usize, ranges: &[LineRange]) -> bool {
    ranges.iter().any(|range| line >= range.start && line <= range.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> LineRange {
        LineRange { start, end }
    }

    #[test]
    fn test_no_spec_is_none() {
        assert_eq!(resolve_highlight_lines(""), None);
        assert_eq!(resolve_highlight_lines("   "), None);
        assert_eq!(resolve_highlight_lines("js"), None);
        assert_eq!(resolve_highlight_lines("js:no-line-numbers"), None);
    }

    #[test]
    fn test_single_line_and_range() {
        assert_eq!(resolve_highlight_lines("js{2}"), Some(vec![range(2, 2)]));
        assert_eq!(
            resolve_highlight_lines("js{1,3-5}"),
            Some(vec![range(1, 1), range(3, 5)])
        );
    }

    #[test]
    fn test_spec_anywhere_after_tag() {
        assert_eq!(
            resolve_highlight_lines("rust:no-line-numbers{7-9}"),
            Some(vec![range(7, 9)])
        );
    }

    #[test]
    fn test_malformed_spec_is_none() {
        assert_eq!(resolve_highlight_lines("js{}"), None);
        assert_eq!(resolve_highlight_lines("js{a-b}"), None);
        assert_eq!(resolve_highlight_lines("js{1;3}"), None);
    }

    #[test]
    fn test_is_highlight_line_inclusive() {
        let ranges = vec![range(3, 5)];
        assert!(is_highlight_line(3, &ranges));
        assert!(is_highlight_line(4, &ranges));
        assert!(is_highlight_line(5, &ranges));
        assert!(!is_highlight_line(2, &ranges));
        assert!(!is_highlight_line(6, &ranges));
    }

    #[test]
    fn test_inverted_range_never_matches() {
        let ranges = resolve_highlight_lines("js{5-3}").unwrap();
        assert!((1..=10).all(|line| !is_highlight_line(line, &ranges)));
    }

    #[test]
    fn test_out_of_range_indices_accepted() {
        let ranges = resolve_highlight_lines("js{100}").unwrap();
        assert!(!is_highlight_line(1, &ranges));
        assert!(is_highlight_line(100, &ranges));
    }
}
