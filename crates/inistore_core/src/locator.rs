//! Section and key location.
//!
//! Every accessor and mutator runs these scans against a line view. They are
//! stateless: positions returned here are only valid until the next edit of
//! the view, so callers re-scan after every mutation.
//!
//! A section starts after the first line exactly equal to `[name]` and ends
//! before the first boundary: a blank line, any line starting with `[`, or
//! the end of the view.

use std::ops::Range;

/// Formats the header line for `section`.
#[must_use]
pub fn header(section: &str) -> String {
    format!("[{section}]")
}

/// Returns true if `line` is a comment.
#[must_use]
pub fn is_comment(line: &str) -> bool {
    line.starts_with(';')
}

/// Returns true if `line` ends the section it appears in.
#[must_use]
pub fn is_boundary(line: &str) -> bool {
    line.is_empty() || line.starts_with('[')
}

/// Splits an entry line at its first `=` into key and value.
///
/// Returns `None` for lines without a separator.
#[must_use]
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
}

fn is_header_of(line: &str, section: &str) -> bool {
    line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) == Some(section)
}

/// Returns the index of the first header line for `section`.
#[must_use]
pub fn find_section<S: AsRef<str>>(lines: &[S], section: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| is_header_of(line.as_ref(), section))
}

/// Returns the range of body lines of `section`, excluding the header and
/// the boundary line.
#[must_use]
pub fn section_body<S: AsRef<str>>(lines: &[S], section: &str) -> Option<Range<usize>> {
    let start = find_section(lines, section)? + 1;
    let end = lines[start..]
        .iter()
        .position(|line| is_boundary(line.as_ref()))
        .map_or(lines.len(), |offset| start + offset);
    Some(start..end)
}

/// A located entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch<'a> {
    /// Index of the entry line in the view.
    pub index: usize,
    /// Everything after the first `=`.
    pub value: &'a str,
}

/// Finds the first entry for `key` inside `section`.
///
/// Later entries with the same key are never reached.
#[must_use]
pub fn find_key<'a, S: AsRef<str>>(
    lines: &'a [S],
    section: &str,
    key: &str,
) -> Option<KeyMatch<'a>> {
    let body = section_body(lines, section)?;
    lines[body.clone()]
        .iter()
        .zip(body)
        .find_map(|(line, index)| match split_entry(line.as_ref()) {
            Some((name, value)) if name == key => Some(KeyMatch { index, value }),
            _ => None,
        })
}

/// Returns the `key=value` lines of `section` in document order.
///
/// Lines inside the section that carry no `=` are skipped.
#[must_use]
pub fn section_lines<'a, S: AsRef<str>>(lines: &'a [S], section: &str) -> Vec<&'a str> {
    let Some(body) = section_body(lines, section) else {
        return Vec::new();
    };
    lines[body]
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| split_entry(line).is_some())
        .collect()
}

/// Returns the names of all sections in document order.
///
/// A header is any line that starts with `[` and ends with `]`.
#[must_use]
pub fn section_names<S: AsRef<str>>(lines: &[S]) -> Vec<&str> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| line.len() >= 2 && line.starts_with('[') && line.ends_with(']'))
        .map(|line| &line[1..line.len() - 1])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(text: &str) -> Vec<String> {
        text.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn header_format() {
        assert_eq!(header("Common"), "[Common]");
        assert_eq!(header(""), "[]");
    }

    #[test]
    fn find_section_requires_exact_header() {
        let lines = view("[Alpha]\n[alpha]\n [Beta]\n[Beta]");
        assert_eq!(find_section(&lines, "Alpha"), Some(0));
        assert_eq!(find_section(&lines, "alpha"), Some(1));
        assert_eq!(find_section(&lines, "Beta"), Some(3));
        assert_eq!(find_section(&lines, "Gamma"), None);
    }

    #[test]
    fn body_stops_at_blank_line() {
        let lines = view("[A]\nk1=1\n\nk2=2");
        assert_eq!(section_body(&lines, "A"), Some(1..2));
    }

    #[test]
    fn body_stops_at_next_header() {
        let lines = view("[A]\nk1=1\n[B]\nk2=2");
        assert_eq!(section_body(&lines, "A"), Some(1..2));
        assert_eq!(section_body(&lines, "B"), Some(3..4));
    }

    #[test]
    fn body_runs_to_end_of_document() {
        let lines = view("[A]\nk1=1\nk2=2");
        assert_eq!(section_body(&lines, "A"), Some(1..3));
    }

    #[test]
    fn empty_section_body() {
        let lines = view("[A]\n[B]");
        assert_eq!(section_body(&lines, "A"), Some(1..1));
        assert_eq!(section_body(&lines, "B"), Some(2..2));
    }

    #[test]
    fn find_key_in_scenario() {
        let lines = view("[A]\nk1=1\n\n[B]\nk1=2");
        assert_eq!(find_key(&lines, "A", "k1").map(|m| m.value), Some("1"));
        assert_eq!(find_key(&lines, "B", "k1").map(|m| m.index), Some(4));
        assert_eq!(find_key(&lines, "A", "k2"), None);
        assert_eq!(find_key(&lines, "C", "k1"), None);
    }

    #[test]
    fn find_key_compares_whole_key() {
        let lines = view("[A]\nkey1=1\nkey=2");
        let found = find_key(&lines, "A", "key").unwrap();
        assert_eq!(found.index, 2);
        assert_eq!(found.value, "2");
    }

    #[test]
    fn find_key_keeps_extra_separators_in_value() {
        let lines = view("[A]\nurl=a=b=c");
        assert_eq!(find_key(&lines, "A", "url").unwrap().value, "a=b=c");
    }

    #[test]
    fn first_duplicate_wins() {
        let lines = view("[A]\nk=first\nk=second");
        let found = find_key(&lines, "A", "k").unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.value, "first");
    }

    #[test]
    fn key_is_case_sensitive() {
        let lines = view("[A]\nKey=1");
        assert!(find_key(&lines, "A", "key").is_none());
    }

    #[test]
    fn section_lines_skip_noise() {
        let lines = view("[A]\nk1=1\ngarbage\nk2=a=b\n\nk3=3");
        assert_eq!(section_lines(&lines, "A"), vec!["k1=1", "k2=a=b"]);
        assert!(section_lines(&lines, "Missing").is_empty());
    }

    #[test]
    fn names_in_document_order() {
        let lines = view("[B]\nx=1\n\n[A]\n[]\nnot]\n[half");
        assert_eq!(section_names(&lines), vec!["B", "A", ""]);
    }

    #[test]
    fn comment_detection() {
        assert!(is_comment(";foo=bar"));
        assert!(!is_comment("foo=bar;"));
    }
}
