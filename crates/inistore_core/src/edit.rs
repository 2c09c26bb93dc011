//! Mutations of the write view.
//!
//! These functions only touch the in-memory lines; deciding whether and how
//! the result reaches storage is the document's job.

use crate::error::{CoreError, CoreResult};
use crate::locator;

/// Outcome of writing one entry into a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// The section did not exist; `lines` were pushed to the end of the view.
    AppendedSection {
        /// The pushed lines: optional blank separator, header, entry.
        lines: Vec<String>,
    },
    /// An existing entry was replaced in place.
    Updated {
        /// Index of the replaced line.
        index: usize,
    },
    /// A new entry was inserted right after the section header.
    Inserted {
        /// Index of the inserted line.
        index: usize,
    },
}

/// Checks that a write can be represented as a single entry line.
///
/// # Errors
///
/// Returns [`CoreError::InvalidKey`] for empty keys, keys containing `=`, and
/// keys that would read back as a comment or header. Returns
/// [`CoreError::InvalidValue`] if any argument contains a line break.
pub fn validate(section: &str, key: &str, value: &str) -> CoreResult<()> {
    if key.is_empty() {
        return Err(CoreError::invalid_key(key, "key is empty"));
    }
    if key.contains('=') {
        return Err(CoreError::invalid_key(key, "key contains '='"));
    }
    if key.starts_with(';') || key.starts_with('[') {
        return Err(CoreError::invalid_key(key, "key starts with ';' or '['"));
    }
    for (what, text) in [("section", section), ("key", key), ("value", value)] {
        if text.contains(['\n', '\r']) {
            return Err(CoreError::invalid_value(
                what,
                format!("{text:?} contains a line break"),
            ));
        }
    }
    Ok(())
}

/// Formats an entry line.
#[must_use]
pub fn entry(key: &str, value: &str) -> String {
    format!("{key}={value}")
}

/// Writes `key=value` into `section` of `lines`.
///
/// Replaces the first entry for `key` if there is one, otherwise inserts the
/// entry directly after the section header. A missing section is added at the
/// end, preceded by a blank separator unless the view is empty.
pub fn write_entry(lines: &mut Vec<String>, section: &str, key: &str, value: &str) -> Edit {
    let line = entry(key, value);

    if let Some(found) = locator::find_key(lines, section, key) {
        let index = found.index;
        lines[index] = line;
        return Edit::Updated { index };
    }

    if let Some(header) = locator::find_section(lines, section) {
        let index = header + 1;
        lines.insert(index, line);
        return Edit::Inserted { index };
    }

    let mut appended = Vec::with_capacity(3);
    if !lines.is_empty() {
        appended.push(String::new());
    }
    appended.push(locator::header(section));
    appended.push(line);
    lines.extend(appended.iter().cloned());
    Edit::AppendedSection { lines: appended }
}

/// Removes the first `section` header and its body from `lines`.
///
/// The boundary line that ended the section is kept. Returns `false` and
/// leaves `lines` untouched if the section does not exist.
pub fn erase_section(lines: &mut Vec<String>, section: &str) -> bool {
    let Some(body) = locator::section_body(lines, section) else {
        return false;
    };
    lines.drain(body.start - 1..body.end);
    true
}

/// Builds the read view: every line except comments.
#[must_use]
pub fn strip_comments(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !locator::is_comment(line))
        .cloned()
        .collect()
}
