//! Text encodings and newline conventions.
//!
//! Stores exchange whole lines with the document layer; this module owns the
//! translation between those lines and the bytes on disk.

use crate::error::{StorageError, StorageResult};
use std::fmt;
use std::str::FromStr;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Text encoding used for a backing store.
///
/// When decoding, a byte-order mark at the start of the data takes
/// precedence over the configured encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8 without a byte-order mark.
    Utf8,
    /// UTF-16 little endian, written with a byte-order mark.
    #[default]
    Utf16Le,
    /// UTF-16 big endian, written with a byte-order mark.
    Utf16Be,
}

impl TextEncoding {
    /// Returns the canonical name of the encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
        }
    }

    /// Returns the byte-order mark written at the start of a new file.
    #[must_use]
    pub const fn preamble(self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[],
            Self::Utf16Le => UTF16_LE_BOM,
            Self::Utf16Be => UTF16_BE_BOM,
        }
    }

    /// Encodes `text`, prefixed with the preamble when `with_preamble` is set.
    #[must_use]
    pub fn encode(self, text: &str, with_preamble: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(text.len() * 2 + 2);
        if with_preamble {
            out.extend_from_slice(self.preamble());
        }
        match self {
            Self::Utf8 => out.extend_from_slice(text.as_bytes()),
            Self::Utf16Le => text
                .encode_utf16()
                .for_each(|unit| out.extend_from_slice(&unit.to_le_bytes())),
            Self::Utf16Be => text
                .encode_utf16()
                .for_each(|unit| out.extend_from_slice(&unit.to_be_bytes())),
        }
        out
    }

    /// Returns the encoding announced by a byte-order mark, if any.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        detect_preamble(bytes).map(|(encoding, _)| encoding)
    }

    /// Decodes `bytes` into text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Decode`] if the bytes are not valid in the
    /// detected encoding.
    pub fn decode(self, bytes: &[u8]) -> StorageResult<String> {
        let (encoding, body) = detect_preamble(bytes).unwrap_or((self, bytes));
        match encoding {
            Self::Utf8 => String::from_utf8(body.to_vec())
                .map_err(|e| StorageError::decode(encoding.name(), e.to_string())),
            Self::Utf16Le | Self::Utf16Be => {
                if body.len() % 2 != 0 {
                    return Err(StorageError::decode(
                        encoding.name(),
                        format!("odd byte length {}", body.len()),
                    ));
                }
                let units: Vec<u16> = body
                    .chunks_exact(2)
                    .map(|pair| match encoding {
                        Self::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
                        _ => u16::from_le_bytes([pair[0], pair[1]]),
                    })
                    .collect();
                String::from_utf16(&units)
                    .map_err(|e| StorageError::decode(encoding.name(), e.to_string()))
            }
        }
    }
}

fn detect_preamble(bytes: &[u8]) -> Option<(TextEncoding, &[u8])> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        Some((TextEncoding::Utf8, rest))
    } else if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        Some((TextEncoding::Utf16Le, rest))
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        Some((TextEncoding::Utf16Be, rest))
    } else {
        None
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16" | "utf16le" | "unicode" => Ok(Self::Utf16Le),
            "utf16be" => Ok(Self::Utf16Be),
            other => Err(format!("unknown text encoding: {other}")),
        }
    }
}

/// Line terminator written after every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Returns the platform's conventional line ending.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Returns the terminator as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

/// Splits text into lines.
///
/// Accepts `\n`, `\r\n` and a lone `\r` as terminators. A terminator at the
/// very end does not produce a trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Joins lines, terminating every line (including the last) with `ending`.
#[must_use]
pub fn join_lines<S: AsRef<str>>(lines: &[S], ending: LineEnding) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push_str(ending.as_str());
    }
    out
}

/// Returns true if `text` is empty or already ends with a line terminator.
#[must_use]
pub fn ends_with_terminator(text: &str) -> bool {
    text.is_empty() || text.ends_with('\n') || text.ends_with('\r')
}

/// Decodes stored bytes into lines.
///
/// Returns the encoding the bytes were actually written in alongside the
/// lines, so later writes can keep using it.
pub(crate) fn decode_lines(
    bytes: &[u8],
    configured: TextEncoding,
) -> StorageResult<(TextEncoding, Vec<String>)> {
    let encoding = TextEncoding::sniff(bytes).unwrap_or(configured);
    let text = encoding.decode(bytes)?;
    Ok((encoding, split_lines(&text)))
}

/// Encodes `lines` for a full rewrite of a store.
pub(crate) fn encode_lines(lines: &[String], encoding: TextEncoding, ending: LineEnding) -> Vec<u8> {
    encoding.encode(&join_lines(lines, ending), true)
}

/// Encodes `lines` so they can be appended to `existing`.
///
/// A preamble is only emitted for an empty store, and a terminator is
/// inserted first when the existing text does not end with one.
pub(crate) fn encode_append(
    existing: &[u8],
    encoding: TextEncoding,
    lines: &[String],
    ending: LineEnding,
) -> StorageResult<Vec<u8>> {
    let mut text = String::new();
    if !existing.is_empty() && !ends_with_terminator(&encoding.decode(existing)?) {
        text.push_str(ending.as_str());
    }
    text.push_str(&join_lines(lines, ending));
    Ok(encoding.encode(&text, existing.is_empty()))
}
