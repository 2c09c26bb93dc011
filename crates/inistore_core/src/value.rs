//! Typed values and their textual forms.
//!
//! All formats are locale-invariant so a file written on one machine reads
//! back identically on another.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Format used when writing dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used when writing date-times.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATE_TIME_INPUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an integer, allowing surrounding whitespace.
pub(crate) fn parse_int<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

/// Parses `true`/`false` case-insensitively.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

pub(crate) fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses a date, accepting the date part of a date-time as well.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .or_else(|| parse_date_time(text).map(|dt| dt.date()))
}

/// Parses a date-time; a bare date means midnight.
pub(crate) fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATE_TIME_INPUTS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse().ok()
}

/// A value read through the type-sniffing shorthand.
///
/// The variant is picked by trying each parse in a fixed order: `Integer`,
/// `Long`, `Boolean`, `DateTime`, `Float`, and finally `String`. A value such
/// as `"123"` is therefore always an `Integer`, even if it was written as
/// text; use the typed accessors when the type is known.
#[derive(Debug, Clone, PartialEq)]
pub enum IniValue {
    /// Fits in 32 bits.
    Integer(i32),
    /// Fits in 64 bits but not 32.
    Long(i64),
    /// `true` or `false`, any case.
    Boolean(bool),
    /// A date or date-time.
    DateTime(NaiveDateTime),
    /// Any other number.
    Float(f64),
    /// Everything else.
    String(String),
}

impl IniValue {
    /// Classifies `text` using the documented precedence.
    #[must_use]
    pub fn sniff(text: &str) -> Self {
        if let Some(v) = parse_int::<i32>(text) {
            Self::Integer(v)
        } else if let Some(v) = parse_int::<i64>(text) {
            Self::Long(v)
        } else if let Some(v) = parse_bool(text) {
            Self::Boolean(v)
        } else if let Some(v) = parse_date_time(text) {
            Self::DateTime(v)
        } else if let Some(v) = parse_float(text) {
            Self::Float(v)
        } else {
            Self::String(text.to_string())
        }
    }

    /// Returns the value as a string slice if it is a `String`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for IniValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Boolean(v) => f.write_str(format_bool(*v)),
            Self::DateTime(v) => write!(f, "{}", v.format(DATE_TIME_FORMAT)),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

/// Error returned when a rectangle cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid rectangle {0:?}: expected x,y,width,height")]
pub struct ParseRectError(String);

/// An axis-aligned rectangle, stored as `x,y,width,height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, never negative.
    pub width: f64,
    /// Height, never negative.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Rect {
    type Err = ParseRectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = || ParseRectError(s.to_string());
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| fail()))
            .collect::<Result<Vec<_>, _>>()?;
        match parts[..] {
            [x, y, width, height] if width >= 0.0 && height >= 0.0 => {
                Ok(Self::new(x, y, width, height))
            }
            _ => Err(fail()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn sniff_precedence() {
        assert_eq!(IniValue::sniff("123"), IniValue::Integer(123));
        assert_eq!(IniValue::sniff(" -7 "), IniValue::Integer(-7));
        assert_eq!(
            IniValue::sniff("9000000000"),
            IniValue::Long(9_000_000_000)
        );
        assert_eq!(IniValue::sniff("True"), IniValue::Boolean(true));
        assert_eq!(
            IniValue::sniff("2021-01-05T10:30:00"),
            IniValue::DateTime(date_time(2021, 1, 5, 10, 30, 0))
        );
        assert_eq!(
            IniValue::sniff("2021-01-05"),
            IniValue::DateTime(date_time(2021, 1, 5, 0, 0, 0))
        );
        assert_eq!(IniValue::sniff("1.5"), IniValue::Float(1.5));
        assert_eq!(
            IniValue::sniff("One Dich22"),
            IniValue::String("One Dich22".to_string())
        );
    }

    #[test]
    fn value_display_uses_storage_formats() {
        assert_eq!(IniValue::Boolean(false).to_string(), "false");
        assert_eq!(
            IniValue::DateTime(date_time(2021, 1, 5, 7, 8, 9)).to_string(),
            "2021-01-05T07:08:09"
        );
        assert_eq!(IniValue::String("x".into()).as_str(), Some("x"));
        assert_eq!(IniValue::Integer(1).as_str(), None);
    }

    #[test]
    fn bool_parsing() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" false "), Some(false));
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("1"), None);
    }

    #[test]
    fn date_parsing() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
        assert_eq!(parse_date("2021-01-05"), Some(date));
        assert_eq!(parse_date("2021-01-05 23:59:59"), Some(date));
        assert_eq!(parse_date("05.01.2021"), None);
    }

    #[test]
    fn date_time_fractional_seconds() {
        let parsed = parse_date_time("2021-01-05T10:30:00.250").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2021, 1, 5).unwrap());
    }

    #[test]
    fn rect_text_form() {
        let rect = Rect::new(10.0, 20.5, 300.0, 40.0);
        assert_eq!(rect.to_string(), "10,20.5,300,40");
        assert_eq!("10, 20.5, 300, 40".parse::<Rect>().unwrap(), rect);
    }

    #[test]
    fn rect_rejects_bad_input() {
        assert!("1,2,3".parse::<Rect>().is_err());
        assert!("1,2,-3,4".parse::<Rect>().is_err());
        assert!("a,b,c,d".parse::<Rect>().is_err());
        assert!("".parse::<Rect>().is_err());
    }
}
