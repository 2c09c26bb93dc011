//! Read and write traits with typed conveniences.
//!
//! Implementors provide the string primitives; every typed accessor is a
//! parse-or-default (or format-then-write) wrapper around them.

use crate::error::CoreResult;
use crate::value::{self, IniValue, Rect, DATE_FORMAT, DATE_TIME_FORMAT};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{NaiveDate, NaiveDateTime};

/// String-level read access plus typed wrappers.
pub trait IniRead {
    /// Returns the value of `key` in `section`, or `default` when the section
    /// or key is missing or the stored value is empty.
    fn read_string(&self, section: &str, key: &str, default: &str) -> String;

    /// Section used by [`IniRead::read`] and the key-list helpers.
    fn default_section(&self) -> &str;

    /// Reads `key` from the default section and classifies it.
    ///
    /// See [`IniValue`] for the precedence order.
    fn read(&self, key: &str, default: &str) -> IniValue {
        IniValue::sniff(&self.read_string(self.default_section(), key, default))
    }

    /// Reads a 32-bit integer.
    fn read_int(&self, section: &str, key: &str, default: i32) -> i32 {
        value::parse_int(&self.read_string(section, key, "")).unwrap_or(default)
    }

    /// Reads a 64-bit integer.
    fn read_long(&self, section: &str, key: &str, default: i64) -> i64 {
        value::parse_int(&self.read_string(section, key, "")).unwrap_or(default)
    }

    /// Reads `true` or `false`, ignoring case.
    fn read_bool(&self, section: &str, key: &str, default: bool) -> bool {
        value::parse_bool(&self.read_string(section, key, "")).unwrap_or(default)
    }

    /// Reads a floating-point number.
    fn read_float(&self, section: &str, key: &str, default: f64) -> f64 {
        value::parse_float(&self.read_string(section, key, "")).unwrap_or(default)
    }

    /// Reads a date stored as `YYYY-MM-DD` (or the date part of a date-time).
    fn read_date(&self, section: &str, key: &str, default: NaiveDate) -> NaiveDate {
        value::parse_date(&self.read_string(section, key, "")).unwrap_or(default)
    }

    /// Reads a date-time.
    fn read_date_time(&self, section: &str, key: &str, default: NaiveDateTime) -> NaiveDateTime {
        value::parse_date_time(&self.read_string(section, key, "")).unwrap_or(default)
    }

    /// Returns the first ten characters of the stored value, which is the
    /// date part of anything written by [`IniWrite::write_date`] or
    /// [`IniWrite::write_date_time`].
    ///
    /// Falls back to `default` formatted as `YYYY-MM-DD` when the stored value
    /// is shorter than ten characters.
    fn read_date_as_string(&self, section: &str, key: &str, default: NaiveDate) -> String {
        let stored = self.read_string(section, key, "");
        if stored.chars().count() >= 10 {
            stored.chars().take(10).collect()
        } else {
            default.format(DATE_FORMAT).to_string()
        }
    }

    /// Reads a rectangle; a missing or malformed value is the empty rectangle.
    fn read_rect(&self, section: &str, key: &str) -> Rect {
        self.read_string(section, key, "").parse().unwrap_or_default()
    }

    /// Reads base64-encoded bytes.
    fn read_binary(&self, section: &str, key: &str, default: &[u8]) -> Vec<u8> {
        STANDARD
            .decode(self.read_string(section, key, "").trim())
            .ok()
            .filter(|bytes| !bytes.is_empty())
            .unwrap_or_else(|| default.to_vec())
    }

    /// Reads several keys from the default section; missing keys read as
    /// empty strings.
    fn read_values(&self, keys: &[&str]) -> Vec<String> {
        keys.iter()
            .map(|key| self.read_string(self.default_section(), key, ""))
            .collect()
    }
}

/// String-level write access plus typed wrappers.
pub trait IniWrite: IniRead {
    /// Sets `key` in `section` to `value`, creating the section or entry as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is not representable or the backing
    /// store fails.
    fn write_string(&mut self, section: &str, key: &str, value: &str) -> CoreResult<()>;

    /// Writes a string to the default section.
    fn write(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let section = self.default_section().to_string();
        self.write_string(&section, key, value)
    }

    /// Writes a 32-bit integer.
    fn write_int(&mut self, section: &str, key: &str, value: i32) -> CoreResult<()> {
        self.write_string(section, key, &value.to_string())
    }

    /// Writes a 64-bit integer.
    fn write_long(&mut self, section: &str, key: &str, value: i64) -> CoreResult<()> {
        self.write_string(section, key, &value.to_string())
    }

    /// Writes `true` or `false`.
    fn write_bool(&mut self, section: &str, key: &str, value: bool) -> CoreResult<()> {
        self.write_string(section, key, value::format_bool(value))
    }

    /// Writes a floating-point number in its shortest round-tripping form.
    fn write_float(&mut self, section: &str, key: &str, value: f64) -> CoreResult<()> {
        self.write_string(section, key, &value.to_string())
    }

    /// Writes a date as `YYYY-MM-DD`.
    fn write_date(&mut self, section: &str, key: &str, value: NaiveDate) -> CoreResult<()> {
        self.write_string(section, key, &value.format(DATE_FORMAT).to_string())
    }

    /// Writes a date-time as `YYYY-MM-DDTHH:MM:SS`.
    fn write_date_time(
        &mut self,
        section: &str,
        key: &str,
        value: NaiveDateTime,
    ) -> CoreResult<()> {
        self.write_string(section, key, &value.format(DATE_TIME_FORMAT).to_string())
    }

    /// Writes a rectangle as `x,y,width,height`.
    fn write_rect(&mut self, section: &str, key: &str, value: Rect) -> CoreResult<()> {
        self.write_string(section, key, &value.to_string())
    }

    /// Writes bytes as standard base64.
    fn write_binary(&mut self, section: &str, key: &str, value: &[u8]) -> CoreResult<()> {
        self.write_string(section, key, &STANDARD.encode(value))
    }
}
