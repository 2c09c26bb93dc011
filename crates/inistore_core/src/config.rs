//! Document configuration.

use inistore_storage::{LineEnding, TextEncoding};

/// File name used when no path is given, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "config.ini";

/// Section used by the single-key `read`/`write` shorthands.
pub const DEFAULT_SECTION: &str = "Common";

/// Configuration for opening a settings document.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to create the backing file if it doesn't exist.
    pub create_if_missing: bool,

    /// Encoding for new content.
    pub encoding: TextEncoding,

    /// Terminator written after each line.
    pub line_ending: LineEnding,

    /// Section targeted by `read`, `write` and the key-list helpers.
    pub default_section: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            create_if_missing: true,
            encoding: TextEncoding::Utf16Le,
            line_ending: LineEnding::native(),
            default_section: DEFAULT_SECTION.to_string(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to create the backing file if missing.
    #[must_use]
    pub const fn create_if_missing(mut self, value: bool) -> Self {
        self.create_if_missing = value;
        self
    }

    /// Sets the text encoding.
    #[must_use]
    pub const fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the line ending.
    #[must_use]
    pub const fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets the default section name.
    #[must_use]
    pub fn default_section(mut self, name: impl Into<String>) -> Self {
        self.default_section = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.create_if_missing);
        assert_eq!(config.encoding, TextEncoding::Utf16Le);
        assert_eq!(config.line_ending, LineEnding::native());
        assert_eq!(config.default_section, "Common");
    }

    #[test]
    fn builder_pattern() {
        let config = Config::new()
            .create_if_missing(false)
            .encoding(TextEncoding::Utf8)
            .line_ending(LineEnding::CrLf)
            .default_section("General");

        assert!(!config.create_if_missing);
        assert_eq!(config.encoding, TextEncoding::Utf8);
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert_eq!(config.default_section, "General");
    }
}
