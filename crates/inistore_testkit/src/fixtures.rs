//! Test fixtures and document helpers.
//!
//! Provides convenience functions for setting up test documents
//! and common test scenarios.

use inistore_core::{Config, IniDocument};
use inistore_storage::{InMemoryStore, LineEnding, TextEncoding};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name used for file-backed fixtures.
pub const FIXTURE_FILE_NAME: &str = "test.ini";

/// A test document with automatic cleanup.
pub struct TestIni {
    /// The document.
    pub ini: IniDocument,
    /// Path of the backing file, if file-based.
    path: Option<PathBuf>,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: Option<TempDir>,
}

impl TestIni {
    /// Creates an empty in-memory document.
    pub fn memory() -> Self {
        Self {
            ini: IniDocument::open_in_memory().expect("Failed to open in-memory document"),
            path: None,
            _temp_dir: None,
        }
    }

    /// Creates an in-memory document holding `text`.
    pub fn from_text(text: &str) -> Self {
        let store = InMemoryStore::from_text(text);
        Self {
            ini: IniDocument::open_with_store(Box::new(store), Config::default())
                .expect("Failed to open in-memory document"),
            path: None,
            _temp_dir: None,
        }
    }

    /// Creates a file-based document in a fresh temporary directory.
    ///
    /// Uses UTF-8 and `\n` so the file can be inspected with
    /// [`TestIni::file_text`].
    pub fn file() -> Self {
        Self::file_with_config(plain_config())
    }

    /// Creates a file-based document with custom configuration.
    pub fn file_with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(FIXTURE_FILE_NAME);
        let ini = IniDocument::open_with_config(&path, config).expect("Failed to open document");
        Self {
            ini,
            path: Some(path),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Creates a file-based document whose file initially holds `text`.
    pub fn file_from_text(text: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(FIXTURE_FILE_NAME);
        std::fs::write(&path, text).expect("Failed to seed settings file");
        let ini =
            IniDocument::open_with_config(&path, plain_config()).expect("Failed to open document");
        Self {
            ini,
            path: Some(path),
            _temp_dir: Some(temp_dir),
        }
    }

    /// Returns the file path if file-based, None if in-memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the stored lines, comments included.
    pub fn stored_lines(&self) -> Vec<String> {
        self.ini
            .store()
            .read_lines()
            .expect("Failed to read backing store")
    }

    /// Returns the raw file content. Panics for in-memory fixtures.
    pub fn file_text(&self) -> String {
        let path = self.path().expect("In-memory fixture has no file");
        std::fs::read_to_string(path).expect("Failed to read settings file")
    }

    /// Opens a second, independent document on the same file.
    pub fn reopen(&self) -> IniDocument {
        let path = self.path().expect("In-memory fixture has no file");
        IniDocument::open_with_config(path, self.ini.config().clone())
            .expect("Failed to reopen document")
    }
}

/// UTF-8 with `\n`, for fixtures whose files are compared as text.
pub fn plain_config() -> Config {
    Config::default()
        .encoding(TextEncoding::Utf8)
        .line_ending(LineEnding::Lf)
}

impl std::ops::Deref for TestIni {
    type Target = IniDocument;

    fn deref(&self) -> &Self::Target {
        &self.ini
    }
}

impl std::ops::DerefMut for TestIni {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ini
    }
}

/// Runs a test with a temporary in-memory document.
///
/// # Example
///
/// ```rust,ignore
/// use inistore_testkit::with_temp_ini;
/// use inistore_core::{IniRead, IniWrite};
///
/// #[test]
/// fn my_test() {
///     with_temp_ini(|ini| {
///         ini.write_string("A", "k", "v").unwrap();
///         assert_eq!(ini.read_string("A", "k", ""), "v");
///     });
/// }
/// ```
pub fn with_temp_ini<F, R>(f: F) -> R
where
    F: FnOnce(&mut IniDocument) -> R,
{
    let mut test_ini = TestIni::memory();
    f(&mut test_ini.ini)
}

/// Runs a test with a temporary file-based document.
pub fn with_file_ini<F, R>(f: F) -> R
where
    F: FnOnce(&mut IniDocument, &Path) -> R,
{
    let mut test_ini = TestIni::file();
    let path = test_ini
        .path()
        .expect("File fixture should have a path")
        .to_path_buf();
    f(&mut test_ini.ini, &path)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use inistore_core::IniWrite;

    /// Two sections that share a key name.
    pub const TWO_SECTIONS: &str = "[A]\nk1=1\n\n[B]\nk1=2";

    /// A section with comments before, inside and after it.
    pub const COMMENTED: &str = "; settings\n[A]\n;foo=bar\nfoo=baz\n\n; trailer\n";

    /// Creates a document with `sections` sections of `keys` entries each.
    pub fn populated_ini(sections: usize, keys: usize) -> TestIni {
        let mut test_ini = TestIni::memory();
        test_ini
            .ini
            .batch(|batch| {
                for s in 0..sections {
                    for k in 0..keys {
                        batch.write_string(
                            &format!("section_{s}"),
                            &format!("key_{k}"),
                            &format!("{s}.{k}"),
                        )?;
                    }
                }
                Ok(())
            })
            .expect("Failed to populate document");
        test_ini
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inistore_core::{IniRead, IniWrite};

    #[test]
    fn test_memory_fixture() {
        let test_ini = TestIni::memory();
        assert!(test_ini.path().is_none());
        assert!(test_ini.read_sections().is_empty());
    }

    #[test]
    fn test_file_fixture_round_trip() {
        let mut test_ini = TestIni::file();
        test_ini.write_string("A", "k", "v").unwrap();
        assert_eq!(test_ini.file_text(), "[A]\nk=v\n");
        assert_eq!(test_ini.reopen().read_string("A", "k", ""), "v");
    }

    #[test]
    fn test_with_temp_ini() {
        let value = with_temp_ini(|ini| {
            ini.write_string("A", "k", "v").unwrap();
            ini.read_string("A", "k", "")
        });
        assert_eq!(value, "v");
    }

    #[test]
    fn test_with_file_ini() {
        with_file_ini(|ini, path| {
            ini.write_string("A", "k", "v").unwrap();
            assert!(path.exists());
        });
    }

    #[test]
    fn test_populated_scenario() {
        let test_ini = scenarios::populated_ini(3, 4);
        assert_eq!(test_ini.read_sections().len(), 3);
        assert_eq!(test_ini.read_section("section_1").len(), 4);
        assert_eq!(test_ini.read_string("section_2", "key_3", ""), "2.3");
    }
}
