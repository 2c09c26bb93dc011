//! Settings document facade.

use crate::batch::Batch;
use crate::config::{Config, DEFAULT_FILE_NAME};
use crate::edit::{self, Edit};
use crate::error::CoreResult;
use crate::locator;
use crate::typed::{IniRead, IniWrite};
use inistore_storage::{FileStore, InMemoryStore, StorageError, TextStore};
use std::path::Path;
use tracing::{debug, warn};

/// An open settings document.
///
/// `IniDocument` keeps two views of the backing store:
///
/// - the **read view**: every line except comments, loaded once when the
///   document is opened. All reads are answered from memory and never see
///   edits made to the file by someone else. The document's own successful
///   writes, commits and erasures refresh it; [`IniDocument::reload`]
///   re-reads the store explicitly.
/// - the **write view**: the full raw content, comments included. It is
///   reloaded from storage before every immediate write so edits apply to
///   the latest persisted state, and kept in memory for the lifetime of a
///   [`Batch`].
///
/// # Opening a Document
///
/// ```rust,ignore
/// use inistore_core::{IniDocument, IniRead, IniWrite};
/// use std::path::Path;
///
/// let mut ini = IniDocument::open(Path::new("settings.ini"))?;
/// ini.write_string("Window", "Title", "Main")?;
/// assert_eq!(ini.read_string("Window", "Title", ""), "Main");
/// ```
///
/// # Batched Writes
///
/// ```rust,ignore
/// ini.batch(|batch| {
///     batch.write_int("Window", "Width", 800)?;
///     batch.write_int("Window", "Height", 600)?;
///     Ok(())
/// })?;
/// ```
pub struct IniDocument {
    /// Configuration.
    config: Config,
    /// Backing store.
    store: Box<dyn TextStore>,
    /// Comment-free lines used by all reads.
    read_view: Vec<String>,
    /// Raw lines used by all writes. `None` until first needed.
    write_view: Option<Vec<String>>,
    /// Why the backing store could not be created, if it couldn't.
    creation_error: Option<StorageError>,
}

impl IniDocument {
    /// Opens `config.ini` in the working directory with the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// See [`IniDocument::open_with_store`].
    pub fn open_default() -> CoreResult<Self> {
        Self::open(Path::new(DEFAULT_FILE_NAME))
    }

    /// Opens the settings file at `path`, creating it if missing.
    ///
    /// # Errors
    ///
    /// See [`IniDocument::open_with_store`].
    pub fn open(path: &Path) -> CoreResult<Self> {
        Self::open_with_config(path, Config::default())
    }

    /// Opens the settings file at `path` with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use inistore_core::{Config, IniDocument};
    /// use inistore_storage::TextEncoding;
    /// use std::path::Path;
    ///
    /// let config = Config::default().encoding(TextEncoding::Utf8);
    /// let ini = IniDocument::open_with_config(Path::new("settings.ini"), config)?;
    /// ```
    ///
    /// # Errors
    ///
    /// See [`IniDocument::open_with_store`].
    pub fn open_with_config(path: &Path, config: Config) -> CoreResult<Self> {
        let store = FileStore::new(path, config.encoding, config.line_ending);
        Self::open_with_store(Box::new(store), config)
    }

    /// Opens an empty document backed by memory. Useful for tests.
    ///
    /// # Errors
    ///
    /// See [`IniDocument::open_with_store`].
    pub fn open_in_memory() -> CoreResult<Self> {
        Self::open_with_store(Box::new(InMemoryStore::new()), Config::default())
    }

    /// Opens a document over an arbitrary store.
    ///
    /// A missing store is created when `create_if_missing` is set. If that
    /// fails the failure is logged and kept in [`IniDocument::creation_error`],
    /// and the document opens empty: reads return their defaults and writes
    /// report the storage error.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing store cannot be read or decoded, or if
    /// the store is missing and `create_if_missing` is false.
    pub fn open_with_store(mut store: Box<dyn TextStore>, config: Config) -> CoreResult<Self> {
        let mut creation_error = None;
        if config.create_if_missing && !store.exists() {
            match store.create() {
                Ok(_) => debug!("created empty settings store"),
                Err(error) => {
                    warn!(%error, "cannot create settings store, continuing with an empty document");
                    creation_error = Some(error);
                }
            }
        }

        let read_view = if creation_error.is_some() {
            Vec::new()
        } else {
            edit::strip_comments(&store.read_lines()?)
        };

        Ok(Self {
            config,
            store,
            read_view,
            write_view: None,
            creation_error,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &dyn TextStore {
        self.store.as_ref()
    }

    /// Returns why the backing store could not be created, if it couldn't.
    #[must_use]
    pub fn creation_error(&self) -> Option<&StorageError> {
        self.creation_error.as_ref()
    }

    /// Returns true if the document opened without a usable store.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.creation_error.is_some()
    }

    /// Re-reads the read view from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn reload(&mut self) -> CoreResult<()> {
        self.read_view = edit::strip_comments(&self.store.read_lines()?);
        debug!(lines = self.read_view.len(), "reloaded read view");
        Ok(())
    }

    /// Returns the read view joined with the store's line ending.
    #[must_use]
    pub fn read_all(&self) -> String {
        self.read_view.join(self.store.line_ending().as_str())
    }

    /// Returns the `key=value` lines of `section` in document order.
    ///
    /// Empty if the section does not exist.
    #[must_use]
    pub fn read_section(&self, section: &str) -> Vec<String> {
        locator::section_lines(&self.read_view, section)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Returns the entries of `section` as key/value pairs in document order.
    #[must_use]
    pub fn read_section_entries(&self, section: &str) -> Vec<(String, String)> {
        locator::section_lines(&self.read_view, section)
            .into_iter()
            .filter_map(locator::split_entry)
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    /// Returns all section names in document order.
    #[must_use]
    pub fn read_sections(&self) -> Vec<String> {
        locator::section_names(&self.read_view)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Returns true if a header for `section` exists.
    #[must_use]
    pub fn section_exists(&self, section: &str) -> bool {
        locator::find_section(&self.read_view, section).is_some()
    }

    /// Returns true if `section` contains an entry for `key`.
    ///
    /// A bare `key` line without `=` does not count.
    #[must_use]
    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        locator::find_key(&self.read_view, section, key).is_some()
    }

    /// Deletes `section`, its header and all of its lines, and rewrites the
    /// store.
    ///
    /// Returns `false` without touching storage if the section does not
    /// exist. Erasure is unavailable while a [`Batch`] is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or rewritten.
    pub fn erase_section(&mut self, section: &str) -> CoreResult<bool> {
        self.load_write_view()?;
        if !edit::erase_section(self.write_view_mut(), section) {
            debug!(section, "section not found, nothing to erase");
            return Ok(false);
        }
        self.flush()?;
        self.refresh_read_view();
        debug!(section, "erased section");
        Ok(true)
    }

    /// Starts a batch.
    ///
    /// The write view is loaded from storage; writes made through the
    /// returned handle stay in memory until [`Batch::commit`]. Dropping the
    /// handle without committing discards them.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn begin_batch(&mut self) -> CoreResult<Batch<'_>> {
        self.load_write_view()?;
        debug!("started batch");
        Ok(Batch::new(self))
    }

    /// Runs `f` inside a batch and commits if it succeeds.
    ///
    /// If `f` returns an error the batch is discarded and the store is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or from loading or committing the batch.
    pub fn batch<F, T>(&mut self, f: F) -> CoreResult<T>
    where
        F: FnOnce(&mut Batch<'_>) -> CoreResult<T>,
    {
        let mut batch = self.begin_batch()?;
        let result = f(&mut batch)?;
        batch.commit()?;
        Ok(result)
    }

    /// Writes several keys to the default section with a single flush.
    ///
    /// # Errors
    ///
    /// Returns an error if any pair is invalid or the store fails; nothing is
    /// written in that case.
    pub fn write_values(&mut self, pairs: &[(&str, &str)]) -> CoreResult<()> {
        self.batch(|batch| {
            for (key, value) in pairs {
                batch.write(key, value)?;
            }
            Ok(())
        })
    }

    /// Replaces the write view with the current store content.
    fn load_write_view(&mut self) -> CoreResult<()> {
        self.write_view = Some(self.store.read_lines()?);
        Ok(())
    }

    pub(crate) fn write_view_mut(&mut self) -> &mut Vec<String> {
        self.write_view.get_or_insert_with(Vec::new)
    }

    pub(crate) fn pending_lines(&self) -> &[String] {
        self.write_view.as_deref().unwrap_or_default()
    }

    /// Rewrites the whole store from the write view.
    fn flush(&mut self) -> CoreResult<()> {
        if let Some(lines) = self.write_view.as_ref() {
            self.store.write_lines(lines)?;
            debug!(lines = lines.len(), "flushed write view");
        }
        Ok(())
    }

    fn refresh_read_view(&mut self) {
        if let Some(lines) = self.write_view.as_ref() {
            self.read_view = edit::strip_comments(lines);
        }
    }

    /// Flushes the write view, refreshes the read view and clears the write
    /// view.
    pub(crate) fn commit_write_view(&mut self) -> CoreResult<()> {
        self.flush()?;
        self.refresh_read_view();
        self.write_view = None;
        Ok(())
    }

    pub(crate) fn discard_write_view(&mut self) {
        self.write_view = None;
    }
}

impl IniRead for IniDocument {
    fn read_string(&self, section: &str, key: &str, default: &str) -> String {
        match locator::find_key(&self.read_view, section, key) {
            Some(found) if !found.value.is_empty() => found.value.to_string(),
            _ => default.to_string(),
        }
    }

    fn default_section(&self) -> &str {
        &self.config.default_section
    }
}

impl IniWrite for IniDocument {
    fn write_string(&mut self, section: &str, key: &str, value: &str) -> CoreResult<()> {
        edit::validate(section, key, value)?;
        self.load_write_view()?;

        match edit::write_entry(self.write_view_mut(), section, key, value) {
            Edit::AppendedSection { lines } => {
                self.store.append_lines(&lines)?;
                debug!(section, key, "appended new section");
            }
            Edit::Updated { index } | Edit::Inserted { index } => {
                debug!(section, key, line = index, "entry changed, rewriting store");
                self.flush()?;
            }
        }
        self.refresh_read_view();
        Ok(())
    }
}

impl std::fmt::Debug for IniDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IniDocument")
            .field("config", &self.config)
            .field("read_lines", &self.read_view.len())
            .field("write_view_loaded", &self.write_view.is_some())
            .field("degraded", &self.is_degraded())
            .finish_non_exhaustive()
    }
}
