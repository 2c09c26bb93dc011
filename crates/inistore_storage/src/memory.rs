//! In-memory text store for testing.

use crate::backend::TextStore;
use crate::encoding::{self, LineEnding, TextEncoding};
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;

/// An in-memory text store.
///
/// Holds the encoded bytes exactly as a [`super::FileStore`] would write
/// them, which makes it suitable for:
/// - Unit tests of the document layer
/// - Inspecting the raw output of a flush
///
/// # Example
///
/// ```rust
/// use inistore_storage::{InMemoryStore, TextStore};
///
/// let mut store = InMemoryStore::from_text("[Common]\nx=1\n");
/// store.append_lines(&["y=2".to_string()]).unwrap();
/// assert_eq!(store.text(), "[Common]\nx=1\ny=2\n");
/// ```
#[derive(Debug)]
pub struct InMemoryStore {
    data: RwLock<Option<Vec<u8>>>,
    encoding: TextEncoding,
    line_ending: LineEnding,
    writes: RwLock<usize>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Creates a store that does not exist yet, using UTF-8 and `\n`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_encoding(TextEncoding::Utf8, LineEnding::Lf)
    }

    /// Creates a store that does not exist yet with the given conventions.
    #[must_use]
    pub fn with_encoding(encoding: TextEncoding, line_ending: LineEnding) -> Self {
        Self {
            data: RwLock::new(None),
            encoding,
            line_ending,
            writes: RwLock::new(0),
        }
    }

    /// Creates an existing UTF-8 store holding `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let store = Self::new();
        *store.data.write() = Some(text.as_bytes().to_vec());
        store
    }

    /// Returns a copy of the raw bytes, or an empty vector if absent.
    #[must_use]
    pub fn data(&self) -> Vec<u8> {
        self.data.read().clone().unwrap_or_default()
    }

    /// Returns the content decoded as text.
    ///
    /// Undecodable content is rendered lossily; this is a test helper.
    #[must_use]
    pub fn text(&self) -> String {
        let data = self.data();
        self.encoding
            .decode(&data)
            .unwrap_or_else(|_| String::from_utf8_lossy(&data).into_owned())
    }

    /// Returns how many times the content was written or appended to.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.read()
    }
}

impl TextStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.data.read().is_some()
    }

    fn create(&mut self) -> StorageResult<bool> {
        let mut data = self.data.write();
        if data.is_some() {
            return Ok(false);
        }
        *data = Some(Vec::new());
        Ok(true)
    }

    fn read_lines(&self) -> StorageResult<Vec<String>> {
        let data = self.data.read();
        let bytes = data
            .as_ref()
            .ok_or_else(|| StorageError::NotFound("in-memory store".to_string()))?;
        let (_, lines) = encoding::decode_lines(bytes, self.encoding)?;
        Ok(lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> StorageResult<()> {
        *self.data.write() = Some(encoding::encode_lines(lines, self.encoding, self.line_ending));
        *self.writes.write() += 1;
        Ok(())
    }

    fn append_lines(&mut self, lines: &[String]) -> StorageResult<()> {
        let mut data = self.data.write();
        let existing = data.as_deref().unwrap_or_default();
        let bytes = encoding::encode_append(existing, self.encoding, lines, self.line_ending)?;

        data.get_or_insert_with(Vec::new).extend_from_slice(&bytes);
        *self.writes.write() += 1;
        Ok(())
    }

    fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}
