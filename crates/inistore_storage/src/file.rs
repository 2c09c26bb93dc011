//! File-based text store for persistent settings.

use crate::backend::TextStore;
use crate::encoding::{self, LineEnding, TextEncoding};
use crate::error::{StorageError, StorageResult};
use parking_lot::RwLock;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A file-based text store.
///
/// Every operation opens the file, performs its I/O and closes it again, so
/// no handle outlives a call, even on error paths.
///
/// # Encoding
///
/// New content is written in the configured encoding. Once the file has been
/// read and turned out to carry a byte-order mark for another encoding, that
/// encoding is remembered and used for later writes and appends so the file
/// never mixes encodings.
///
/// # Example
///
/// ```no_run
/// use inistore_storage::{FileStore, LineEnding, TextEncoding, TextStore};
/// use std::path::Path;
///
/// let mut store = FileStore::new(Path::new("config.ini"), TextEncoding::Utf8, LineEnding::Lf);
/// store.create().unwrap();
/// store.append_lines(&["[Common]".to_string(), "x=1".to_string()]).unwrap();
/// ```
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    encoding: TextEncoding,
    line_ending: LineEnding,
    detected: RwLock<Option<TextEncoding>>,
}

impl FileStore {
    /// Creates a store for `path`. No I/O is performed.
    #[must_use]
    pub fn new(path: &Path, encoding: TextEncoding, line_ending: LineEnding) -> Self {
        Self {
            path: path.to_path_buf(),
            encoding,
            line_ending,
            detected: RwLock::new(None),
        }
    }

    /// Creates a store with the default encoding and native line ending.
    #[must_use]
    pub fn with_defaults(path: &Path) -> Self {
        Self::new(path, TextEncoding::default(), LineEnding::default())
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn effective_encoding(&self) -> TextEncoding {
        self.detected.read().unwrap_or(self.encoding)
    }

    fn read_bytes(&self) -> StorageResult<Vec<u8>> {
        if !self.path.exists() {
            return Err(StorageError::NotFound(self.path.display().to_string()));
        }
        Ok(fs::read(&self.path)?)
    }
}

impl TextStore for FileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn create(&mut self) -> StorageResult<bool> {
        if self.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        Ok(true)
    }

    fn read_lines(&self) -> StorageResult<Vec<String>> {
        let bytes = self.read_bytes()?;
        let (actual, lines) = encoding::decode_lines(&bytes, self.effective_encoding())?;
        if !bytes.is_empty() {
            *self.detected.write() = Some(actual);
        }
        Ok(lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> StorageResult<()> {
        let bytes = encoding::encode_lines(lines, self.effective_encoding(), self.line_ending);
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }

    fn append_lines(&mut self, lines: &[String]) -> StorageResult<()> {
        let existing = if self.path.exists() {
            fs::read(&self.path)?
        } else {
            Vec::new()
        };
        let encoding = TextEncoding::sniff(&existing).unwrap_or(self.effective_encoding());
        let bytes = encoding::encode_append(&existing, encoding, lines, self.line_ending)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }

    fn encoding(&self) -> TextEncoding {
        self.effective_encoding()
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn file_create_new() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut store = FileStore::with_defaults(&path);
        assert!(!store.exists());
        assert!(store.create().unwrap());
        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        // Second call leaves the file alone
        assert!(!store.create().unwrap());
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("config.ini");

        let mut store = FileStore::with_defaults(&path);
        store.create().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_read_missing_fails() {
        let dir = tempdir().unwrap();
        let store = FileStore::with_defaults(&dir.path().join("missing.ini"));
        assert!(matches!(store.read_lines(), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn file_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut store = FileStore::new(&path, TextEncoding::Utf16Le, LineEnding::CrLf);
        store.write_lines(&lines(&["[A]", "k=1"])).unwrap();

        let raw = fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[0xFF, 0xFE]);
        assert_eq!(store.read_lines().unwrap(), vec!["[A]", "k=1"]);
    }

    #[test]
    fn file_write_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut store = FileStore::new(&path, TextEncoding::Utf8, LineEnding::Lf);
        store.write_lines(&lines(&["[A]", "k=1", "j=2"])).unwrap();
        store.write_lines(&lines(&["[B]"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[B]\n");
    }

    #[test]
    fn file_append_keeps_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");
        fs::write(&path, "[A]\nk=1").unwrap();

        let mut store = FileStore::new(&path, TextEncoding::Utf8, LineEnding::Lf);
        store.append_lines(&lines(&["", "[B]", "x=y"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[A]\nk=1\n\n[B]\nx=y\n");
    }

    #[test]
    fn file_append_uses_existing_encoding() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut utf16 = FileStore::new(&path, TextEncoding::Utf16Le, LineEnding::Lf);
        utf16.write_lines(&lines(&["[A]"])).unwrap();

        // Configured as UTF-8, but the file announces UTF-16LE
        let mut store = FileStore::new(&path, TextEncoding::Utf8, LineEnding::Lf);
        store.append_lines(&lines(&["k=1"])).unwrap();

        assert_eq!(store.read_lines().unwrap(), vec!["[A]", "k=1"]);
        assert_eq!(store.encoding(), TextEncoding::Utf16Le);
    }

    #[test]
    fn file_persistence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        {
            let mut store = FileStore::with_defaults(&path);
            store.write_lines(&lines(&["; note", "[A]", "k=v=w"])).unwrap();
        }

        {
            let store = FileStore::with_defaults(&path);
            assert_eq!(store.read_lines().unwrap(), vec!["; note", "[A]", "k=v=w"]);
        }
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let store = FileStore::with_defaults(&path);
        assert_eq!(store.path(), path);
    }
}
