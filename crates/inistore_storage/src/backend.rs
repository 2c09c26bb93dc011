//! Text store trait definition.

use crate::encoding::{LineEnding, TextEncoding};
use crate::error::StorageResult;

/// A line-oriented backing store for a settings document.
///
/// Stores move **whole lines** in and out. They own the text encoding and
/// newline convention but do not interpret section headers, entries or
/// comments; that is the document layer's job.
///
/// # Invariants
///
/// - `read_lines` returns the lines last written, without terminators
/// - `write_lines` replaces the entire content
/// - `append_lines` never rewrites existing content
/// - Every written line is followed by the store's line ending
/// - Stores must be `Send + Sync`
///
/// # Implementors
///
/// - [`super::InMemoryStore`] - For testing
/// - [`super::FileStore`] - For persistent storage
pub trait TextStore: Send + Sync {
    /// Returns true if the backing store exists.
    fn exists(&self) -> bool;

    /// Creates an empty backing store if it does not exist yet.
    ///
    /// Returns `true` if a new store was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    fn create(&mut self) -> StorageResult<bool>;

    /// Reads every line of the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The store does not exist
    /// - The content cannot be decoded
    /// - An I/O error occurs
    fn read_lines(&self) -> StorageResult<Vec<String>>;

    /// Replaces the whole content of the store with `lines`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs. A failure part way through
    /// may leave the store truncated.
    fn write_lines(&mut self, lines: &[String]) -> StorageResult<()>;

    /// Appends `lines` after the existing content.
    ///
    /// If the existing content does not end with a line terminator one is
    /// written first, so the first appended line always starts a new line.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn append_lines(&mut self, lines: &[String]) -> StorageResult<()>;

    /// Returns the encoding used for new content.
    fn encoding(&self) -> TextEncoding;

    /// Returns the line ending written after each line.
    fn line_ending(&self) -> LineEnding;
}
