//! Deferred writes.

use crate::document::IniDocument;
use crate::edit;
use crate::error::CoreResult;
use crate::locator;
use crate::typed::{IniRead, IniWrite};
use tracing::debug;

/// A batch of writes against one document.
///
/// Writes made through a batch only change the in-memory write view; nothing
/// reaches storage until [`Batch::commit`], which rewrites the whole store
/// once. Dropping a batch without committing discards its writes.
///
/// Reads through the batch see its pending writes. The document itself is
/// mutably borrowed for the lifetime of the batch, so erasing sections or
/// starting a second batch is impossible until it ends.
///
/// ```rust,ignore
/// let mut batch = ini.begin_batch()?;
/// batch.write_string("Window", "Left", "10")?;
/// batch.write_string("Window", "Top", "20")?;
/// batch.commit()?;
/// ```
#[must_use = "a batch discards its writes unless committed"]
pub struct Batch<'a> {
    doc: &'a mut IniDocument,
    edits: usize,
    committed: bool,
}

impl<'a> Batch<'a> {
    pub(crate) fn new(doc: &'a mut IniDocument) -> Self {
        Self {
            doc,
            edits: 0,
            committed: false,
        }
    }

    /// Number of writes made through this batch.
    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.edits
    }

    /// The pending content, comments included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        self.doc.pending_lines()
    }

    /// Writes the pending content to storage in one rewrite.
    ///
    /// The store is rewritten even if no writes were made.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written. The pending writes
    /// are discarded in that case.
    pub fn commit(mut self) -> CoreResult<()> {
        self.doc.commit_write_view()?;
        self.committed = true;
        debug!(edits = self.edits, "committed batch");
        Ok(())
    }
}

impl IniRead for Batch<'_> {
    fn read_string(&self, section: &str, key: &str, default: &str) -> String {
        if locator::is_comment(key) {
            return default.to_string();
        }
        match locator::find_key(self.doc.pending_lines(), section, key) {
            Some(found) if !found.value.is_empty() => found.value.to_string(),
            _ => default.to_string(),
        }
    }

    fn default_section(&self) -> &str {
        self.doc.default_section()
    }
}

impl IniWrite for Batch<'_> {
    fn write_string(&mut self, section: &str, key: &str, value: &str) -> CoreResult<()> {
        edit::validate(section, key, value)?;
        let edit = edit::write_entry(self.doc.write_view_mut(), section, key, value);
        self.edits += 1;
        debug!(section, key, ?edit, "deferred write");
        Ok(())
    }
}

impl Drop for Batch<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if self.edits > 0 {
            debug!(edits = self.edits, "discarding uncommitted batch");
        }
        self.doc.discard_write_view();
    }
}

impl std::fmt::Debug for Batch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batch")
            .field("edits", &self.edits)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}
