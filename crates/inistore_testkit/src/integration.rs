//! Cross-crate integration test helpers.
//!
//! Provides a harness that mirrors every write in a plain map and checks the
//! document against it.

use crate::generators::IniOperation;
use inistore_core::{IniDocument, IniRead, IniWrite};
use std::collections::BTreeMap;

/// A test harness for integration testing.
pub struct IniHarness {
    /// The document under test.
    pub ini: IniDocument,
    /// Expected content by section, then key.
    model: BTreeMap<String, BTreeMap<String, String>>,
}

impl IniHarness {
    /// Creates a new harness over an empty in-memory document.
    pub fn new() -> Self {
        Self::with_document(IniDocument::open_in_memory().expect("Failed to open document"))
    }

    /// Creates a harness over an empty document.
    pub fn with_document(ini: IniDocument) -> Self {
        assert!(
            ini.read_sections().is_empty(),
            "Harness requires an empty document"
        );
        Self {
            ini,
            model: BTreeMap::new(),
        }
    }

    /// Writes a value and tracks it.
    pub fn write(&mut self, section: &str, key: &str, value: &str) {
        self.ini
            .write_string(section, key, value)
            .expect("Failed to write value");
        self.model
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Erases a section and updates tracking.
    pub fn erase(&mut self, section: &str) {
        let erased = self
            .ini
            .erase_section(section)
            .expect("Failed to erase section");
        let tracked = self.model.remove(section).is_some();
        assert_eq!(erased, tracked, "Erase result mismatch for [{section}]");
    }

    /// Reads a value and verifies it matches the tracked one.
    pub fn read_and_verify(&self, section: &str, key: &str) -> Option<String> {
        let expected = self
            .model
            .get(section)
            .and_then(|entries| entries.get(key))
            .cloned();
        let actual = self.ini.read_string(section, key, "");
        assert_eq!(
            actual,
            expected.clone().unwrap_or_default(),
            "Value mismatch for [{section}] {key}"
        );
        expected
    }

    /// Applies one generated operation.
    pub fn apply(&mut self, op: &IniOperation) {
        match op {
            IniOperation::Write {
                section,
                key,
                value,
            } => self.write(section, key, value),
            IniOperation::Erase { section } => self.erase(section),
            IniOperation::Read { section, key } => {
                self.read_and_verify(section, key);
            }
        }
    }

    /// Verifies sections, entries and section order-independent content.
    pub fn verify_all(&self) {
        let mut sections = self.ini.read_sections();
        sections.sort();
        let expected: Vec<_> = self.model.keys().cloned().collect();
        assert_eq!(sections, expected, "Section list mismatch");

        for (section, entries) in &self.model {
            let mut actual = self.ini.read_section_entries(section);
            actual.sort();
            let expected: Vec<_> = entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            assert_eq!(actual, expected, "Entry mismatch for [{section}]");
        }
    }

    /// Returns the number of tracked entries.
    pub fn tracked_count(&self) -> usize {
        self.model.values().map(BTreeMap::len).sum()
    }
}

impl Default for IniHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Common integration checks.
pub mod checks {
    use super::*;

    /// Writes through a batch, verifies nothing was stored before commit,
    /// then verifies everything was stored after.
    pub fn check_batch_deferral(ini: &mut IniDocument, entries: &[(&str, &str, &str)]) {
        let before = ini.store().read_lines().expect("Failed to read store");

        let mut batch = ini.begin_batch().expect("Failed to begin batch");
        for (section, key, value) in entries {
            batch
                .write_string(section, key, value)
                .expect("Failed to write in batch");
        }
        let pending = batch.lines().to_vec();
        batch.commit().expect("Failed to commit batch");

        let after = ini.store().read_lines().expect("Failed to read store");
        assert_ne!(before, pending, "Batch produced no changes");
        assert_eq!(after, pending, "Commit did not store the batch");
        for (section, key, value) in entries {
            assert_eq!(ini.read_string(section, key, ""), *value);
        }
    }

    /// Verifies a comment line survives a write and stays invisible.
    pub fn check_comment_preserved(ini: &mut IniDocument, section: &str, comment: &str) {
        assert!(comment.starts_with(';'), "Not a comment: {comment}");
        ini.write_string(section, "probe", "1")
            .expect("Failed to write probe");

        let stored = ini.store().read_lines().expect("Failed to read store");
        assert!(
            stored.iter().any(|line| line == comment),
            "Comment {comment:?} lost by write"
        );
        assert!(!ini.read_all().contains(comment), "Comment visible to reads");
    }
}
