//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random settings data that can always
//! be written as a single entry line.

use proptest::prelude::*;

/// Strategy for generating section names.
pub fn section_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9_ .]{0,15}").expect("Invalid regex")
}

/// Strategy for generating keys that are valid for writing.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_.-]{0,15}").expect("Invalid regex")
}

/// Strategy for generating non-empty single-line values.
///
/// Values may contain `=`, `;`, `[` and non-ASCII text.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n]{1,32}").expect("Invalid regex")
}

/// Strategy for generating a `(section, key, value)` triple.
pub fn entry_strategy() -> impl Strategy<Value = (String, String, String)> {
    (section_name_strategy(), key_strategy(), value_strategy())
}

/// A single operation against a document.
#[derive(Debug, Clone)]
pub enum IniOperation {
    /// Write a value
    Write {
        /// Section name
        section: String,
        /// Key
        key: String,
        /// Value
        value: String,
    },
    /// Erase a section
    Erase {
        /// Section name
        section: String,
    },
    /// Read a value
    Read {
        /// Section name
        section: String,
        /// Key
        key: String,
    },
}

/// Strategy for generating operations over a small name space so that
/// writes, reads and erasures collide often.
pub fn ini_operation_strategy() -> impl Strategy<Value = IniOperation> {
    let section = prop::sample::select(vec!["A", "B", "C", "Common"]).prop_map(str::to_string);
    let key = prop::sample::select(vec!["k", "k1", "key", "x"]).prop_map(str::to_string);
    prop_oneof![
        4 => (section.clone(), key.clone(), value_strategy())
            .prop_map(|(section, key, value)| IniOperation::Write { section, key, value }),
        1 => section.clone().prop_map(|section| IniOperation::Erase { section }),
        2 => (section, key).prop_map(|(section, key)| IniOperation::Read { section, key }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<IniOperation>> {
    prop::collection::vec(ini_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for file-backed tests, which are slower.
    #[must_use]
    pub fn file_backed() -> Self {
        Self {
            cases: 64,
            max_shrink_iters: 200,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
