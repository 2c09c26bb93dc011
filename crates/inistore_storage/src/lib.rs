//! # inistore Storage
//!
//! Backing store trait and implementations for inistore.
//!
//! This crate provides the lowest-level storage abstraction for settings
//! documents. Stores are **line stores**: they read, rewrite and append whole
//! lines and own the text encoding and newline convention, but they do not
//! interpret sections, entries or comments.
//!
//! ## Design Principles
//!
//! - Stores are simple line stores (read all, write all, append)
//! - No knowledge of the INI format
//! - Must be `Send + Sync`
//! - The document layer owns all format interpretation
//!
//! ## Available Stores
//!
//! - [`InMemoryStore`] - For testing
//! - [`FileStore`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use inistore_storage::{InMemoryStore, TextStore};
//!
//! let mut store = InMemoryStore::new();
//! store.create().unwrap();
//! store.write_lines(&["[Common]".to_string(), "x=1".to_string()]).unwrap();
//! assert_eq!(store.read_lines().unwrap(), vec!["[Common]", "x=1"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod encoding;
mod error;
mod file;
mod memory;

pub use backend::TextStore;
pub use encoding::{join_lines, split_lines, LineEnding, TextEncoding};
pub use error::{StorageError, StorageResult};
pub use file::FileStore;
pub use memory::InMemoryStore;
