//! # inistore Core
//!
//! Settings documents in the classic INI layout.
//!
//! This crate provides:
//! - Section and key location over line views
//! - In-place entry updates that keep comments and unrelated lines
//! - Typed accessors (integers, floats, booleans, dates, rectangles, bytes)
//! - Batches that apply many writes with a single rewrite
//!
//! ## Example
//!
//! ```rust
//! use inistore_core::{IniDocument, IniRead, IniWrite};
//!
//! let mut ini = IniDocument::open_in_memory().unwrap();
//! ini.write_int("Window", "Width", 800).unwrap();
//! assert_eq!(ini.read_int("Window", "Width", 0), 800);
//! assert_eq!(ini.read_string("Window", "Title", "untitled"), "untitled");
//! ```
//!
//! ## Line Format
//!
//! ```text
//! ; comment
//! [Section]
//! key=value
//!
//! [Other]
//! key=value
//! ```
//!
//! A section runs from its header to the next blank line or header. Lines
//! starting with `;` are comments: reads never see them, writes keep them.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod config;
mod document;
mod edit;
mod error;
pub mod locator;
mod typed;
mod value;

pub use batch::Batch;
pub use config::{Config, DEFAULT_FILE_NAME, DEFAULT_SECTION};
pub use document::IniDocument;
pub use error::{CoreError, CoreResult};
pub use typed::{IniRead, IniWrite};
pub use value::{IniValue, ParseRectError, Rect, DATE_FORMAT, DATE_TIME_FORMAT};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
