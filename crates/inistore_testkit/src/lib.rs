//! # inistore Testkit
//!
//! Test utilities for inistore.
//!
//! This crate provides:
//! - Test fixtures and document helpers
//! - Property-based test generators using proptest
//! - A model-checking harness for cross-crate integration tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inistore_testkit::prelude::*;
//! use inistore_core::{IniRead, IniWrite};
//!
//! #[test]
//! fn test_with_document() {
//!     with_temp_ini(|ini| {
//!         ini.write_string("Window", "Width", "800").unwrap();
//!         assert_eq!(ini.read_int("Window", "Width", 0), 800);
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
