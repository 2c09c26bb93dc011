//! CLI command implementations.

pub mod dump;
pub mod erase;
pub mod exists;
pub mod get;
pub mod import;
pub mod section;
pub mod set;

use inistore_core::{Config, CoreResult, IniDocument};
use inistore_storage::TextEncoding;
use std::path::Path;

/// Opens the settings file, creating it if missing.
pub fn open(path: &Path, encoding: Option<TextEncoding>) -> CoreResult<IniDocument> {
    let mut config = Config::default();
    if let Some(encoding) = encoding {
        config = config.encoding(encoding);
    }
    IniDocument::open_with_config(path, config)
}
