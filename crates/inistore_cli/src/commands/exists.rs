//! Exists command implementation.

use inistore_core::IniDocument;

/// Runs the exists command, printing and returning the answer.
pub fn run(ini: &IniDocument, section: &str, key: Option<&str>) -> bool {
    let found = match key {
        Some(key) => ini.key_exists(section, key),
        None => ini.section_exists(section),
    };
    println!("{found}");
    found
}
