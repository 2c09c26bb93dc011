//! Get command implementation.

use inistore_core::{IniDocument, IniRead};

/// Runs the get command.
pub fn run(ini: &IniDocument, section: &str, key: &str, default: &str) {
    println!("{}", ini.read_string(section, key, default));
}
