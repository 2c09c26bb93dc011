//! Dump command implementation.

use inistore_core::IniDocument;

/// Runs the dump command.
pub fn run(ini: &IniDocument) {
    let text = ini.read_all();
    if !text.is_empty() {
        println!("{text}");
    }
}
