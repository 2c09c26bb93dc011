//! Erase command implementation.

use inistore_core::IniDocument;

/// Runs the erase command.
pub fn run(ini: &mut IniDocument, section: &str) -> Result<(), Box<dyn std::error::Error>> {
    if ini.erase_section(section)? {
        println!("Erased section [{section}]");
    } else {
        println!("Section [{section}] not found");
    }
    Ok(())
}
