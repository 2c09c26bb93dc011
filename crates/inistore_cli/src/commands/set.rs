//! Set command implementation.

use inistore_core::{IniDocument, IniWrite};
use tracing::info;

/// Runs the set command.
pub fn run(
    ini: &mut IniDocument,
    section: &str,
    key: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    ini.write_string(section, key, value)?;
    info!(section, key, "value written");
    Ok(())
}
