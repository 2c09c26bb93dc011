//! Import command implementation.

use inistore_core::{locator, IniDocument, IniRead, IniWrite};
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Malformed import input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("line {line}: expected key=value, found {text:?}")]
pub struct ImportError {
    /// One-based line number.
    pub line: usize,
    /// Offending text.
    pub text: String,
}

/// Parses `key=value` lines. Blank lines and `;` comments are skipped.
pub fn parse_pairs(input: &str) -> Result<Vec<(String, String)>, ImportError> {
    let mut pairs = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || locator::is_comment(line) {
            continue;
        }
        let (key, value) = locator::split_entry(line).ok_or_else(|| ImportError {
            line: number + 1,
            text: line.to_string(),
        })?;
        pairs.push((key.trim().to_string(), value.to_string()));
    }
    Ok(pairs)
}

/// Runs the import command.
pub fn run(
    ini: &mut IniDocument,
    section: Option<&str>,
    input: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let pairs = parse_pairs(&text)?;
    let section = section.map_or_else(|| ini.default_section().to_string(), str::to_string);
    debug!(section = %section, pairs = pairs.len(), "importing");

    let written = ini.batch(|batch| {
        for (key, value) in &pairs {
            batch.write_string(&section, key, value)?;
        }
        Ok(batch.edit_count())
    })?;

    info!(section = %section, written, "import committed");
    println!("Imported {written} entries into [{section}]");
    Ok(())
}
