//! Section listing commands.

use inistore_core::IniDocument;
use serde::Serialize;

/// Entries of one section.
#[derive(Debug, Serialize)]
pub struct SectionResult {
    /// Section name.
    pub name: String,
    /// Whether the section header was found.
    pub exists: bool,
    /// Entries in document order.
    pub entries: Vec<EntryResult>,
}

/// A single entry.
#[derive(Debug, Serialize)]
pub struct EntryResult {
    /// Key.
    pub key: String,
    /// Raw value.
    pub value: String,
}

impl SectionResult {
    fn collect(ini: &IniDocument, name: &str) -> Self {
        Self {
            name: name.to_string(),
            exists: ini.section_exists(name),
            entries: ini
                .read_section_entries(name)
                .into_iter()
                .map(|(key, value)| EntryResult { key, value })
                .collect(),
        }
    }
}

/// Runs the sections command.
pub fn list(ini: &IniDocument, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let names = ini.read_sections();
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        _ => {
            for name in names {
                println!("{name}");
            }
        }
    }
    Ok(())
}

/// Runs the section command.
pub fn show(ini: &IniDocument, name: &str, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = SectionResult::collect(ini, name);
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => print_text_output(&result),
    }
    Ok(())
}

fn print_text_output(result: &SectionResult) {
    if !result.exists {
        println!("Section [{}] not found", result.name);
        return;
    }
    println!("[{}]", result.name);
    for entry in &result.entries {
        println!("{}={}", entry.key, entry.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inistore_core::IniWrite;

    #[test]
    fn collect_section_entries() {
        let mut ini = IniDocument::open_in_memory().unwrap();
        ini.write_string("Window", "Width", "800").unwrap();
        ini.write_string("Window", "Title", "a=b").unwrap();

        let result = SectionResult::collect(&ini, "Window");
        assert!(result.exists);
        let pairs: Vec<_> = result
            .entries
            .iter()
            .map(|e| (e.key.as_str(), e.value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Title", "a=b"), ("Width", "800")]);
    }

    #[test]
    fn section_json_shape() {
        let mut ini = IniDocument::open_in_memory().unwrap();
        ini.write_string("A", "k", "v").unwrap();

        let json = serde_json::to_value(SectionResult::collect(&ini, "A")).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["exists"], true);
        assert_eq!(json["entries"][0]["key"], "k");
        assert_eq!(json["entries"][0]["value"], "v");
    }

    #[test]
    fn missing_section_result() {
        let ini = IniDocument::open_in_memory().unwrap();
        let result = SectionResult::collect(&ini, "Nope");
        assert!(!result.exists);
        assert!(result.entries.is_empty());
    }
}
