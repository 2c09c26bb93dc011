//! Behavioral properties of settings documents, checked end to end.

use inistore_core::{Config, IniDocument, IniRead, IniWrite};
use inistore_storage::{LineEnding, TextEncoding};
use inistore_testkit::prelude::*;
use proptest::prelude::*;

#[test]
fn scenario_reads() {
    let test_ini = TestIni::file_from_text(scenarios::TWO_SECTIONS);
    assert_eq!(test_ini.read_string("A", "k1", ""), "1");
    assert_eq!(test_ini.read_string("B", "k1", ""), "2");
    assert_eq!(test_ini.read_string("A", "k2", "x"), "x");
}

#[test]
fn scenario_write_to_empty_file() {
    let mut test_ini = TestIni::file();
    test_ini.write_string("S", "K", "V").unwrap();
    assert_eq!(test_ini.file_text(), "[S]\nK=V\n");
}

#[test]
fn default_fallback_for_missing_section_and_key() {
    let test_ini = TestIni::file_from_text(scenarios::TWO_SECTIONS);
    assert_eq!(test_ini.read_string("Missing", "k1", "d"), "d");
    assert_eq!(test_ini.read_string("A", "missing", "d"), "d");
    assert_eq!(test_ini.read_int("Missing", "k1", 42), 42);
}

#[test]
fn comment_is_hidden_but_survives_full_rewrite() {
    let mut test_ini = TestIni::file_from_text(scenarios::COMMENTED);
    assert_eq!(test_ini.read_string("A", "foo", ""), "baz");

    test_ini.write_string("A", "foo", "qux").unwrap();
    assert_eq!(
        test_ini.file_text(),
        "; settings\n[A]\n;foo=bar\nfoo=qux\n\n; trailer\n"
    );
    assert_eq!(test_ini.reopen().read_string("A", "foo", ""), "qux");
}

#[test]
fn batch_defers_until_commit() {
    let mut test_ini = TestIni::file_from_text(scenarios::TWO_SECTIONS);
    let path = test_ini.path().unwrap().to_path_buf();
    let original = test_ini.file_text();

    let mut batch = test_ini.begin_batch().unwrap();
    batch.write_string("A", "k1", "one").unwrap();
    batch.write_string("C", "new", "value").unwrap();
    drop(batch);
    assert_eq!(test_ini.file_text(), original);

    let mut batch = test_ini.begin_batch().unwrap();
    batch.write_string("A", "k1", "one").unwrap();
    batch.write_string("C", "new", "value").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    batch.commit().unwrap();

    assert_eq!(
        test_ini.file_text(),
        "[A]\nk1=one\n\n[B]\nk1=2\n\n[C]\nnew=value\n"
    );
}

#[test]
fn erase_section_removes_it() {
    let mut test_ini = TestIni::file_from_text("[A]\nk=1\n\n[B]\nx=1\n\n[C]\nz=1\n");
    assert!(test_ini.erase_section("B").unwrap());
    assert!(!test_ini.section_exists("B"));
    assert!(!test_ini.reopen().section_exists("B"));
    assert!(test_ini.reopen().section_exists("C"));
}

#[test]
fn erasing_missing_section_leaves_file_alone() {
    let mut test_ini = TestIni::file_from_text("[A]\r\nk=1");
    assert!(!test_ini.erase_section("B").unwrap());
    assert_eq!(test_ini.file_text(), "[A]\r\nk=1");
}

#[test]
fn new_section_is_appended_without_rewriting() {
    let mut test_ini = TestIni::file_from_text("[A]\r\nk=1\r\n");
    test_ini.write_string("B", "x", "2").unwrap();

    let bytes = std::fs::read(test_ini.path().unwrap()).unwrap();
    assert!(bytes.starts_with(b"[A]\r\nk=1\r\n"));
    assert_eq!(bytes, b"[A]\r\nk=1\r\n\n[B]\nx=2\n");
}

#[test]
fn existing_section_write_rewrites_whole_file() {
    let mut test_ini = TestIni::file_from_text("[A]\r\nk=1\r\n");
    test_ini.write_string("A", "k", "2").unwrap();

    let bytes = std::fs::read(test_ini.path().unwrap()).unwrap();
    assert_eq!(bytes, b"[A]\nk=2\n");
}

#[test]
fn utf16_default_encoding_round_trips() {
    let mut test_ini = TestIni::file_with_config(Config::default());
    test_ini.write_string("Grüße", "schlüssel", "wert ✓").unwrap();

    let bytes = std::fs::read(test_ini.path().unwrap()).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
    assert_eq!(
        test_ini.reopen().read_string("Grüße", "schlüssel", ""),
        "wert ✓"
    );
}

#[test]
fn bom_overrides_configured_encoding() {
    let mut test_ini = TestIni::file_with_config(Config::default().encoding(TextEncoding::Utf16Be));
    test_ini.write_string("A", "k", "v").unwrap();

    let config = Config::default()
        .encoding(TextEncoding::Utf8)
        .line_ending(LineEnding::Lf);
    let mut other = IniDocument::open_with_config(test_ini.path().unwrap(), config).unwrap();
    assert_eq!(other.read_string("A", "k", ""), "v");

    other.write_string("A", "j", "w").unwrap();
    let bytes = std::fs::read(test_ini.path().unwrap()).unwrap();
    assert_eq!(&bytes[..2], &[0xFE, 0xFF]);
    assert_eq!(test_ini.reopen().read_string("A", "j", ""), "w");
}

proptest! {
    #![proptest_config(PropTestConfig::file_backed().to_proptest_config())]

    #[test]
    fn written_value_reads_back((section, key, value) in entry_strategy()) {
        let mut test_ini = TestIni::file_from_text(scenarios::COMMENTED);
        test_ini.write_string(&section, &key, &value).unwrap();
        prop_assert_eq!(test_ini.read_string(&section, &key, ""), value.clone());
        prop_assert_eq!(test_ini.reopen().read_string(&section, &key, ""), value);
    }

    #[test]
    fn writing_twice_keeps_one_entry((section, key, value) in entry_strategy()) {
        let mut test_ini = TestIni::memory();
        test_ini.write_string(&section, &key, &value).unwrap();
        let once = test_ini.stored_lines();
        test_ini.write_string(&section, &key, &value).unwrap();
        prop_assert_eq!(test_ini.stored_lines(), once);

        let entry = format!("{key}={value}");
        let count = test_ini.read_section(&section).iter().filter(|line| **line == entry).count();
        prop_assert_eq!(count, 1);
    }

    #[test]
    fn batch_commit_equals_immediate_writes(entries in prop::collection::vec(entry_strategy(), 1..8)) {
        let mut immediate = TestIni::memory();
        for (section, key, value) in &entries {
            immediate.write_string(section, key, value).unwrap();
        }

        let mut batched = TestIni::memory();
        batched
            .batch(|batch| {
                for (section, key, value) in &entries {
                    batch.write_string(section, key, value)?;
                }
                Ok(())
            })
            .unwrap();

        prop_assert_eq!(batched.stored_lines(), immediate.stored_lines());
    }
}
