// tests/sanitize_test.rs
use release_hygiene::config::default_scan_files;
use release_hygiene::sanitize::{
    extract_literals, is_generic_email, is_generic_location, is_generic_phone, looks_like_address,
    scan_file, scan_files, FindingCategory,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CLEAN_TEST_FILE: &str = r#"
"""Unit tests for the CLI."""
import pytest

PROFILE = {
    "name": "Jane Smith",
    "email": "jane.smith@example.com",
    "phone": "+1 555 0134",
    "address": (
        "123 Main St, "
        "Anytown, USA"
    ),
}


def test_render(tmp_path):
    # mobile: +351 912 345 678 (comment, ignored)
    result = render(PROFILE, output=f"{tmp_path}/signature.html")
    assert "Jane Smith" in result
    assert b"\x00" not in result.encode()
"#;

const DIRTY_TEST_FILE: &str = r#"
PROFILE = {
    "email": "maria.santos@empresa.pt",
    "phone": "+351 912 345 678",
    "address": "Rua Augusta St, 1100-048 Lisboa",
}
"#;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_predicates() {
    assert!(is_generic_email("jane@example.com"));
    assert!(!is_generic_email("jane@realcompany.pt"));
    assert!(is_generic_phone("+1 555 0134"));
    assert!(!is_generic_phone("+351 912 345 678"));
    assert!(is_generic_location("123 Main St, Anytown, USA"));
    assert!(!is_generic_location("Rua Augusta St, Lisboa"));
    assert!(looks_like_address("Rua Augusta St, Lisboa"));
}

#[test]
fn test_extract_literals_from_test_source() {
    let dir = TempDir::new().unwrap();
    write(&dir, "test_cli.py", CLEAN_TEST_FILE);

    let literals = extract_literals(&dir.path().join("test_cli.py"));
    assert!(literals.contains(&"Unit tests for the CLI.".to_string()));
    assert!(literals.contains(&"123 Main St, Anytown, USA".to_string()));
    assert!(literals.contains(&"/signature.html".to_string()));
    assert!(!literals.iter().any(|l| l.contains("+351")));
    assert!(!literals.iter().any(|l| l.contains('\0')));
}

#[test]
fn test_generic_file_has_no_findings() {
    let dir = TempDir::new().unwrap();
    write(&dir, "test_cli.py", CLEAN_TEST_FILE);
    assert!(scan_file(&dir.path().join("test_cli.py")).is_empty());
}

#[test]
fn test_real_data_is_reported_per_category() {
    let dir = TempDir::new().unwrap();
    write(&dir, "tests/unit/test_use_cases.py", DIRTY_TEST_FILE);

    let findings = scan_files(dir.path(), &default_scan_files());
    let categories: Vec<FindingCategory> = findings.iter().map(|f| f.category).collect();

    assert!(categories.contains(&FindingCategory::Email));
    assert!(categories.contains(&FindingCategory::Phone));
    assert!(categories.contains(&FindingCategory::Location));
    assert!(findings
        .iter()
        .all(|f| f.file == dir.path().join("tests/unit/test_use_cases.py")));
}

#[test]
fn test_data_inside_fstring_fields_is_reported() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "test_render.py",
        "label = f\"{name or 'maria@empresa.pt'}\"\nline = f\"{d[\"phone\"]:>20} jane@real.pt\"\n",
    );

    let findings = scan_file(&dir.path().join("test_render.py"));
    let values: Vec<&str> = findings.iter().map(|f| f.value.as_str()).collect();
    assert!(values.contains(&"maria@empresa.pt"), "{:?}", values);
    assert!(values.contains(&"jane@real.pt"), "{:?}", values);
    assert!(findings.iter().all(|f| f.category == FindingCategory::Email));
}

#[test]
fn test_unparseable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "test_broken.py",
        "EMAIL = 'maria@empresa.pt'\nBROKEN = \"never closed\n",
    );
    assert!(scan_file(&dir.path().join("test_broken.py")).is_empty());
}

#[test]
fn test_missing_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    assert!(scan_files(dir.path(), &default_scan_files()).is_empty());
    assert!(scan_file(Path::new("/definitely/not/here.py")).is_empty());
}
