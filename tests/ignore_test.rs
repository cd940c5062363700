use fledge::constants::IGNORE_FILE;
use fledge::ignore::parse_ignore_file;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_parse_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);

    // Without .fledgeignore
    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert!(glob_set.is_empty());

    // With .fledgeignore
    let mut file = File::create(&ignore_path).unwrap();
    writeln!(file, "# keep my edits\nREADME.md\n\nlib/core/theme/*.dart").unwrap();

    let glob_set = parse_ignore_file(&ignore_path).unwrap();
    assert_eq!(glob_set.len(), 2);
    assert!(glob_set.is_match("README.md"));
    assert!(glob_set.is_match("lib/core/theme/app_theme.dart"));
    assert!(!glob_set.is_match("lib/main.dart"));
}

#[test]
fn test_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let ignore_path = temp_dir.path().join(IGNORE_FILE);
    std::fs::write(&ignore_path, "lib/[unclosed\n").unwrap();
    assert!(parse_ignore_file(&ignore_path).is_err());
}
