use indexmap::IndexMap;
use tempfile::TempDir;

use super::*;

#[test]
fn writes_pretty_json_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out/language_stats.json");
    let mut stats: IndexMap<String, u64> = IndexMap::new();
    stats.insert("Rust".to_string(), 10);
    stats.insert("C".to_string(), 5);

    write_json(&path, &stats).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\n  \"Rust\": 10,\n  \"C\": 5\n}\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.json");
    fs::write(&path, "old").unwrap();

    write_json(&path, &[1, 2]).unwrap();

    assert!(fs::read_to_string(&path).unwrap().starts_with('['));
}

#[test]
fn empty_map_is_braces() {
    let empty: IndexMap<String, u64> = IndexMap::new();
    assert_eq!(to_pretty_json(&empty).unwrap(), "{}\n");
}
