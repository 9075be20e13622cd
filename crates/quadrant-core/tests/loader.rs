// File: crates/quadrant-core/tests/loader.rs
// Purpose: CSV ingestion, internal-flag parsing and the sample-data fallback paths.

use std::io::Write;
use std::path::Path;

use quadrant_core::{load_entries, read_entries, sample_entries, Entry, LoadError, LoadPolicy};

fn write_csv(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create csv");
    f.write_all(body.as_bytes()).expect("write csv");
    path
}

#[test]
fn no_path_uses_sample_data() {
    let entries = load_entries(None, LoadPolicy::Lenient).expect("lenient never fails");
    assert_eq!(entries, sample_entries());
}

#[test]
fn missing_file_matches_no_csv() {
    let missing = Path::new("definitely/not/here/team.csv");
    let entries = load_entries(Some(missing), LoadPolicy::Lenient).expect("fallback");
    assert_eq!(entries, load_entries(None, LoadPolicy::Lenient).unwrap());
}

#[test]
fn header_only_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", "name,skill,will,prev_skill,prev_will,internal\n");
    let entries = load_entries(Some(&path), LoadPolicy::Lenient).unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries, sample_entries());

    let err = read_entries(&path).unwrap_err();
    assert!(matches!(err, LoadError::Empty { .. }), "got {err:?}");
}

#[test]
fn six_column_rows_carry_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "team.csv",
        "name,skill,will,prev_skill,prev_will,internal\n\
         Ana, 40, -10, 20, -30, yes\n\
         Ben,-5,15,-5,15,External\n",
    );
    let entries = read_entries(&path).expect("valid csv");
    assert_eq!(
        entries,
        vec![
            Entry::new("Ana", 40.0, -10.0, true).with_previous(20.0, -30.0),
            Entry::new("Ben", -5.0, 15.0, false),
        ]
    );
    assert!(entries[0].has_moved());
    assert!(!entries[1].has_moved());
}

#[test]
fn four_column_rows_have_no_history_and_short_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "short.csv",
        "name,skill,will,internal\n\
         Cat,10,20,INTERNAL\n\
         only,two\n\
         Dan,-1,-2,0\n",
    );
    let entries = read_entries(&path).expect("valid csv");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0], Entry::new("Cat", 10.0, 20.0, true));
    assert_eq!(entries[1], Entry::new("Dan", -1.0, -2.0, false));
}

#[test]
fn internal_flag_truthy_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::from("name,skill,will,internal\n");
    let flags = ["true", "True", "YES", "1", "internal", "no", "false", "0", "ext", "contractor"];
    for (i, f) in flags.iter().enumerate() {
        body.push_str(&format!("p{i},0,0,{f}\n"));
    }
    let path = write_csv(&dir, "flags.csv", &body);
    let got: Vec<bool> = read_entries(&path).unwrap().iter().map(|e| e.is_internal).collect();
    assert_eq!(got, [true, true, true, true, true, false, false, false, false, false]);
}

#[test]
fn malformed_number_aborts_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "bad.csv",
        "name,skill,will,prev_skill,prev_will,internal\n\
         Ok,1,2,1,2,true\n\
         Bad,high,2,1,2,true\n",
    );

    match read_entries(&path) {
        Err(LoadError::InvalidNumber { line, column, value, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(column, "skill");
            assert_eq!(value, "high");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }

    let lenient = load_entries(Some(&path), LoadPolicy::Lenient).unwrap();
    assert_eq!(lenient, sample_entries());
}

#[test]
fn strict_policy_surfaces_errors() {
    let missing = Path::new("nope/missing.csv");
    let err = load_entries(Some(missing), LoadPolicy::Strict).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }), "got {err:?}");
    assert!(err.to_string().contains("missing.csv"));
}
