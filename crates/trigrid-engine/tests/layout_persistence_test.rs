//! Column-width codec against a real file, the way an embedder persists
//! layout between sessions.

use std::fs;

use trigrid_engine::column_layout::{
    default_column_widths, encode_column_widths, restore_column_widths, set_width,
};

#[test]
fn widths_survive_a_disk_round_trip() {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(err) => panic!("tempdir failed: {err}"),
    };
    let path = dir.path().join("column-widths.json");

    let mut widths = default_column_widths();
    set_width(&mut widths, 1, 180);
    set_width(&mut widths, 3, 95);

    if let Err(err) = fs::write(&path, encode_column_widths(&widths)) {
        panic!("write failed: {err}");
    }
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => panic!("read failed: {err}"),
    };

    let outcome = restore_column_widths(&raw);
    assert_eq!(outcome.widths, widths);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn corrupt_file_degrades_to_defaults() {
    let outcome = restore_column_widths("\u{0}garbage");
    assert_eq!(outcome.widths, default_column_widths());
    assert_eq!(outcome.warnings.len(), 1);
}
