use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn test_overwrite_byte_under_cursor() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.run_prompt('e', "7a").unwrap();

    harness.assert_buffer_content(b"AzC");
    assert_eq!(harness.cursor_position(), 1);

    harness.render().unwrap();
    harness.assert_screen_contains("41 7A 43");
    harness.assert_screen_contains("AzC");
}

#[test]
fn test_edit_prompt_is_shown() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.send_key(KeyCode::Char('e'), KeyModifiers::NONE).unwrap();
    harness.type_text("f").unwrap();
    harness.render().unwrap();

    assert!(harness
        .status_line()
        .starts_with("Enter new hex value (00-FF): f"));
}

#[test]
fn test_insert_at_cursor_shifts_tail() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.run_prompt('i', "58 59").unwrap();

    harness.assert_buffer_content(b"AXYBC");
    assert_eq!(harness.cursor_position(), 1);
}

#[test]
fn test_append_at_end() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.run_prompt('a', "44").unwrap();

    harness.assert_buffer_content(b"ABCD");
    assert_eq!(harness.cursor_position(), 3);
}

#[test]
fn test_append_into_empty_file() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("Empty file.");

    harness.run_prompt('a', "0x41 42").unwrap();
    harness.assert_buffer_content(b"AB");

    harness.render().unwrap();
    harness.assert_screen_contains("00000000  41 42");
    harness.assert_screen_contains("Size: 2 bytes");
}

#[test]
fn test_delete_keeps_cursor_in_bounds() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char('d'), KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content(b"AC");
    assert_eq!(harness.cursor_position(), 1);

    // Delete key does the same; cursor falls back onto the new last byte
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    harness.assert_buffer_content(b"A");
    assert_eq!(harness.cursor_position(), 0);
}

#[test]
fn test_delete_in_empty_file_reports() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::Char('d'), KeyModifiers::NONE).unwrap();
    harness.render().unwrap();

    assert!(harness.status_line().starts_with("Nothing to delete."));
    assert!(!harness.app().session().is_modified());
}

#[test]
fn test_edit_in_empty_file_reports() {
    let mut harness = EditorTestHarness::new(80, 24).unwrap();
    harness.send_key(KeyCode::Char('e'), KeyModifiers::NONE).unwrap();
    harness.render().unwrap();

    assert!(harness.app().prompt().is_none());
    assert!(harness.status_line().starts_with("Buffer is empty."));
}

#[test]
fn test_invalid_hex_leaves_buffer_alone() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.run_prompt('i', "41 zz").unwrap();
    harness.render().unwrap();

    harness.assert_buffer_content(b"ABC");
    assert!(harness
        .status_line()
        .starts_with("Invalid hex byte 'zz' (expected 00-FF)"));
    assert!(!harness.app().session().is_modified());
}

#[test]
fn test_escape_cancels_prompt() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    harness.send_key(KeyCode::Char('e'), KeyModifiers::NONE).unwrap();
    harness.type_text("ff").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(harness.app().prompt().is_none());
    harness.assert_buffer_content(b"ABC");
}

#[test]
fn test_prompt_swallows_command_keys() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABC").unwrap();
    // 'q' and 'd' are typed into the search prompt, not run
    harness.run_prompt('/', "qd").unwrap();

    assert!(!harness.should_quit());
    harness.assert_buffer_content(b"ABC");
}
