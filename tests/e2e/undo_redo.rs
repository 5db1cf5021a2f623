use crate::common::harness::EditorTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn press(harness: &mut EditorTestHarness, c: char) {
    harness.send_key(KeyCode::Char(c), KeyModifiers::NONE).unwrap();
}

#[test]
fn test_undo_and_redo_every_edit_kind() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"ABCD").unwrap();

    harness.run_prompt('e', "00").unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.run_prompt('i', "ff").unwrap();
    press(&mut harness, 'd');
    harness.assert_buffer_content(&[0x00, b'B', b'C', b'D']);

    press(&mut harness, 'u');
    harness.assert_buffer_content(&[0x00, 0xFF, b'B', b'C', b'D']);
    assert_eq!(harness.app().status_message(), Some("Undid delete at 0x1."));

    press(&mut harness, 'u');
    harness.assert_buffer_content(&[0x00, b'B', b'C', b'D']);
    assert_eq!(harness.app().status_message(), Some("Undid insert at 0x1."));

    press(&mut harness, 'u');
    harness.assert_buffer_content(b"ABCD");
    assert_eq!(harness.cursor_position(), 0);
    assert!(!harness.app().session().is_modified());

    press(&mut harness, 'u');
    harness.render().unwrap();
    assert!(harness.status_line().starts_with("Nothing to undo."));

    for _ in 0..3 {
        press(&mut harness, 'r');
    }
    harness.assert_buffer_content(&[0x00, b'B', b'C', b'D']);
    assert_eq!(harness.app().status_message(), Some("Redid delete at 0x1."));
}

#[test]
fn test_new_edit_discards_redo() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"AB").unwrap();
    harness.run_prompt('e', "31").unwrap();
    press(&mut harness, 'u');
    harness.run_prompt('e', "32").unwrap();

    press(&mut harness, 'r');
    harness.render().unwrap();
    assert!(harness.status_line().starts_with("Nothing to redo."));
    harness.assert_buffer_content(b"2B");
}

#[test]
fn test_undo_to_saved_point_clears_modified_flag() {
    let mut harness = EditorTestHarness::with_bytes(80, 24, b"AB").unwrap();
    harness.run_prompt('e', "31").unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("[MODIFIED]");

    press(&mut harness, 'u');
    // status message is shown for one key press
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.render().unwrap();
    harness.assert_screen_not_contains("[MODIFIED]");

    press(&mut harness, 'r');
    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.render().unwrap();
    harness.assert_screen_contains("[MODIFIED]");
}

#[test]
fn test_undo_moves_cursor_to_edit() {
    let data: Vec<u8> = (0..64).collect();
    let mut harness = EditorTestHarness::with_bytes(80, 24, &data).unwrap();
    harness.send_key(KeyCode::End, KeyModifiers::NONE).unwrap();
    harness.run_prompt('e', "aa").unwrap();
    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();

    press(&mut harness, 'u');
    assert_eq!(harness.cursor_position(), 63);
    assert_eq!(harness.get_buffer_bytes(), data);
}
