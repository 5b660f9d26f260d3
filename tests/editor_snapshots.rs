//! Inline snapshots of editor state after short editing sessions.

mod common;

use common::Harness;
use std::path::PathBuf;
use textcore::{Command, Direction, Editor, Position};

const MIXED_CRLF: &[u8] = include_bytes!("fixtures/mixed_crlf.txt");

/// One-line summary: lines, cursor and selection.
fn state(editor: &Editor) -> String {
    let lines: Vec<&str> = editor.buffer().lines().collect();
    let selection = editor
        .selection_range()
        .map_or_else(|| "-".to_string(), |(start, end)| format!("{start}..{end}"));
    format!("{lines:?} @{} sel={selection}", editor.cursor().position())
}

#[test]
fn snapshot_newline_split() {
    let mut editor = Editor::with_text("hello\nworld");
    editor.set_cursor(Position::new(0, 5));
    editor.insert("\n");
    insta::assert_snapshot!(state(&editor), @r#"["hello", "", "world"] @1:0 sel=-"#);
}

#[test]
fn snapshot_word_selection_replaced_by_typing() {
    let mut editor = Editor::with_text("one two three");
    editor.move_word(Direction::Forward);
    editor.extend_selection(true);
    editor.move_word(Direction::Forward);
    insta::assert_snapshot!(state(&editor), @r#"["one two three"] @0:7 sel=0:3..0:7"#);

    editor.insert("2");
    insta::assert_snapshot!(state(&editor), @r#"["one2 three"] @0:4 sel=-"#);
}

#[test]
fn snapshot_replace_all_across_lines() {
    let mut editor = Editor::with_text("a.b\na.b");
    editor.find(".");
    editor.set_replacement("::");
    assert_eq!(editor.replace_all(), 2);
    insta::assert_snapshot!(state(&editor), @r#"["a::b", "a::b"] @0:3 sel=-"#);
}

#[test]
fn snapshot_history_after_typing() {
    let mut editor = Editor::new();
    editor.insert("a");
    editor.insert("b");
    editor.delete_backward();
    let history = editor.history();
    let top = history
        .peek_undo()
        .map(|action| format!("{:?}({:?}) at {}", action.kind, action.text, action.start))
        .unwrap_or_default();
    insta::assert_snapshot!(
        format!("undo={} redo={} top={top}", history.undo_len(), history.redo_len()),
        @r#"undo=3 redo=0 top=Delete("b") at 0:1"#
    );
}

#[test]
fn snapshot_crlf_fixture_load() {
    let mut h = Harness::new("");
    h.storage.insert("mixed.txt", MIXED_CRLF);
    h.run([Command::Load(PathBuf::from("mixed.txt"))]).unwrap();
    insta::assert_snapshot!(
        state(&h.editor),
        @r#"["naïve café", "漢字 text", "\tindented", ""] @0:0 sel=-"#
    );
}
