//! Fuzz target for command sequences.
//!
//! Runs arbitrary editing scripts and checks that the cursor stays inside
//! the buffer and that undoing everything restores the starting text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::path::Path;
use textcore::{Command, Direction, Editor, EditorOptions, MemoryClipboard, MemoryStorage};

#[derive(Arbitrary, Debug)]
enum Op {
    Move { drow: i8, dcol: i8 },
    Place { x: u16, y: u16 },
    Extend(bool),
    Insert(String),
    DeleteBackward,
    DeleteForward,
    DeleteSelection,
    Undo,
    Redo,
    Find(String),
    Replacement(String),
    Replace,
    ReplaceAll,
    NextMatch,
    PrevMatch,
    Goto(u8),
    WordForward,
    WordBackward,
    SelectAll,
    Copy,
    Cut,
    Paste,
}

impl From<Op> for Command {
    fn from(op: Op) -> Self {
        match op {
            Op::Move { drow, dcol } => Command::MoveCursor {
                drow: drow.into(),
                dcol: dcol.into(),
            },
            Op::Place { x, y } => Command::PlaceCursor {
                x: x.into(),
                y: y.into(),
            },
            Op::Extend(on) => Command::ExtendSelection(on),
            Op::Insert(text) => Command::Insert(text),
            Op::DeleteBackward => Command::DeleteBackward,
            Op::DeleteForward => Command::DeleteForward,
            Op::DeleteSelection => Command::DeleteSelection,
            Op::Undo => Command::Undo,
            Op::Redo => Command::Redo,
            Op::Find(query) => Command::Find(query),
            Op::Replacement(text) => Command::SetReplacement(text),
            Op::Replace => Command::Replace,
            Op::ReplaceAll => Command::ReplaceAll,
            Op::NextMatch => Command::NextMatch,
            Op::PrevMatch => Command::PrevMatch,
            Op::Goto(line) => Command::GotoLine(line.into()),
            Op::WordForward => Command::MoveWord(Direction::Forward),
            Op::WordBackward => Command::MoveWord(Direction::Backward),
            Op::SelectAll => Command::SelectAll,
            Op::Copy => Command::Copy,
            Op::Cut => Command::Cut,
            Op::Paste => Command::Paste,
        }
    }
}

fuzz_target!(|input: (String, Vec<Op>)| {
    let (initial, ops) = input;
    let mut storage = MemoryStorage::new();
    let mut clipboard = MemoryClipboard::new();
    storage.insert("initial.txt", initial);

    // Unbounded history so undoing everything always reaches the start.
    let mut editor = Editor::with_options(EditorOptions {
        max_history_depth: usize::MAX,
        ..EditorOptions::default()
    });
    editor
        .load(Path::new("initial.txt"), &mut storage)
        .expect("fuzzer strings are UTF-8");
    let start = editor.text();

    for op in ops.into_iter().take(64) {
        let _ = editor.execute(op.into(), &mut storage, &mut clipboard);
        let cursor = editor.cursor().position();
        assert_eq!(editor.buffer().clamp(cursor), cursor);
    }

    while editor.undo() {}
    assert_eq!(editor.text(), start);
});
