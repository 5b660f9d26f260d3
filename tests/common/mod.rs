#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)] // Each test binary uses a different subset

use std::sync::Once;

use textcore::{Command, Editor, EditorOptions, MemoryClipboard, MemoryStorage, Position, Result};

pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Editor wired to in-memory storage and clipboard.
pub struct Harness {
    pub editor: Editor,
    pub storage: MemoryStorage,
    pub clipboard: MemoryClipboard,
}

impl Harness {
    pub fn new(text: &str) -> Self {
        Self {
            editor: Editor::with_text(text),
            storage: MemoryStorage::new(),
            clipboard: MemoryClipboard::new(),
        }
    }

    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            editor: Editor::with_options(options),
            storage: MemoryStorage::new(),
            clipboard: MemoryClipboard::new(),
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn run(&mut self, commands: impl IntoIterator<Item = Command>) -> Result<()> {
        for command in commands {
            tracing::debug!(?command, "execute");
            self.editor
                .execute(command, &mut self.storage, &mut self.clipboard)?;
        }
        Ok(())
    }

    pub fn lines(&self) -> Vec<String> {
        self.editor.buffer().lines().map(str::to_string).collect()
    }

    pub fn cursor(&self) -> Position {
        self.editor.cursor().position()
    }
}

/// One `Insert` per character, as a user typing.
pub fn type_text(text: &str) -> Vec<Command> {
    text.chars().map(|ch| Command::Insert(ch.to_string())).collect()
}

pub fn undo_n(n: usize) -> Vec<Command> {
    vec![Command::Undo; n]
}
