//! Storage and clipboard collaborators.
//!
//! The core never touches the filesystem or the OS clipboard directly. The
//! session is handed a [`Storage`] and a [`Clipboard`] and calls them
//! synchronously with complete buffers.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Whole-file byte storage.
pub trait Storage {
    /// Read the complete contents stored at `path`.
    fn read(&mut self, path: &Path) -> Result<Vec<u8>>;
    /// Replace the contents stored at `path`.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()>;
}

/// Plain-text clipboard.
pub trait Clipboard {
    /// Current clipboard text, or `None` when the clipboard holds no text.
    fn get_text(&mut self) -> Result<Option<String>>;
    /// Replace the clipboard text.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Storage backed by the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read(&mut self, path: &Path) -> Result<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes)?;
        Ok(())
    }
}

/// In-memory storage keyed by path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    /// Stored bytes for `path`.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }
}

impl Storage for MemoryStorage {
    fn read(&mut self, path: &Path) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

/// Process-local clipboard.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the clipboard without going through the trait.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<Option<String>> {
        Ok(self.text.clone())
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let mut storage = MemoryStorage::new();
        let path = Path::new("notes.txt");
        assert!(matches!(storage.read(path), Err(Error::NotFound(_))));
        storage.write(path, b"hi\n").unwrap();
        assert_eq!(storage.read(path).unwrap(), b"hi\n");
        assert_eq!(storage.get("notes.txt"), Some(&b"hi\n"[..]));
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get_text().unwrap(), None);
        clipboard.set_text("copied").unwrap();
        assert_eq!(clipboard.get_text().unwrap().as_deref(), Some("copied"));
        assert_eq!(clipboard.text(), Some("copied"));
    }

    #[test]
    fn test_fs_storage_missing_file() {
        let mut storage = FsStorage;
        let err = storage
            .read(Path::new("/definitely/not/here/textcore.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
