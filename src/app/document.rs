use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use super::text_ops::extract_filename;

/// Title shown for untitled documents and appended after a file name.
pub const APP_NAME: &str = "Notepad";

/// The file currently being edited. The text itself lives in the
/// editor widget's `TextBuffer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub file_path: Option<PathBuf>,
    dirty: bool,
}

impl Document {
    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn from_file(path: PathBuf) -> Self {
        Self {
            file_path: Some(path),
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// File name of the associated path, `None` while untitled.
    pub fn display_name(&self) -> Option<String> {
        self.file_path.as_deref().map(extract_filename)
    }

    /// Window title: "<basename> - Notepad", or just "Notepad".
    pub fn title(&self) -> String {
        match self.display_name() {
            Some(name) => format!("{} - {}", name, APP_NAME),
            None => APP_NAME.to_string(),
        }
    }
}

/// Read a whole file as text.
pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write `text` to `path` verbatim, replacing any previous content.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::AppError;

    #[test]
    fn test_untitled_title() {
        let doc = Document::untitled();
        assert_eq!(doc.title(), "Notepad");
        assert_eq!(doc.display_name(), None);
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_file_title_uses_basename() {
        let doc = Document::from_file(PathBuf::from("/home/user/shopping.txt"));
        assert_eq!(doc.title(), "shopping.txt - Notepad");
    }

    #[test]
    fn test_dirty_flag() {
        let mut doc = Document::untitled();
        doc.mark_dirty();
        assert!(doc.is_dirty());
        doc.mark_clean();
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let content = "first line\nsecond line\n\tindented\n";
        write_text(&path, content).unwrap();
        assert_eq!(read_text(&path).unwrap(), content);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        write_text(&path, "a much longer first version").unwrap();
        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
