//! Command handlers for the editor window, independent of FLTK.
//!
//! Each method takes the current buffer text where it needs it and returns
//! whatever the window has to apply (new buffer text, a path, a theme).
//! `AppState` owns the widgets and calls into this.

use std::path::{Path, PathBuf};

use super::document::{Document, read_text, write_text};
use super::error::Result;
use super::text_ops::{DEFAULT_EXTENSION, replace_all_literal, status_line, with_default_extension};
use super::theme::Theme;

/// Result of a plain "Save".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    /// Untitled document: the caller must ask for a path and use `save_as`.
    NeedsPath,
}

/// Clipboard operations handled by the text widget itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardOp {
    Cut,
    Copy,
    Paste,
}

impl ClipboardOp {
    fn description(self) -> &'static str {
        match self {
            Self::Cut => "Text cut",
            Self::Copy => "Text copied",
            Self::Paste => "Text pasted",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    theme: Theme,
    status: String,
    /// Action shown before the word count in `status`.
    status_action: String,
}

impl Editor {
    pub fn new(theme: Theme) -> Self {
        Self {
            document: Document::untitled(),
            theme,
            status: String::new(),
            status_action: String::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    /// Recompute the status message for `action` against the current text.
    pub fn set_status(&mut self, action: &str, text: &str) -> &str {
        self.status = status_line(action, text);
        self.status_action = action.to_string();
        &self.status
    }

    /// Recount words for the last action. No-op before any action ran.
    pub fn refresh_status(&mut self, text: &str) {
        if !self.status_action.is_empty() {
            self.status = status_line(&self.status_action, text);
        }
    }

    pub fn buffer_modified(&mut self) {
        self.document.mark_dirty();
    }

    /// Forget the current file. The caller clears the buffer.
    pub fn new_file(&mut self) {
        self.document = Document::untitled();
        self.set_status("New file created", "");
        log::info!("New document");
    }

    /// Read `path` and make it the current document.
    ///
    /// Returns the file content for the buffer. On error nothing changes.
    pub fn open(&mut self, path: &Path) -> Result<String> {
        let content = read_text(path)?;
        self.document = Document::from_file(path.to_path_buf());
        self.set_status(&format!("File opened: {}", path.display()), &content);
        log::info!("Opened {} ({} bytes)", path.display(), content.len());
        Ok(content)
    }

    /// Overwrite the associated file, if there is one.
    pub fn save(&mut self, text: &str) -> Result<SaveOutcome> {
        match self.document.file_path.clone() {
            Some(path) => {
                self.write_to(&path, text)?;
                Ok(SaveOutcome::Saved(path))
            }
            None => Ok(SaveOutcome::NeedsPath),
        }
    }

    /// Write to a newly chosen path and associate the document with it.
    ///
    /// Paths without an extension get `.txt`. Returns the path actually written.
    pub fn save_as(&mut self, path: &Path, text: &str) -> Result<PathBuf> {
        let path = with_default_extension(path, DEFAULT_EXTENSION);
        self.write_to(&path, text)?;
        self.document.file_path = Some(path.clone());
        Ok(path)
    }

    fn write_to(&mut self, path: &Path, text: &str) -> Result<()> {
        write_text(path, text)?;
        self.document.mark_clean();
        self.set_status(&format!("File saved: {}", path.display()), text);
        log::info!("Saved {} ({} bytes)", path.display(), text.len());
        Ok(())
    }

    pub fn clipboard(&mut self, op: ClipboardOp, text: &str) {
        self.set_status(op.description(), text);
    }

    /// Replace every occurrence of `find` with `replace` in `text`.
    ///
    /// Both strings must be non-empty, otherwise nothing happens and `None`
    /// is returned. Otherwise returns the new text and the replacement count.
    pub fn find_replace(&mut self, text: &str, find: &str, replace: &str) -> Option<(String, usize)> {
        if find.is_empty() || replace.is_empty() {
            return None;
        }
        let (new_text, count) = replace_all_literal(text, find, replace);
        if count > 0 {
            self.document.mark_dirty();
        }
        self.set_status(&format!("Replaced '{}' with '{}'", find, replace), &new_text);
        log::debug!("Replaced {} occurrence(s) of {:?}", count, find);
        Some((new_text, count))
    }

    pub fn toggle_theme(&mut self, text: &str) -> Theme {
        self.theme = self.theme.toggled();
        self.set_status(&format!("Switched to {} mode", self.theme.label()), text);
        self.theme
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
