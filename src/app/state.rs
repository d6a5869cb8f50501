use std::path::{Path, PathBuf};

use fltk::{
    dialog,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use super::editor::{ClipboardOp, Editor, SaveOutcome};
use super::settings::AppSettings;
use super::text_ops::{count_lines, linenumber_width};
use crate::ui::dialogs::find_replace::show_find_replace_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use crate::ui::theme::set_windows_titlebar_theme;

/// Undo the last buffer edit. Returns `false` when the history is empty.
fn apply_undo(buffer: &mut TextBuffer) -> bool {
    match buffer.undo() {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Nothing to undo: {:?}", e);
            false
        }
    }
}

/// Redo the last undone edit, returning the new cursor position.
fn apply_redo(buffer: &mut TextBuffer) -> Option<i32> {
    match buffer.redo() {
        Ok(pos) => Some(pos),
        Err(e) => {
            log::debug!("Nothing to redo: {:?}", e);
            None
        }
    }
}

/// The editor window: FLTK widgets plus the toolkit-free `Editor`.
pub struct AppState {
    pub editor: Editor,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub window: Window,
    pub menu: MenuBar,
    pub status_bar: Frame,
    pub settings: AppSettings,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<PathBuf>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings) -> Self {
        let MainWidgets {
            wind,
            menu,
            text_editor,
            buffer,
            status_bar,
            ..
        } = widgets;

        Self {
            editor: Editor::new(settings.theme),
            text_editor,
            buffer,
            window: wind,
            menu,
            status_bar,
            settings,
            last_open_directory: None,
        }
    }

    /// Apply theme, title, gutter and status once the window is shown.
    pub fn init(&mut self) {
        self.apply_current_theme();
        self.update_window_title();
        self.refresh_line_numbers();
    }

    fn buffer_text(&self) -> String {
        self.buffer.text()
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_path_buf());
        }
    }

    pub fn update_window_title(&mut self) {
        self.window.set_label(&self.editor.title());
    }

    /// Push the editor's status message into the status bar.
    fn show_status(&mut self) {
        // '@' starts a symbol in FLTK labels
        let label = self.editor.status().replace('@', "@@");
        self.status_bar.set_label(&label);
        self.status_bar.redraw();
    }

    /// Resize the gutter so numbers 1..N fit.
    pub fn refresh_line_numbers(&mut self) {
        if !self.settings.line_numbers_enabled {
            self.text_editor.set_linenumber_width(0);
            return;
        }
        let lines = count_lines(&self.buffer_text());
        self.text_editor.set_linenumber_width(linenumber_width(lines));
        self.text_editor.redraw();
    }

    pub fn buffer_modified(&mut self) {
        self.editor.buffer_modified();
        // Pastes from other apps land after the Paste command has returned
        let text = self.buffer_text();
        self.editor.refresh_status(&text);
        self.show_status();
        self.refresh_line_numbers();
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.buffer.set_text("");
        self.editor.new_file();
        self.update_window_title();
        self.show_status();
        self.refresh_line_numbers();
    }

    pub fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(&path);
        }
    }

    pub fn open_file(&mut self, path: &Path) {
        self.remember_directory(path);
        match self.editor.open(path) {
            Ok(content) => {
                self.buffer.set_text(&content);
                self.text_editor.set_insert_position(0);
                self.update_window_title();
                self.show_status();
                self.refresh_line_numbers();
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                dialog::alert_default(&format!("Error opening file: {}", e));
            }
        }
    }

    pub fn file_save(&mut self) {
        let text = self.buffer_text();
        match self.editor.save(&text) {
            Ok(SaveOutcome::Saved(_)) => {
                self.update_window_title();
                self.show_status();
            }
            Ok(SaveOutcome::NeedsPath) => self.file_save_as(),
            Err(e) => {
                log::error!("Failed to save: {}", e);
                dialog::alert_default(&format!("Error saving file: {}", e));
            }
        }
    }

    pub fn file_save_as(&mut self) {
        let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) else {
            return;
        };
        self.remember_directory(&path);
        let text = self.buffer_text();
        match self.editor.save_as(&path, &text) {
            Ok(_) => {
                self.update_window_title();
                self.show_status();
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", path.display(), e);
                dialog::alert_default(&format!("Error saving file: {}", e));
            }
        }
    }

    /// Handle an exit request. Returns `true` if the app should exit.
    pub fn file_exit(&mut self) -> bool {
        if !self.editor.document().is_dirty() {
            return true;
        }
        let choice = dialog::choice2_default(
            "You have unsaved changes.",
            "Save",
            "Quit Without Saving",
            "Cancel",
        );
        match choice {
            Some(0) => {
                self.file_save();
                !self.editor.document().is_dirty()
            }
            Some(1) => true,
            _ => false,
        }
    }

    // --- Edit operations ---

    pub fn clipboard(&mut self, op: ClipboardOp) {
        match op {
            ClipboardOp::Cut => self.text_editor.cut(),
            ClipboardOp::Copy => self.text_editor.copy(),
            ClipboardOp::Paste => self.text_editor.paste(),
        }
        let text = self.buffer_text();
        self.editor.clipboard(op, &text);
        self.show_status();
        if op == ClipboardOp::Paste {
            self.refresh_line_numbers();
        }
    }

    pub fn undo(&mut self) {
        if apply_undo(&mut self.buffer) {
            self.buffer_modified();
        }
    }

    pub fn redo(&mut self) {
        if let Some(pos) = apply_redo(&mut self.buffer) {
            self.text_editor.set_insert_position(pos);
            self.text_editor.show_insert_position();
            self.buffer_modified();
        }
    }

    pub fn find_replace(&mut self) {
        let Some((find, replace)) = show_find_replace_dialog() else {
            return;
        };
        let text = self.buffer_text();
        if let Some((new_text, count)) = self.editor.find_replace(&text, &find, &replace) {
            if count > 0 {
                self.buffer.set_text(&new_text);
                self.refresh_line_numbers();
            }
            self.show_status();
        }
    }

    // --- View ---

    pub fn toggle_theme(&mut self) {
        let text = self.buffer_text();
        let theme = self.editor.toggle_theme(&text);
        self.apply_current_theme();
        self.show_status();

        self.settings.theme = theme;
        if let Err(e) = self.settings.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    fn apply_current_theme(&mut self) {
        let theme = self.editor.theme();
        apply_theme(
            &mut self.text_editor,
            &mut self.window,
            &mut self.menu,
            &mut self.status_bar,
            &theme.palette(),
        );
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.window, theme.is_dark());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut buf = TextBuffer::default();
        assert!(!apply_undo(&mut buf));
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_redo_on_empty_history_is_noop() {
        let mut buf = TextBuffer::default();
        buf.append("kept");
        assert_eq!(apply_redo(&mut buf), None);
        assert_eq!(buf.text(), "kept");
    }

    #[test]
    fn test_undo_reverts_last_edit() {
        let mut buf = TextBuffer::default();
        buf.append("x");
        assert!(apply_undo(&mut buf));
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_redo_restores_undone_edit() {
        let mut buf = TextBuffer::default();
        buf.append("hello");
        assert!(apply_undo(&mut buf));
        assert!(apply_redo(&mut buf).is_some());
        assert_eq!(buf.text(), "hello");
    }
}
