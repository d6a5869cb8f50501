use std::path::{Path, PathBuf};

use fltk::dialog;

/// Filter offered by the open and save dialogs.
pub const TEXT_FILES_FILTER: &str = "Text Documents (*.txt)\tAll Files (*)";

fn start_dir(dir: Option<&Path>) -> String {
    dir.map(|d| d.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

fn choose(title: &str, dir: Option<&Path>) -> Option<PathBuf> {
    dialog::file_chooser(title, TEXT_FILES_FILTER, &start_dir(dir), false)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

pub fn native_open_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    choose("Open a file", dir)
}

pub fn native_save_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    choose("Save As", dir)
}
