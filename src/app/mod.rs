//! Application layer.
//!
//! # Structure
//!
//! - `document`, `theme`, `settings` - the data the window works with
//! - `text_ops` - pure text helpers (word count, line numbers, replace)
//! - `editor` - toolkit-free command handlers, one per menu command
//! - `state` - FLTK widgets plus the editor, driven by `Message`s

pub mod document;
pub mod editor;
pub mod error;
pub mod messages;
pub mod settings;
pub mod state;
pub mod text_ops;
pub mod theme;

// Re-exports for convenient external access
pub use document::Document;
pub use editor::{Editor, SaveOutcome};
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::AppSettings;
pub use theme::{Palette, Rgb, Theme};
