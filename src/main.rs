use fltk::{app, prelude::*};

use notepad::app::editor::ClipboardOp;
use notepad::app::state::AppState;
use notepad::app::{AppSettings, Message};
use notepad::ui::main_window::build_main_window;
use notepad::ui::menu::build_menu;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let mut widgets = build_main_window(&sender, &settings);
    build_menu(&mut widgets.menu, &sender);
    widgets.wind.show();

    let mut state = AppState::new(widgets, settings);
    state.init();
    log::info!("Notepad started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileNew => state.file_new(),
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileExit | Message::WindowClose => {
                    if state.file_exit() {
                        app.quit();
                    }
                }
                Message::EditCut => state.clipboard(ClipboardOp::Cut),
                Message::EditCopy => state.clipboard(ClipboardOp::Copy),
                Message::EditPaste => state.clipboard(ClipboardOp::Paste),
                Message::EditUndo => state.undo(),
                Message::EditRedo => state.redo(),
                Message::FindReplace => state.find_replace(),
                Message::ToggleTheme => state.toggle_theme(),
                Message::BufferModified => state.buffer_modified(),
            }
        }
    }
}
