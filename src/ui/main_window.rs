use fltk::{
    app::{self, Sender},
    enums::{Align, CallbackTrigger, Event, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::document::APP_NAME;
use crate::app::messages::Message;
use crate::app::settings::AppSettings;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_BAR_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: Frame,
}

pub fn build_main_window(sender: &Sender<Message>, settings: &AppSettings) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, APP_NAME);
    wind.set_xclass("Notepad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_font(Font::Helvetica);
    text_editor.set_text_size(settings.font_size_px());
    text_editor.set_linenumber_font(Font::Helvetica);
    text_editor.set_linenumber_size(settings.font_size_px());
    text_editor.set_linenumber_align(Align::Right);
    if settings.word_wrap_enabled {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    // Fires on user edits only; programmatic set_text() stays silent
    text_editor.set_trigger(CallbackTrigger::Changed);
    text_editor.set_callback({
        let s = *sender;
        move |_| s.send(Message::BufferModified)
    });

    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::DownBox);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.set_label_size(12);
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Escape also triggers the window callback; only react to the close button
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        buffer,
        status_bar,
    }
}
