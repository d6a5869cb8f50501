use fltk::{
    button::{Button, ReturnButton},
    enums::CallbackTrigger,
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use super::run_dialog;

/// Ask for the text to find and its replacement.
///
/// Returns `None` when the dialog is cancelled or closed. The strings are
/// returned as typed; empty values are rejected by the caller.
pub fn show_find_replace_dialog() -> Option<(String, String)> {
    let mut dialog_win = Window::default()
        .with_size(400, 140)
        .with_label("Find/Replace")
        .center_screen();

    Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
    let mut find_input = Input::default().with_pos(110, 20).with_size(270, 30);

    Frame::default().with_pos(20, 60).with_size(80, 30).with_label("Replace:");
    let mut replace_input = Input::default().with_pos(110, 60).with_size(270, 30);

    let mut replace_all_btn = ReturnButton::default()
        .with_pos(180, 100).with_size(110, 30).with_label("Replace All");
    let mut cancel_btn = Button::default()
        .with_pos(300, 100).with_size(80, 30).with_label("Cancel");

    dialog_win.end();
    dialog_win.make_modal(true);
    dialog_win.make_resizable(false);
    dialog_win.show();
    let _ = find_input.take_focus();

    let result: Rc<RefCell<Option<(String, String)>>> = Rc::new(RefCell::new(None));

    let res = result.clone();
    let fi = find_input.clone();
    let ri = replace_input.clone();
    let dialog_ok = dialog_win.clone();
    replace_all_btn.set_callback(move |_| {
        *res.borrow_mut() = Some((fi.value(), ri.value()));
        dialog_ok.clone().hide();
    });

    // Enter in either field confirms
    for input in [&mut find_input, &mut replace_input] {
        let mut btn = replace_all_btn.clone();
        input.set_trigger(CallbackTrigger::EnterKey);
        input.set_callback(move |_| btn.do_callback());
    }

    let dialog_close = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });

    run_dialog(&dialog_win);

    result.borrow_mut().take()
}
