use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::theme::{Palette, Rgb};

fn color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn apply_theme(
    editor: &mut TextEditor,
    window: &mut Window,
    menu: &mut MenuBar,
    status_bar: &mut Frame,
    palette: &Palette,
) {
    editor.set_color(color(palette.text_bg));
    editor.set_text_color(color(palette.text_fg));
    editor.set_cursor_color(color(palette.cursor));
    editor.set_selection_color(color(palette.selection));
    editor.set_linenumber_bgcolor(color(palette.gutter_bg));
    editor.set_linenumber_fgcolor(color(palette.gutter_fg));

    window.set_color(color(palette.window_bg));

    menu.set_color(color(palette.menu_bg));
    menu.set_text_color(color(palette.menu_fg));
    menu.set_selection_color(color(palette.selection));

    status_bar.set_color(color(palette.status_bg));
    status_bar.set_label_color(color(palette.status_fg));

    editor.redraw();
    window.redraw();
    menu.redraw();
    status_bar.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    let on: i32 = if is_dark { 1 } else { 0 };

    // 20 is DWMWA_USE_IMMERSIVE_DARK_MODE; builds before 2004 use 19
    for attribute in [20, 19] {
        // SAFETY: the HWND comes from a shown FLTK window and `on` outlives the call.
        unsafe {
            let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}
