use serde::{Deserialize, Serialize};

/// An RGB triple, converted to `fltk::enums::Color` by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const BLACK: Rgb = Rgb(0, 0, 0);
const WHITE: Rgb = Rgb(255, 255, 255);
const GRAY20: Rgb = Rgb(51, 51, 51);
const LIGHT_GREY: Rgb = Rgb(211, 211, 211);
const BLUE: Rgb = Rgb(0, 0, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Every color the window uses for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window_bg: Rgb,
    pub text_bg: Rgb,
    pub text_fg: Rgb,
    pub cursor: Rgb,
    pub selection: Rgb,
    pub gutter_bg: Rgb,
    pub gutter_fg: Rgb,
    pub status_bg: Rgb,
    pub status_fg: Rgb,
    pub menu_bg: Rgb,
    pub menu_fg: Rgb,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Lowercase name used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                window_bg: BLACK,
                text_bg: BLACK,
                text_fg: WHITE,
                cursor: WHITE,
                selection: Rgb(70, 70, 100),
                gutter_bg: GRAY20,
                gutter_fg: WHITE,
                status_bg: BLUE,
                status_fg: WHITE,
                menu_bg: BLUE,
                menu_fg: WHITE,
            },
            Self::Light => Palette {
                window_bg: WHITE,
                text_bg: WHITE,
                text_fg: BLACK,
                cursor: BLACK,
                selection: Rgb(173, 216, 230),
                gutter_bg: LIGHT_GREY,
                gutter_fg: BLACK,
                status_bg: BLUE,
                status_fg: WHITE,
                menu_bg: BLUE,
                menu_fg: WHITE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_palette() {
        let start = Theme::Dark;
        let back = start.toggled().toggled();
        assert_eq!(back, start);
        assert_eq!(back.palette(), start.palette());
        assert_ne!(start.toggled().palette(), start.palette());
    }

    #[test]
    fn test_palettes() {
        let dark = Theme::Dark.palette();
        assert_eq!(dark.text_bg, Rgb(0, 0, 0));
        assert_eq!(dark.text_fg, Rgb(255, 255, 255));
        assert_eq!(dark.gutter_bg, Rgb(51, 51, 51));

        let light = Theme::Light.palette();
        assert_eq!(light.text_bg, Rgb(255, 255, 255));
        assert_eq!(light.text_fg, Rgb(0, 0, 0));
        assert_eq!(light.gutter_bg, Rgb(211, 211, 211));

        // Status and menu bars keep their colors across themes
        assert_eq!(dark.status_bg, light.status_bg);
        assert_eq!(dark.menu_bg, light.menu_bg);
    }

    #[test]
    fn test_theme_serialization() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"Light\"");
        let theme: Theme = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
