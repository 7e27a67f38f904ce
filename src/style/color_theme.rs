use super::style::{Color, Style};
use crate::infra::DocprintBug;
use crossterm::style::{self as ct, Attribute, ContentStyle};

/// A color theme, mapping each [`Color`] to an actual 24-bit color. Field
/// `base0X` holds the color for `Color::Base0X`.
#[allow(non_snake_case)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    pub base00: Rgb,
    pub base01: Rgb,
    pub base02: Rgb,
    pub base03: Rgb,
    pub base04: Rgb,
    pub base05: Rgb,
    pub base06: Rgb,
    pub base07: Rgb,
    pub base08: Rgb,
    pub base09: Rgb,
    pub base0A: Rgb,
    pub base0B: Rgb,
    pub base0C: Rgb,
    pub base0D: Rgb,
    pub base0E: Rgb,
    pub base0F: Rgb,
}

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTheme {
    /// The "default dark" Base16 colorscheme, by Chris Kempson (http://chriskempson.com)
    pub fn default_dark() -> ColorTheme {
        let hex = |color: &str| Rgb::from_hex(color).bug_msg("invalid theme color");
        ColorTheme {
            base00: hex("#181818"),
            base01: hex("#282828"),
            base02: hex("#383838"),
            base03: hex("#585858"),
            base04: hex("#b8b8b8"),
            base05: hex("#d8d8d8"),
            base06: hex("#e8e8e8"),
            base07: hex("#f8f8f8"),
            base08: hex("#ab4642"),
            base09: hex("#dc9656"),
            base0A: hex("#f7ca88"),
            base0B: hex("#a1b56c"),
            base0C: hex("#86c1b9"),
            base0D: hex("#7cafc2"),
            base0E: hex("#ba8baf"),
            base0F: hex("#a16946"),
        }
    }

    pub fn color(&self, color: Color) -> Rgb {
        use Color::*;

        match color {
            Base00 => self.base00,
            Base01 => self.base01,
            Base02 => self.base02,
            Base03 => self.base03,
            Base04 => self.base04,
            Base05 => self.base05,
            Base06 => self.base06,
            Base07 => self.base07,
            Base08 => self.base08,
            Base09 => self.base09,
            Base0A => self.base0A,
            Base0B => self.base0B,
            Base0C => self.base0C,
            Base0D => self.base0D,
            Base0E => self.base0E,
            Base0F => self.base0F,
        }
    }

    /// The foreground color for a given style, in this color theme.
    pub fn foreground(&self, style: Style) -> Rgb {
        if style.reversed {
            self.base00
        } else {
            self.color(style.color)
        }
    }

    /// The background color for a given style, in this color theme. `None`
    /// means the terminal's own background.
    pub fn background(&self, style: Style) -> Option<Rgb> {
        if style.reversed {
            Some(self.color(style.color))
        } else {
            None
        }
    }

    /// The crossterm style to display text in the given style with.
    pub fn content_style(&self, style: Style) -> ContentStyle {
        let mut content = ContentStyle::new();
        content.foreground_color = Some(self.foreground(style).into());
        content.background_color = self.background(style).map(ct::Color::from);
        if style.emph.bold {
            content.attributes.set(Attribute::Bold);
        }
        if style.emph.underlined {
            content.attributes.set(Attribute::Underlined);
        }
        content
    }
}

impl Default for ColorTheme {
    fn default() -> ColorTheme {
        ColorTheme::default_dark()
    }
}

impl Rgb {
    /// Construct an Rgb color from a string of the form "#FFFFFF".
    pub fn from_hex(hex_color: &str) -> Option<Rgb> {
        if hex_color.len() != 7 || !hex_color.starts_with('#') {
            return None;
        }
        let to_int = |inclusive_range: (usize, usize)| -> Option<u8> {
            u8::from_str_radix(hex_color.get(inclusive_range.0..=inclusive_range.1)?, 16).ok()
        };

        Some(Rgb {
            red: to_int((1, 2))?,
            green: to_int((3, 4))?,
            blue: to_int((5, 6))?,
        })
    }
}

/// Converts docprint's `Rgb` to crossterm's `Color`
impl From<Rgb> for ct::Color {
    fn from(rgb: Rgb) -> ct::Color {
        ct::Color::Rgb {
            r: rgb.red,
            g: rgb.green,
            b: rgb.blue,
        }
    }
}
