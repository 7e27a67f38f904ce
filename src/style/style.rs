//! Styles for text to be displayed in a terminal.

use serde::{Deserialize, Serialize};

/// A style that can be attached to text as a [`Doc`](crate::Doc) annotation.
/// If `reversed`, swap the foreground and background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    pub color: Color,
    pub emph: Emph,
    pub reversed: bool,
}

/// Bold, underlined, or both?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Emph {
    pub bold: bool,
    pub underlined: bool,
}

/// The foreground color of some text (or if reversed the background color).
///
/// This uses the [Base16](http://chriskempson.com/projects/base16/) colortheme definitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Background.
    Base00,
    /// Slightly lighter background.
    Base01,
    /// Highlighted background.
    Base02,
    /// Comments.
    Base03,
    /// Dim foreground.
    Base04,
    /// Ordinary text and punctuation.
    #[default]
    Base05,
    /// Bright foreground.
    Base06,
    /// Brightest foreground.
    Base07,
    /// Variables.
    Base08,
    /// Numbers and other constants.
    Base09,
    /// Types.
    Base0A,
    /// Strings.
    Base0B,
    /// Escapes and regexes.
    Base0C,
    /// Function names.
    Base0D,
    /// Keywords.
    Base0E,
    /// Anything deprecated.
    Base0F,
}

impl Emph {
    pub fn plain() -> Emph {
        Emph::default()
    }

    pub fn bold() -> Emph {
        Emph {
            bold: true,
            ..Emph::default()
        }
    }

    pub fn underlined() -> Emph {
        Emph {
            underlined: true,
            ..Emph::default()
        }
    }
}

impl Style {
    /// The default foreground color, without emphasis.
    pub fn plain() -> Style {
        Style::default()
    }

    /// Text in the given foreground color.
    pub fn color(color: Color) -> Style {
        Style {
            color,
            ..Style::default()
        }
    }

    /// Text on a background of the given color.
    pub fn reverse_color(color: Color) -> Style {
        Style {
            color,
            reversed: true,
            ..Style::default()
        }
    }

    /// The same style, but bold.
    pub fn bold(self) -> Style {
        Style {
            emph: Emph {
                bold: true,
                ..self.emph
            },
            ..self
        }
    }
}
