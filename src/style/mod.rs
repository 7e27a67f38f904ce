//! Ways of displaying rendered [`Fragment`](crate::Fragment)s: as plain text,
//! or as styled text using colors, bolding, and underlining.

mod color_theme;
mod plain_text;
mod styled_text;

#[allow(clippy::module_inception)]
mod style;

pub use self::color_theme::{ColorTheme, Rgb};
pub use self::plain_text::plain_text;
pub use self::style::*;
pub use self::styled_text::StyledText;
