mod fragment;
mod renderer;

use crate::doc::Doc;
use crate::log;
use crate::style::plain_text;
use serde::{Deserialize, Serialize};

pub use fragment::Fragment;
pub use renderer::Render;

/// How many columns [`Doc::Indent`] adds to the indentation level by default.
pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The preferred maximum line width, in chars.
    pub width: usize,
    /// How many columns [`Doc::Indent`] adds to the indentation level.
    pub tab_width: usize,
}

impl Settings {
    pub fn with_width(width: usize) -> Settings {
        Settings {
            width,
            ..Settings::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: 80,
            tab_width: TAB_WIDTH,
        }
    }
}

/// Display `doc`, using at most `width` columns if possible. Lines that cannot
/// be made to fit are displayed anyways.
pub fn render<A>(doc: &Doc<A>, width: usize) -> Render<'_, A> {
    render_with(doc, &Settings::with_width(width))
}

/// Like [`render`], with every setting given explicitly.
pub fn render_with<'d, A>(doc: &'d Doc<A>, settings: &Settings) -> Render<'d, A> {
    log!(
        Debug,
        "Rendering at width {} (tab width {})",
        settings.width,
        settings.tab_width
    );
    Render::new(doc, settings.width, settings.tab_width)
}

/// Display `doc` as a plain string, ignoring annotations.
pub fn pretty_string<A>(doc: &Doc<A>, width: usize) -> String {
    plain_text(render(doc, width))
}
