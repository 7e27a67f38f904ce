//! A pretty printer in the style of Wadler's
//! [prettier printer](http://homepages.inf.ed.ac.uk/wadler/papers/prettier/prettier.pdf),
//! that resolves each layout choice greedily by checking whether the rest of
//! the line fits.
//!
//! To pretty print, you:
//!
//! 1. Build a [`Doc`], using its constructors, [`join`], and [`group`].
//! 2. [`render`] it at some width, to get an iterator over [`Fragment`]s.
//! 3. Display the fragments, using [`plain_text`] or [`StyledText`].
//!
//! ```
//! use docprint::{group, join, pretty_string, Doc};
//!
//! let args = ["alpha", "beta", "gamma"].into_iter().map(Doc::<()>::text);
//! let doc = group(
//!     Doc::text("f(") + Doc::hang(join(args, Doc::text(",") + Doc::newline())) + Doc::text(")"),
//! );
//! assert_eq!(pretty_string(&doc, 80), "f(alpha, beta, gamma)");
//! assert_eq!(pretty_string(&doc, 10), "f(alpha,\n  beta,\n  gamma)");
//! ```

mod doc;
mod infra;
mod render;
mod source;
mod style;
mod util;

pub use doc::{flatten, group, join, Doc, DocError};
pub use render::{pretty_string, render, render_with, Fragment, Render, Settings, TAB_WIDTH};
pub use source::{from_json, from_ron, DocSource, SourceError};
pub use style::{plain_text, Color, ColorTheme, Emph, Rgb, Style, StyledText};
pub use util::{Log, LogEntry, LogLevel};
