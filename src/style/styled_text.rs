use super::color_theme::ColorTheme;
use super::style::Style;
use crate::render::Fragment;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetStyle};
use crossterm::QueueableCommand;
use std::fmt;
use std::io::{self, Write};

/// Rendered text, broken into spans that each have a single style `S`.
///
/// Build it from fragments with [`StyledText::from_fragments`], giving a
/// function that picks the style for each fragment's annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<S> {
    /// INVARIANT: no span is empty, and adjacent spans have different styles.
    spans: Vec<(String, S)>,
}

impl<S> StyledText<S> {
    pub fn new() -> StyledText<S> {
        StyledText { spans: Vec::new() }
    }

    pub fn spans(&self) -> &[(String, S)] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl<S: PartialEq> StyledText<S> {
    /// Append `text` in the given style, merging it into the last span if
    /// that has the same style.
    pub fn push(&mut self, text: &str, style: S) {
        if text.is_empty() {
            return;
        }
        if let Some((last_text, last_style)) = self.spans.last_mut() {
            if *last_style == style {
                last_text.push_str(text);
                return;
            }
        }
        self.spans.push((text.to_owned(), style));
    }

    /// Style each fragment with `style_of(annotation)`. Newline fragments
    /// have no annotation.
    pub fn from_fragments<'d, A: 'd>(
        fragments: impl IntoIterator<Item = Fragment<'d, A>>,
        mut style_of: impl FnMut(Option<&'d A>) -> S,
    ) -> StyledText<S> {
        let mut styled = StyledText::new();
        for fragment in fragments {
            styled.push(fragment.text(), style_of(fragment.annotation()));
        }
        styled
    }
}

impl StyledText<Style> {
    /// Write the text to a terminal (or anything else that understands ANSI
    /// escape codes), with colors taken from `theme`.
    pub fn write_to<W: Write>(&self, out: &mut W, theme: &ColorTheme) -> Result<(), io::Error> {
        for (text, style) in &self.spans {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetStyle(theme.content_style(*style)))?;
            out.queue(Print(text))?;
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
        out.flush()
    }
}

impl<S> Default for StyledText<S> {
    fn default() -> StyledText<S> {
        StyledText::new()
    }
}

/// Displays just the text, without styles.
impl<S> fmt::Display for StyledText<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (text, _) in &self.spans {
            write!(f, "{}", text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::{render, Doc};

    fn example_doc() -> Doc<Style> {
        let keyword = Style::color(Color::Base0E);
        Doc::styled("fn", keyword)
            + Doc::text(" ")
            + Doc::styled("foo", Style::color(Color::Base0D))
            + Doc::text("()")
            + Doc::text(" {")
            + Doc::indent(Doc::newline() + Doc::styled("return", keyword))
            + Doc::newline()
            + Doc::text("}")
    }

    #[test]
    fn test_merges_adjacent_styles() {
        let doc = example_doc();
        let styled = StyledText::from_fragments(render(&doc, 80), |ann| ann.copied());
        let keyword = Some(Style::color(Color::Base0E));
        assert_eq!(
            styled.spans(),
            &[
                ("fn".to_owned(), keyword),
                (" ".to_owned(), None),
                ("foo".to_owned(), Some(Style::color(Color::Base0D))),
                ("() {\n    ".to_owned(), None),
                ("return".to_owned(), keyword),
                ("\n}".to_owned(), None),
            ]
        );
        assert_eq!(styled.to_string(), "fn foo() {\n    return\n}");
    }

    #[test]
    fn test_skips_empty_text() {
        let mut styled = StyledText::new();
        styled.push("", 1);
        assert!(styled.is_empty());
        styled.push("a", 1);
        styled.push("", 2);
        styled.push("b", 1);
        assert_eq!(styled.spans(), &[("ab".to_owned(), 1)]);
    }

    #[test]
    fn test_write_to() {
        let doc = example_doc();
        let styled =
            StyledText::from_fragments(render(&doc, 80), |ann| ann.copied().unwrap_or_default());
        let mut out: Vec<u8> = Vec::new();
        styled
            .write_to(&mut out, &ColorTheme::default_dark())
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("fn"));
        assert!(out.contains("return"));
        assert!(out.ends_with("\x1b[0m"));
    }
}
