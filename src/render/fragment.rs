use std::borrow::Cow;

/// One piece of rendered output: either the text of a [`Doc::Text`] together
/// with its annotation, or a line break followed by indentation.
///
/// [`Doc::Text`]: crate::Doc::Text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'d, A> {
    text: Cow<'d, str>,
    annotation: Option<&'d A>,
}

impl<'d, A> Fragment<'d, A> {
    pub(crate) fn new(text: &'d str, annotation: Option<&'d A>) -> Fragment<'d, A> {
        Fragment {
            text: Cow::Borrowed(text),
            annotation,
        }
    }

    /// A newline followed by `indent` spaces.
    pub(crate) fn newline(indent: usize) -> Fragment<'d, A> {
        let mut text = String::with_capacity(indent + 1);
        text.push('\n');
        text.extend(std::iter::repeat(' ').take(indent));
        Fragment {
            text: Cow::Owned(text),
            annotation: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn annotation(&self) -> Option<&'d A> {
        self.annotation
    }

    /// Whether this fragment is a line break (plus indentation).
    pub fn is_newline(&self) -> bool {
        self.text.starts_with('\n')
    }

    /// Copy out the text and annotation, so they no longer borrow from the doc.
    pub fn into_owned(self) -> (String, Option<A>)
    where
        A: Clone,
    {
        (self.text.into_owned(), self.annotation.cloned())
    }
}
