mod combinators;

use std::iter::Sum;
use std::mem;
use std::ops::{Add, BitOr};
use std::sync::Arc;

pub use combinators::{flatten, group, join};

use self::Doc::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("Text may not contain a newline: {0:?}")]
    NewlineInText(String),
}

/// Describes how to lay out a piece of text. Immutable once built.
///
/// Children are held through [`Arc`], so cloning a `Doc` (or sharing a
/// sub-document between several parents) never copies the tree, and a `Doc`
/// can be rendered from several threads at once.
///
/// `A` is an annotation attached to each piece of text, such as a
/// [`Style`](crate::Style). The renderer passes it through untouched.
///
/// Comparing and dropping docs walk the tree with an explicit stack, so docs
/// of any depth are fine.
#[derive(Debug, Clone)]
pub enum Doc<A> {
    /// Display nothing.
    Empty,
    /// Display a string. Cannot contain a newline. Build with [`Doc::text`]
    /// or [`Doc::try_text`] to have this checked.
    Text(String, Option<A>),
    /// Display the first doc, then the second. You can also use
    /// [`+`](enum.Doc.html#impl-Add-for-Doc<A>) for this.
    Concat(Arc<Doc<A>>, Arc<Doc<A>>),
    /// Start a new line, at the current indentation level.
    Newline,
    /// Display the doc with the indentation level increased by the tab width.
    Indent(Arc<Doc<A>>),
    /// Display the doc with the indentation level set to the column at which
    /// it starts.
    Hang(Arc<Doc<A>>),
    /// Display the first (wide) doc if the rest of the line it starts fits
    /// within the width, otherwise the second (narrow) one. You can also use
    /// [`|`](enum.Doc.html#impl-BitOr-for-Doc<A>) for this.
    Choice(Arc<Doc<A>>, Arc<Doc<A>>),
}

impl<A> Doc<A> {
    /// Construct [`Empty`](Doc::Empty).
    pub fn empty() -> Doc<A> {
        Empty
    }

    /// Construct an unannotated [`Text`](Doc::Text).
    ///
    /// # Panics
    ///
    /// Panics if `text` contains a newline. Use [`Doc::try_text`] to get an
    /// error instead.
    pub fn text(text: impl Into<String>) -> Doc<A> {
        match Doc::try_text(text) {
            Ok(doc) => doc,
            Err(err) => panic!("{}", err),
        }
    }

    /// Construct an unannotated [`Text`](Doc::Text), or fail if `text`
    /// contains a newline.
    pub fn try_text(text: impl Into<String>) -> Result<Doc<A>, DocError> {
        let text = text.into();
        check_text(&text)?;
        Ok(Text(text, None))
    }

    /// Construct an annotated [`Text`](Doc::Text).
    ///
    /// # Panics
    ///
    /// Panics if `text` contains a newline.
    pub fn styled(text: impl Into<String>, annotation: A) -> Doc<A> {
        match Doc::try_styled(text, annotation) {
            Ok(doc) => doc,
            Err(err) => panic!("{}", err),
        }
    }

    /// Construct an annotated [`Text`](Doc::Text), or fail if `text`
    /// contains a newline.
    pub fn try_styled(text: impl Into<String>, annotation: A) -> Result<Doc<A>, DocError> {
        let text = text.into();
        check_text(&text)?;
        Ok(Text(text, Some(annotation)))
    }

    /// Construct a [`Newline`](Doc::Newline).
    pub fn newline() -> Doc<A> {
        Newline
    }

    /// Construct a [`Concat`](Doc::Concat).
    pub fn concat(left: Doc<A>, right: Doc<A>) -> Doc<A> {
        Concat(Arc::new(left), Arc::new(right))
    }

    /// Construct an [`Indent`](Doc::Indent).
    pub fn indent(doc: Doc<A>) -> Doc<A> {
        Indent(Arc::new(doc))
    }

    /// Construct a [`Hang`](Doc::Hang).
    pub fn hang(doc: Doc<A>) -> Doc<A> {
        Hang(Arc::new(doc))
    }

    /// Construct a [`Choice`](Doc::Choice).
    pub fn choice(wide: Doc<A>, narrow: Doc<A>) -> Doc<A> {
        Choice(Arc::new(wide), Arc::new(narrow))
    }

    /// A space if the line fits, otherwise a newline.
    pub fn line() -> Doc<A> {
        Doc::choice(Text(" ".to_owned(), None), Newline)
    }

    /// Nothing if the line fits, otherwise a newline.
    pub fn softline() -> Doc<A> {
        Doc::choice(Empty, Newline)
    }

    /// Whether this doc is built only out of `Empty`s, so that it can never
    /// display anything.
    pub fn is_empty(&self) -> bool {
        let mut stack = vec![self];
        while let Some(doc) = stack.pop() {
            match doc {
                Empty => (),
                Text(_, _) | Newline => return false,
                Concat(left, right) | Choice(left, right) => {
                    stack.push(&**right);
                    stack.push(&**left);
                }
                Indent(doc) | Hang(doc) => stack.push(&**doc),
            }
        }
        true
    }

    /// Check that no `Text` in this doc contains a newline. Only needed for
    /// docs whose `Text` variants were built directly.
    pub fn validate(&self) -> Result<(), DocError> {
        let mut stack = vec![self];
        while let Some(doc) = stack.pop() {
            match doc {
                Empty | Newline => (),
                Text(text, _) => check_text(text)?,
                Concat(left, right) | Choice(left, right) => {
                    stack.push(&**right);
                    stack.push(&**left);
                }
                Indent(doc) | Hang(doc) => stack.push(&**doc),
            }
        }
        Ok(())
    }
}

impl<A: Clone> Doc<A> {
    /// Shorthand for [`flatten`].
    pub fn flatten(&self) -> Doc<A> {
        flatten(self)
    }

    /// Shorthand for [`group`].
    pub fn group(self) -> Doc<A> {
        group(self)
    }
}

fn check_text(text: &str) -> Result<(), DocError> {
    if text.contains('\n') {
        Err(DocError::NewlineInText(text.to_owned()))
    } else {
        Ok(())
    }
}

/// Children shared through the same `Arc` count as equal without being
/// compared.
impl<A: PartialEq> PartialEq for Doc<A> {
    fn eq(&self, other: &Doc<A>) -> bool {
        let mut stack = vec![(self, other)];
        while let Some(pair) = stack.pop() {
            match pair {
                (Empty, Empty) | (Newline, Newline) => (),
                (Text(text1, ann1), Text(text2, ann2)) => {
                    if text1 != text2 || ann1 != ann2 {
                        return false;
                    }
                }
                (Concat(left1, right1), Concat(left2, right2))
                | (Choice(left1, right1), Choice(left2, right2)) => {
                    if !Arc::ptr_eq(right1, right2) {
                        stack.push((&**right1, &**right2));
                    }
                    if !Arc::ptr_eq(left1, left2) {
                        stack.push((&**left1, &**left2));
                    }
                }
                (Indent(inner1), Indent(inner2)) | (Hang(inner1), Hang(inner2)) => {
                    if !Arc::ptr_eq(inner1, inner2) {
                        stack.push((&**inner1, &**inner2));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl<A: Eq> Eq for Doc<A> {}

impl<A> Drop for Doc<A> {
    fn drop(&mut self) {
        if !self.owns_a_child() {
            return;
        }
        // Children are swapped out for this placeholder and released here,
        // one at a time, instead of by recursive drops.
        let placeholder = Arc::new(Empty);
        let mut children = Vec::new();
        self.detach_children(&placeholder, &mut children);
        while let Some(child) = children.pop() {
            if let Ok(mut doc) = Arc::try_unwrap(child) {
                doc.detach_children(&placeholder, &mut children);
            }
        }
    }
}

impl<A> Doc<A> {
    /// Whether dropping this doc would also drop one of its children.
    fn owns_a_child(&self) -> bool {
        match self {
            Empty | Text(_, _) | Newline => false,
            Concat(left, right) | Choice(left, right) => {
                Arc::strong_count(left) == 1 || Arc::strong_count(right) == 1
            }
            Indent(inner) | Hang(inner) => Arc::strong_count(inner) == 1,
        }
    }

    fn detach_children(&mut self, placeholder: &Arc<Doc<A>>, children: &mut Vec<Arc<Doc<A>>>) {
        match self {
            Empty | Text(_, _) | Newline => (),
            Concat(left, right) | Choice(left, right) => {
                children.push(mem::replace(left, placeholder.clone()));
                children.push(mem::replace(right, placeholder.clone()));
            }
            Indent(inner) | Hang(inner) => children.push(mem::replace(inner, placeholder.clone())),
        }
    }
}

impl<A> Default for Doc<A> {
    fn default() -> Doc<A> {
        Empty
    }
}

impl<A> Add<Doc<A>> for Doc<A> {
    type Output = Doc<A>;
    /// Shorthand for [`Concat`](Doc::Concat).
    fn add(self, other: Doc<A>) -> Doc<A> {
        Doc::concat(self, other)
    }
}

impl<A> BitOr<Doc<A>> for Doc<A> {
    type Output = Doc<A>;
    /// Shorthand for [`Choice`](Doc::Choice).
    fn bitor(self, other: Doc<A>) -> Doc<A> {
        Doc::choice(self, other)
    }
}

/// Panics if the string contains a newline.
impl<A> From<&str> for Doc<A> {
    fn from(text: &str) -> Doc<A> {
        Doc::text(text)
    }
}

/// Panics if the string contains a newline.
impl<A> From<String> for Doc<A> {
    fn from(text: String) -> Doc<A> {
        Doc::text(text)
    }
}

/// Concatenate the docs in order. Empty if there are none.
impl<A> Sum for Doc<A> {
    fn sum<I: Iterator<Item = Doc<A>>>(mut docs: I) -> Doc<A> {
        match docs.next() {
            None => Empty,
            Some(first) => docs.fold(first, |acc, doc| acc + doc),
        }
    }
}

impl<A> FromIterator<Doc<A>> for Doc<A> {
    fn from_iter<I: IntoIterator<Item = Doc<A>>>(docs: I) -> Doc<A> {
        docs.into_iter().sum()
    }
}
