//! Serializable descriptions of docs, for loading them from RON or JSON files.

use crate::doc::{flatten, group, join, Doc, DocError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("Invalid RON doc description: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Invalid JSON doc description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid doc: {0}")]
    Doc(#[from] DocError),
}

/// A description of a [`Doc`], built into one with [`DocSource::build`].
///
/// Besides the variants of `Doc` itself, this has shorthands for the doc
/// combinators, and `Concat` takes any number of docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum DocSource<A> {
    Empty,
    /// Unannotated text. Cannot contain a newline.
    Text(String),
    /// Annotated text. Cannot contain a newline.
    Styled(String, A),
    Newline,
    /// See [`Doc::line`].
    Line,
    /// See [`Doc::softline`].
    SoftLine,
    Concat(Vec<DocSource<A>>),
    Indent(Box<DocSource<A>>),
    Hang(Box<DocSource<A>>),
    /// Wide, then narrow.
    Choice(Box<DocSource<A>>, Box<DocSource<A>>),
    /// See [`group`].
    Group(Box<DocSource<A>>),
    /// See [`flatten`].
    Flatten(Box<DocSource<A>>),
    /// See [`join`].
    Join {
        elements: Vec<DocSource<A>>,
        separator: Box<DocSource<A>>,
    },
}

impl<A: Clone> DocSource<A> {
    /// Build the doc, checking that no text contains a newline.
    pub fn build(self) -> Result<Doc<A>, DocError> {
        use DocSource::*;

        Ok(match self {
            Empty => Doc::empty(),
            Text(text) => Doc::try_text(text)?,
            Styled(text, annotation) => Doc::try_styled(text, annotation)?,
            Newline => Doc::newline(),
            Line => Doc::line(),
            SoftLine => Doc::softline(),
            Concat(sources) => build_all(sources)?.into_iter().sum(),
            Indent(source) => Doc::indent(source.build()?),
            Hang(source) => Doc::hang(source.build()?),
            Choice(wide, narrow) => Doc::choice(wide.build()?, narrow.build()?),
            Group(source) => group(source.build()?),
            Flatten(source) => flatten(&source.build()?),
            Join {
                elements,
                separator,
            } => join(build_all(elements)?, separator.build()?),
        })
    }
}

fn build_all<A: Clone>(sources: Vec<DocSource<A>>) -> Result<Vec<Doc<A>>, DocError> {
    sources.into_iter().map(DocSource::build).collect()
}

/// Parse and build a doc from its RON description.
pub fn from_ron<A: Clone + DeserializeOwned>(source: &str) -> Result<Doc<A>, SourceError> {
    let source = ron::from_str::<DocSource<A>>(source)?;
    Ok(source.build()?)
}

/// Parse and build a doc from its JSON description.
pub fn from_json<A: Clone + DeserializeOwned>(source: &str) -> Result<Doc<A>, SourceError> {
    let source = serde_json::from_str::<DocSource<A>>(source)?;
    Ok(source.build()?)
}
