use std::borrow::Cow;

use super::kinds::{Bold, CodeSpan, Italic, Link};

/// A typed run of inline text within one line.
///
/// Variants carry their content with delimiters stripped; [`Span::raw`]
/// puts the delimiters back, so concatenating `raw()` over a line's spans
/// reproduces the line exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    /// Verbatim code between backticks.
    Code(String),
    Link {
        text: String,
        url: String,
    },
}

/// The styling category of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
}

impl Span {
    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Plain(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
        }
    }

    /// Visible content with delimiters removed.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(t) | Span::Bold(t) | Span::Italic(t) | Span::Code(t) => t,
            Span::Link { text, .. } => text,
        }
    }

    /// Source text including delimiters.
    pub fn raw(&self) -> Cow<'_, str> {
        match self {
            Span::Plain(t) => Cow::Borrowed(t),
            Span::Bold(t) => Cow::Owned(Bold::wrap(t)),
            Span::Italic(t) => Cow::Owned(Italic::wrap(t)),
            Span::Code(t) => Cow::Owned(CodeSpan::wrap(t)),
            Span::Link { text, url } => Cow::Owned(Link::wrap(text, url)),
        }
    }

    /// Navigable target, for links only.
    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// Joins the raw text of `spans`, reconstructing the tokenized line.
pub fn spans_to_source(spans: &[Span]) -> String {
    spans.iter().map(|s| s.raw()).collect()
}
