use std::num::NonZeroU32;

use crate::parsing::inline::{Span, types::spans_to_source};

use super::kinds::Heading;

/// Heading depth; only levels 1 to 3 are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 3;

    pub fn new(level: u8) -> Option<Self> {
        (1..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// The marker that opened a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Dash,
    Asterisk,
    /// Ordered item; keeps the digits as written.
    Numbered(String),
}

/// One line of a list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Leading indent in units (a tab or a full group of four spaces).
    pub indent_level: usize,
    pub marker: ListMarker,
    /// Everything before the item text: leading whitespace, marker and separator.
    pub prefix: String,
    pub spans: Vec<Span>,
}

/// A standalone image line, `![alt](path)` with an optional `|<n>px` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub path: String,
    /// Requested display width; absent when missing or not a positive integer.
    pub width_px: Option<NonZeroU32>,
    /// The source line, shown literally when images are not embedded.
    pub raw: String,
}

/// A structural unit of a document, in source line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        spans: Vec<Span>,
    },
    Paragraph {
        spans: Vec<Span>,
    },
    List {
        items: Vec<ListItem>,
    },
    Image(ImageRef),
    BlankLine,
}

impl Block {
    /// Number of source lines this block covers.
    pub fn line_count(&self) -> usize {
        match self {
            Block::List { items } => items.len(),
            _ => 1,
        }
    }

    /// Reconstructs the block's source lines, joined by `\n`.
    pub fn to_source(&self) -> String {
        match self {
            Block::Heading { level, spans } => {
                format!("{}{}", Heading::prefix(*level), spans_to_source(spans))
            }
            Block::Paragraph { spans } => spans_to_source(spans),
            Block::List { items } => items
                .iter()
                .map(|item| format!("{}{}", item.prefix, spans_to_source(&item.spans)))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Image(image) => image.raw.clone(),
            Block::BlankLine => String::new(),
        }
    }
}
