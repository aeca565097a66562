pub mod blocks;
pub mod inline;
pub mod lines;

#[cfg(test)]
mod tests;

pub use blocks::{Block, HeadingLevel, ImageRef, ListItem, ListMarker};
pub use inline::{Span, SpanKind, tokenize};

use blocks::{BlockBuilder, MarkdownLineClassifier};
use lines::split_lines;

/// An ordered sequence of blocks; order equals source line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Reconstructs the source text, joining lines with `\n`.
    pub fn to_source(&self) -> String {
        self.blocks
            .iter()
            .map(Block::to_source)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of source lines covered by the document.
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(Block::line_count).sum()
    }
}

/// Segments a full document into blocks.
///
/// Never fails. Lines are split on `\r\n`, `\r` and `\n`; every line,
/// including blank ones, lands in exactly one block.
pub fn segment(text: &str) -> Document {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in split_lines(text) {
        builder.push(classifier.classify(line));
    }

    Document {
        blocks: builder.finish(),
    }
}
