use super::{
    classify::LineClass,
    types::{Block, ListItem},
};

#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    List {
        items: Vec<ListItem>,
    },
}

/// Phase 2 of segmenting: turns classified lines into blocks.
///
/// Consecutive list items accumulate into one [`Block::List`]; any other
/// line closes the open list before it is emitted itself.
pub struct BlockBuilder {
    open: OpenBlock,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        let block = match c {
            LineClass::ListItem(item) => {
                self.extend_list(item);
                return;
            }
            LineClass::Blank => Block::BlankLine,
            LineClass::Image(image) => Block::Image(image),
            LineClass::Heading { level, spans } => Block::Heading { level, spans },
            LineClass::Text(spans) => Block::Paragraph { spans },
        };

        self.flush_list();
        self.out.push(block);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.out
    }

    fn extend_list(&mut self, item: ListItem) {
        match &mut self.open {
            OpenBlock::List { items } => items.push(item),
            OpenBlock::None => self.open = OpenBlock::List { items: vec![item] },
        }
    }

    fn flush_list(&mut self) {
        if let OpenBlock::List { items } = std::mem::take(&mut self.open) {
            self.out.push(Block::List { items });
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::MarkdownLineClassifier;

    fn build(lines: &[&str]) -> Vec<Block> {
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(MarkdownLineClassifier.classify(line));
        }
        builder.finish()
    }

    #[test]
    fn consecutive_items_share_one_list() {
        let blocks = build(&["- a", "- b", "1. c"]);
        assert_eq!(blocks.len(), 1);
        assert!(matches!(&blocks[0], Block::List { items } if items.len() == 3));
    }

    #[test]
    fn non_list_line_closes_list() {
        let blocks = build(&["- a", "text", "- b"]);
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::List { .. }));
        assert!(matches!(blocks[1], Block::Paragraph { .. }));
        assert!(matches!(blocks[2], Block::List { .. }));
    }

    #[test]
    fn blank_line_closes_list() {
        let blocks = build(&["- a", "", "- b"]);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], Block::BlankLine);
    }

    #[test]
    fn list_open_at_eof_is_flushed() {
        let blocks = build(&["intro", "- a"]);
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[1], Block::List { .. }));
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(build(&[]).is_empty());
    }
}
