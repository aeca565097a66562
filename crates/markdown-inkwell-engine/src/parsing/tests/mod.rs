//! Segmenter tests over whole documents.
//!
//! Outlines are compared with inline `insta` snapshots; every document is
//! also run through the reconstruction invariants.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{Block, ListMarker, Span, segment};

fn segment_checked(md: &str) -> crate::parsing::Document {
    let doc = segment(md);
    invariants::check(md, &doc);
    doc
}

#[test]
fn mixed_document_outline() {
    let md = "# Title\n\nIntro with **bold** and `code`.\n- first\n\t- nested [link](https://x.y)\n2. third\n![shot](img/a.png)|320px\n## End";
    let doc = segment_checked(md);

    insta::assert_snapshot!(normalize::outline(&doc), @r#"
    Heading(1) [Plain("Title")]
    Blank
    Paragraph [Plain("Intro with "), Bold("bold"), Plain(" and "), Code("code"), Plain(".")]
    List
      Item(0, Dash) [Plain("first")]
      Item(1, Dash) [Plain("nested "), Link("link", "https://x.y")]
      Item(0, Numbered("2")) [Plain("third")]
    Image "img/a.png" width=Some(320)
    Heading(2) [Plain("End")]
    "#);
}

#[test]
fn two_line_list_has_indent_levels() {
    let doc = segment_checked("- top\n\t- child");
    assert_eq!(doc.blocks.len(), 1);
    match &doc.blocks[0] {
        Block::List { items } => {
            let levels = items.iter().map(|i| i.indent_level).collect::<Vec<_>>();
            assert_eq!(levels, vec![0, 1]);
            assert_eq!(items[1].marker, ListMarker::Dash);
        }
        other => panic!("expected List, got {other:?}"),
    }
}

#[rstest]
#[case("a\r\nb\rc\nd")]
#[case("\n\nmiddle\n\n")]
#[case("")]
#[case("   \n# h\n")]
#[case("- a\n    - b\n        - c\ntext")]
fn every_line_is_accounted_for(#[case] md: &str) {
    segment_checked(md);
}

#[test]
fn leading_and_trailing_blank_lines_are_kept() {
    let doc = segment_checked("\nbody\n");
    assert_eq!(doc.blocks.first(), Some(&Block::BlankLine));
    assert_eq!(doc.blocks.last(), Some(&Block::BlankLine));
    assert_eq!(doc.to_source(), "\nbody\n");
}

#[test]
fn plain_text_lines_become_plain_paragraphs() {
    let doc = segment_checked("just words\nmore words, 3 + 4 = 7");
    assert_eq!(
        doc.blocks,
        vec![
            Block::Paragraph {
                spans: vec![Span::Plain("just words".into())]
            },
            Block::Paragraph {
                spans: vec![Span::Plain("more words, 3 + 4 = 7".into())]
            },
        ]
    );
}

#[test]
fn unterminated_bold_paragraph() {
    let doc = segment_checked("**bold");
    assert_eq!(
        doc.blocks,
        vec![Block::Paragraph {
            spans: vec![Span::Plain("**bold".into())]
        }]
    );
}
