use markdown_inkwell_engine::parsing::{Block, Span};
use markdown_inkwell_engine::render::{
    FontSlant, FontWeight, FsImageResolver, Interaction, RenderMode, RenderStyle, StyledNode,
    StyledTree, render,
};
use markdown_inkwell_engine::segment;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

/// Renders one fixture with `chart.png` present next to it.
fn render_fixture(name: &str, mode: RenderMode) -> StyledTree {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("chart.png"), b"png").unwrap();
    let doc = segment(&fixture(name));
    render(
        &doc,
        &RenderStyle::default(),
        mode,
        &FsImageResolver::new(dir.path()),
    )
}

fn node_outline(node: &StyledNode) -> String {
    let mut tags = Vec::new();
    if node.style.weight == FontWeight::Bold {
        tags.push("bold".to_string());
    }
    if node.style.slant == FontSlant::Italic {
        tags.push("italic".to_string());
    }
    if node.style.underline {
        tags.push("underline".to_string());
    }
    if node.style.background.is_some() {
        tags.push("code".to_string());
    }
    match &node.interaction {
        Some(Interaction::Link(url)) => tags.push(format!("link={url}")),
        Some(Interaction::ResizeImage(_)) => tags.push("resizable".to_string()),
        None => {}
    }
    if let Some(image) = &node.image {
        tags.push(format!("image={}px", image.width_px));
    }

    if tags.is_empty() {
        format!("{:?}", node.text)
    } else {
        format!("{:?}[{}]", node.text, tags.join(","))
    }
}

fn outline(tree: &StyledTree) -> String {
    let mut out = Vec::new();
    for block in &tree.blocks {
        out.push(format!("{:?}", block.role));
        for line in &block.lines {
            let nodes = line
                .nodes
                .iter()
                .map(node_outline)
                .collect::<Vec<_>>()
                .join(" ");
            out.push(format!("  {}| {}", line.indent_level, nodes));
        }
    }
    out.join("\n")
}

#[test]
fn weekly_notes_preview() {
    let tree = render_fixture("weekly_notes", RenderMode::Preview);
    insta::assert_snapshot!(outline(&tree), @r##"
    Heading(HeadingLevel(1))
      0| "Weekly notes"[underline]
    Paragraph
      0| "Met with " "Sam"[bold] " about the " "roadmap"[italic] "."
    List
      0| "• " "ship " "v2"[code]
      1| "    • " "see " "tracker"[underline,link=https://t.example]
    Image
      0| ""[resizable,image=250px]
    "##);
}

#[test]
fn weekly_notes_live_edit() {
    let tree = render_fixture("weekly_notes", RenderMode::LiveEdit);
    insta::assert_snapshot!(outline(&tree), @r##"
    Heading(HeadingLevel(1))
      0| "# "[underline] "Weekly notes"[underline]
    Paragraph
      0| "Met with " "**Sam**"[bold] " about the " "*roadmap*"[italic] "."
    List
      0| "- " "ship " "`v2`"[code]
      1| "\t- " "see " "[tracker](https://t.example)"[link=https://t.example]
    Image
      0| "![chart](chart.png)|250px"
    "##);
    assert_eq!(tree.visible_text(), fixture("weekly_notes"));
}

#[rstest]
#[case("just some words")]
#[case("line one\nline two\n\nline four")]
#[case("trailing space   \n3 + 4 = 7")]
fn plain_text_renders_one_plain_paragraph_per_line(#[case] text: &str) {
    let doc = segment(text);
    let tree = render(
        &doc,
        &RenderStyle::default(),
        RenderMode::Preview,
        &FsImageResolver::new("."),
    );

    let non_blank = text.lines().filter(|l| !l.trim().is_empty()).collect::<Vec<_>>();
    let paragraphs = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Paragraph { spans } => Some(spans.clone()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(
        paragraphs,
        non_blank
            .iter()
            .map(|l| vec![Span::Plain(l.to_string())])
            .collect::<Vec<_>>()
    );
    assert_eq!(tree.visible_text(), text);
}

#[test]
fn bold_and_italic_in_both_modes() {
    let doc = segment("**hi** and *there*");
    let style = RenderStyle::default();
    let images = FsImageResolver::new(".");

    let preview = render(&doc, &style, RenderMode::Preview, &images);
    let live = render(&doc, &style, RenderMode::LiveEdit, &images);

    assert_eq!(preview.visible_text(), "hi and there");
    assert_eq!(live.visible_text(), "**hi** and *there*");
}
