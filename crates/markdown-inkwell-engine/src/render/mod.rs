//! # Rendering
//!
//! Maps a segmented [`Document`] onto a renderer-agnostic [`StyledTree`].
//!
//! One pipeline serves both targets. [`RenderMode`] only changes the text a
//! node carries, never the block or node structure:
//!
//! - **Preview** strips delimiters and embeds resolved images
//! - **LiveEdit** keeps every source character visible and styles it in place
//!
//! ## Modules
//!
//! - **`style`**: `RenderStyle` and `Color`, owned by the host
//! - **`tree`**: output types (`StyledTree` down to `StyledNode`)
//! - **`images`**: `ImageResolver` trait and the filesystem implementation
//! - **`handlers`**: injected link / image-click callbacks

pub mod handlers;
pub mod images;
pub mod style;
pub mod tree;

pub use handlers::Handlers;
pub use images::{FsImageResolver, ImageError, ImageResolver};
pub use style::{Color, ColorError, HeadingStyle, RenderStyle};
pub use tree::{
    BlockRole, EmbeddedImage, FontSlant, FontWeight, Interaction, PageStyle, StyledBlock,
    StyledLine, StyledNode, StyledTree, TextStyle,
};

use crate::parsing::blocks::kinds::Heading;
use crate::parsing::{Block, Document, HeadingLevel, ImageRef, ListItem, ListMarker, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Delimiters removed, images embedded.
    Preview,
    /// Delimiters kept and styled in place.
    #[default]
    LiveEdit,
}

/// Renders `doc` for `mode`.
///
/// Never fails. Image resolution errors become placeholder nodes.
pub fn render(
    doc: &Document,
    style: &RenderStyle,
    mode: RenderMode,
    images: &dyn ImageResolver,
) -> StyledTree {
    let ctx = RenderContext {
        style,
        mode,
        images,
    };

    StyledTree {
        mode,
        page: PageStyle {
            background: style.background,
            foreground: style.text,
            font_family: style.font_family.clone(),
            font_size: style.font_size,
        },
        blocks: doc.blocks.iter().map(|b| ctx.block(b)).collect(),
    }
}

struct RenderContext<'a> {
    style: &'a RenderStyle,
    mode: RenderMode,
    images: &'a dyn ImageResolver,
}

impl RenderContext<'_> {
    fn block(&self, block: &Block) -> StyledBlock {
        match block {
            Block::Heading { level, spans } => StyledBlock {
                role: BlockRole::Heading(*level),
                lines: vec![self.heading(*level, spans)],
            },
            Block::Paragraph { spans } => StyledBlock {
                role: BlockRole::Paragraph,
                lines: vec![StyledLine {
                    indent_level: 0,
                    nodes: self.spans(spans, &self.regular()),
                }],
            },
            Block::List { items } => StyledBlock {
                role: BlockRole::List,
                lines: items.iter().map(|item| self.list_item(item)).collect(),
            },
            Block::Image(image) => StyledBlock {
                role: BlockRole::Image,
                lines: vec![StyledLine {
                    indent_level: 0,
                    nodes: vec![self.image(image)],
                }],
            },
            Block::BlankLine => StyledBlock {
                role: BlockRole::Blank,
                lines: vec![StyledLine::default()],
            },
        }
    }

    fn regular(&self) -> TextStyle {
        TextStyle::plain(self.style.regular_text, self.style.font_size)
    }

    fn heading(&self, level: HeadingLevel, spans: &[Span]) -> StyledLine {
        let heading = self.style.heading(level);
        let mut base = TextStyle::plain(heading.color, heading.font_size);
        match level.get() {
            2 => base.weight = FontWeight::Bold,
            _ => base.underline = true,
        }

        let mut nodes = Vec::with_capacity(spans.len() + 1);
        if self.mode == RenderMode::LiveEdit {
            nodes.push(StyledNode::text(Heading::prefix(level), base.clone()));
        }
        nodes.extend(self.spans(spans, &base));
        StyledLine {
            indent_level: 0,
            nodes,
        }
    }

    fn list_item(&self, item: &ListItem) -> StyledLine {
        let marker = match self.mode {
            RenderMode::LiveEdit => item.prefix.clone(),
            RenderMode::Preview => {
                let bullet = match &item.marker {
                    ListMarker::Dash | ListMarker::Asterisk => "• ".to_string(),
                    ListMarker::Numbered(n) => format!("{n}. "),
                };
                format!("{}{bullet}", "    ".repeat(item.indent_level))
            }
        };
        let bullet_style = TextStyle::plain(self.style.bullet, self.style.font_size);

        let mut nodes = vec![StyledNode::text(marker, bullet_style)];
        nodes.extend(self.spans(&item.spans, &self.regular()));
        StyledLine {
            indent_level: item.indent_level,
            nodes,
        }
    }

    fn spans(&self, spans: &[Span], base: &TextStyle) -> Vec<StyledNode> {
        spans.iter().map(|span| self.span(span, base)).collect()
    }

    fn span(&self, span: &Span, base: &TextStyle) -> StyledNode {
        let mut style = base.clone();
        let mut interaction = None;
        match span {
            Span::Plain(_) => {}
            Span::Bold(_) => {
                style.color = self.style.bold;
                style.weight = FontWeight::Bold;
            }
            Span::Italic(_) => {
                style.color = self.style.italic;
                style.slant = FontSlant::Italic;
            }
            Span::Code(_) => {
                style.background = Some(self.style.code_background);
                style.font_family = Some(self.style.code_font_family.clone());
            }
            Span::Link { url, .. } => {
                style.color = self.style.link;
                style.underline = self.mode == RenderMode::Preview;
                interaction = Some(Interaction::Link(url.clone()));
            }
        }

        let text = match self.mode {
            RenderMode::Preview => span.text().to_string(),
            RenderMode::LiveEdit => span.raw().into_owned(),
        };
        StyledNode {
            interaction,
            ..StyledNode::text(text, style)
        }
    }

    fn image(&self, image: &ImageRef) -> StyledNode {
        if self.mode == RenderMode::LiveEdit {
            return StyledNode::text(image.raw.clone(), self.regular());
        }

        match self.images.resolve(&image.path) {
            Ok(path) => {
                let width_px = image
                    .width_px
                    .unwrap_or(self.style.default_image_width)
                    .get();
                let interaction = self
                    .style
                    .image_resize_enabled
                    .then(|| Interaction::ResizeImage(path.clone()));
                StyledNode {
                    interaction,
                    image: Some(EmbeddedImage { path, width_px }),
                    ..StyledNode::text(String::new(), self.regular())
                }
            }
            Err(err) => {
                log::warn!("Failed to resolve image {}: {err}", image.path);
                let text = match err {
                    ImageError::NotFound(_) => format!("[Image not found: {}]", image.path),
                    other => format!("[Error loading image {}: {other}]", image.path),
                };
                let mut style = TextStyle::plain(Color::RED, self.style.font_size);
                style.slant = FontSlant::Italic;
                StyledNode::text(text, style)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::segment;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    /// Resolver for documents without images.
    struct NoImages;

    impl ImageResolver for NoImages {
        fn resolve(&self, path: &str) -> Result<PathBuf, ImageError> {
            Err(ImageError::NotFound(PathBuf::from(path)))
        }
    }

    fn render_text(md: &str, mode: RenderMode) -> StyledTree {
        render(&segment(md), &RenderStyle::default(), mode, &NoImages)
    }

    #[test]
    fn preview_strips_delimiters() {
        let tree = render_text("**hi** and *there*", RenderMode::Preview);
        assert_eq!(tree.visible_text(), "hi and there");

        let nodes = tree.nodes().collect::<Vec<_>>();
        assert_eq!(nodes[0].style.weight, FontWeight::Bold);
        assert_eq!(nodes[0].style.color, RenderStyle::default().bold);
        assert_eq!(nodes[2].style.slant, FontSlant::Italic);
    }

    #[test]
    fn live_edit_keeps_delimiters_with_same_styling() {
        let preview = render_text("**hi** and *there*", RenderMode::Preview);
        let live = render_text("**hi** and *there*", RenderMode::LiveEdit);
        assert_eq!(live.visible_text(), "**hi** and *there*");

        let styles = |t: &StyledTree| t.nodes().map(|n| n.style.clone()).collect::<Vec<_>>();
        assert_eq!(styles(&preview), styles(&live));
    }

    #[test]
    fn modes_share_structure() {
        let md = "# Title\n- a\n\t2. b\n\n[x](u) `c`\n![i](p.png)";
        let preview = render_text(md, RenderMode::Preview);
        let live = render_text(md, RenderMode::LiveEdit);

        let shape = |t: &StyledTree| {
            t.blocks
                .iter()
                .map(|b| (b.role, b.lines.len()))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&preview), shape(&live));
    }

    #[test]
    fn live_edit_text_reproduces_source() {
        let md = "## Sub *x*\n- a\n    * b\n10. c\n\nplain [l](u)\n![i](p.png)|20px";
        assert_eq!(render_text(md, RenderMode::LiveEdit).visible_text(), md);
    }

    #[test]
    fn heading_styles_follow_level() {
        let style = RenderStyle::default();
        let tree = render_text("# one\n## two\n### three", RenderMode::Preview);
        let first = |i: usize| &tree.blocks[i].lines[0].nodes[0].style;

        assert!(first(0).underline);
        assert_eq!(first(0).font_size, 26.0);
        assert_eq!(first(1).weight, FontWeight::Bold);
        assert!(!first(1).underline);
        assert_eq!(first(1).color, style.headings[1].color);
        assert!(first(2).underline);
    }

    #[test]
    fn bold_inside_heading_keeps_heading_size() {
        let tree = render_text("## a **b**", RenderMode::LiveEdit);
        let nodes = &tree.blocks[0].lines[0].nodes;
        assert_eq!(nodes[0].text, "## ");
        assert_eq!(nodes[2].text, "**b**");
        assert_eq!(nodes[2].style.font_size, 18.0);
        assert_eq!(nodes[2].style.color, RenderStyle::default().bold);
    }

    #[test]
    fn list_markers_per_mode() {
        let md = "- top\n\t3. child";
        let preview = render_text(md, RenderMode::Preview);
        let live = render_text(md, RenderMode::LiveEdit);

        let lines = |t: &StyledTree| t.lines().map(StyledLine::text).collect::<Vec<_>>();
        assert_eq!(lines(&preview), vec!["• top", "    3. child"]);
        assert_eq!(lines(&live), vec!["- top", "\t3. child"]);
        assert_eq!(
            preview.lines().map(|l| l.indent_level).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(
            preview.blocks[0].lines[0].nodes[0].style.color,
            RenderStyle::default().bullet
        );
    }

    #[test]
    fn links_are_navigable_and_underlined_only_in_preview() {
        let preview = render_text("see [docs](https://d.io)", RenderMode::Preview);
        let live = render_text("see [docs](https://d.io)", RenderMode::LiveEdit);

        let link = |t: &StyledTree| t.nodes().nth(1).cloned().unwrap();
        assert_eq!(link(&preview).text, "docs");
        assert_eq!(link(&preview).link_target(), Some("https://d.io"));
        assert!(link(&preview).style.underline);
        assert_eq!(link(&live).text, "[docs](https://d.io)");
        assert_eq!(link(&live).link_target(), Some("https://d.io"));
        assert!(!link(&live).style.underline);
    }

    #[test]
    fn code_span_uses_code_font_and_background() {
        let tree = render_text("`x`", RenderMode::Preview);
        let node = tree.nodes().next().unwrap();
        assert_eq!(node.text, "x");
        assert_eq!(node.style.background, Some(RenderStyle::default().code_background));
        assert_eq!(node.style.font_family.as_deref(), Some("Consolas"));
    }

    #[test]
    fn missing_image_renders_red_italic_placeholder() {
        let dir = create_test_dir();
        let resolver = FsImageResolver::new(dir.path());
        let tree = render(
            &segment("![x](missing.png)"),
            &RenderStyle::default(),
            RenderMode::Preview,
            &resolver,
        );

        let node = tree.nodes().next().unwrap();
        assert_eq!(node.text, "[Image not found: missing.png]");
        assert_eq!(node.style.color, Color::RED);
        assert_eq!(node.style.slant, FontSlant::Italic);
        assert!(node.image.is_none());
    }

    #[test]
    fn unreadable_image_reports_reason() {
        let dir = create_test_dir();
        std::fs::create_dir(dir.path().join("pics")).unwrap();
        let resolver = FsImageResolver::new(dir.path());
        let tree = render(
            &segment("![x](pics)"),
            &RenderStyle::default(),
            RenderMode::Preview,
            &resolver,
        );

        let text = &tree.nodes().next().unwrap().text;
        assert!(text.starts_with("[Error loading image pics: "), "{text}");
    }

    #[test]
    fn resolved_image_is_embedded_with_width() {
        let dir = create_test_dir();
        let written = create_test_file(&dir, "a.png", b"png");
        let resolver = FsImageResolver::new(dir.path());
        let doc = segment("![a](a.png)|120px\n![a](a.png)");

        let tree = render(&doc, &RenderStyle::default(), RenderMode::Preview, &resolver);
        let images = tree
            .nodes()
            .filter_map(|n| n.image.clone())
            .collect::<Vec<_>>();
        assert_eq!(
            images,
            vec![
                EmbeddedImage {
                    path: written.clone(),
                    width_px: 120
                },
                EmbeddedImage {
                    path: written.clone(),
                    width_px: 400
                },
            ]
        );
        assert_eq!(
            tree.nodes().next().unwrap().interaction,
            Some(Interaction::ResizeImage(written))
        );
    }

    #[test]
    fn resize_interaction_respects_style_flag() {
        let dir = create_test_dir();
        create_test_file(&dir, "a.png", b"png");
        let style = RenderStyle {
            image_resize_enabled: false,
            ..RenderStyle::default()
        };
        let tree = render(
            &segment("![a](a.png)"),
            &style,
            RenderMode::Preview,
            &FsImageResolver::new(dir.path()),
        );
        assert_eq!(tree.nodes().next().unwrap().interaction, None);
    }

    #[test]
    fn live_edit_leaves_images_as_text() {
        let tree = render_text("![x](missing.png)|50px", RenderMode::LiveEdit);
        let node = tree.nodes().next().unwrap();
        assert_eq!(node.text, "![x](missing.png)|50px");
        assert!(node.image.is_none());
    }

    #[test]
    fn rendering_is_idempotent() {
        let doc = segment("# t\n- **a**\n\n![x](nope.png)");
        let style = RenderStyle::default();
        for mode in [RenderMode::Preview, RenderMode::LiveEdit] {
            assert_eq!(
                render(&doc, &style, mode, &NoImages),
                render(&doc, &style, mode, &NoImages)
            );
        }
    }

    #[test]
    fn page_style_comes_from_render_style() {
        let tree = render_text("", RenderMode::Preview);
        insta::assert_debug_snapshot!(tree.page, @r#"
        PageStyle {
            background: Color {
                r: 30,
                g: 30,
                b: 30,
            },
            foreground: Color {
                r: 212,
                g: 212,
                b: 212,
            },
            font_family: "Consolas",
            font_size: 12.0,
        }
        "#);
        assert_eq!(tree.blocks.len(), 1);
        assert_eq!(tree.blocks[0].role, BlockRole::Blank);
    }
}
