//! Renderer-agnostic styled output.
//!
//! A host walks `StyledTree -> StyledBlock -> StyledLine -> StyledNode` and
//! maps each [`TextStyle`] onto its own text attributes.

use std::path::PathBuf;

use crate::parsing::HeadingLevel;

use super::{RenderMode, style::Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// Visual attributes of one run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub background: Option<Color>,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub underline: bool,
    /// Overrides the page font family when set.
    pub font_family: Option<String>,
    pub font_size: f32,
}

impl TextStyle {
    pub fn plain(color: Color, font_size: f32) -> Self {
        Self {
            color,
            background: None,
            weight: FontWeight::Normal,
            slant: FontSlant::Normal,
            underline: false,
            font_family: None,
            font_size,
        }
    }
}

/// What happens when the host activates a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Navigate to the url.
    Link(String),
    /// Resize request for the image at the resolved path.
    ResizeImage(PathBuf),
}

/// A resolved image to embed in place of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub path: PathBuf,
    pub width_px: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledNode {
    pub text: String,
    pub style: TextStyle,
    pub interaction: Option<Interaction>,
    pub image: Option<EmbeddedImage>,
}

impl StyledNode {
    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            interaction: None,
            image: None,
        }
    }

    pub fn link_target(&self) -> Option<&str> {
        match &self.interaction {
            Some(Interaction::Link(url)) => Some(url),
            _ => None,
        }
    }
}

/// One visual line. `indent_level` repeats the source list indent for hosts
/// that lay out with margins; the indentation is already part of the text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    pub indent_level: usize,
    pub nodes: Vec<StyledNode>,
}

impl StyledLine {
    pub fn text(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRole {
    Heading(HeadingLevel),
    Paragraph,
    List,
    Image,
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledBlock {
    pub role: BlockRole,
    pub lines: Vec<StyledLine>,
}

/// Page-level defaults, applied behind every block.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    pub background: Color,
    pub foreground: Color,
    pub font_family: String,
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyledTree {
    pub mode: RenderMode,
    pub page: PageStyle,
    pub blocks: Vec<StyledBlock>,
}

impl StyledTree {
    pub fn lines(&self) -> impl Iterator<Item = &StyledLine> {
        self.blocks.iter().flat_map(|b| b.lines.iter())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &StyledNode> {
        self.lines().flat_map(|l| l.nodes.iter())
    }

    /// All visible text, one line per source line, joined by `\n`.
    pub fn visible_text(&self) -> String {
        self.lines()
            .map(StyledLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
