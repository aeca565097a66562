use markdown_inkwell_engine::editing::{CaretError, ChangeOrigin, EditSurface};
use markdown_inkwell_engine::render::{
    self, FontSlant, FontWeight, PageStyle, StyledLine, StyledNode, StyledTree,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Terminals have no tab stops inside a paragraph widget.
pub const TAB: &str = "    ";

/// Editing surface backed by pre-styled ratatui lines.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    lines: Vec<Line<'static>>,
    page: Style,
    text: String,
    caret: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Background and foreground of the whole page.
    pub fn page_style(&self) -> Style {
        self.page
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Moves the caret as typing does, before the next render catches up.
    pub fn place_caret(&mut self, offset: usize) {
        self.caret = offset;
    }
}

impl EditSurface for TerminalSurface {
    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn replace_content(&mut self, tree: &StyledTree, _echo: &mut dyn FnMut(ChangeOrigin)) {
        self.lines = tree.lines().map(to_line).collect();
        self.page = page_style(&tree.page);
        self.text = tree.visible_text();
    }

    fn set_caret(&mut self, offset: usize) -> Result<(), CaretError> {
        if offset > self.text.len() || !self.text.is_char_boundary(offset) {
            return Err(CaretError::OutOfRange {
                offset,
                len: self.text.len(),
            });
        }
        self.caret = offset;
        Ok(())
    }

    fn end_offset(&self) -> usize {
        self.text.len()
    }
}

pub fn to_color(color: render::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn page_style(page: &PageStyle) -> Style {
    Style::default()
        .fg(to_color(page.foreground))
        .bg(to_color(page.background))
}

fn to_line(line: &StyledLine) -> Line<'static> {
    Line::from(line.nodes.iter().map(to_span).collect::<Vec<_>>())
}

fn to_span(node: &StyledNode) -> Span<'static> {
    let mut style = Style::default().fg(to_color(node.style.color));
    if let Some(background) = node.style.background {
        style = style.bg(to_color(background));
    }
    if node.style.weight == FontWeight::Bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if node.style.slant == FontSlant::Italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if node.style.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    match &node.image {
        Some(image) => Span::styled(
            format!("[image: {} ({}px)]", image.path.display(), image.width_px),
            style.add_modifier(Modifier::ITALIC),
        ),
        None => Span::styled(node.text.replace('\t', TAB), style),
    }
}
