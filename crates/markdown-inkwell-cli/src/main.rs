mod surface;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_inkwell_config::Config;
use markdown_inkwell_engine::editing::{SessionState, TextEdit};
use markdown_inkwell_engine::io::{self, IoError};
use markdown_inkwell_engine::parsing::lines::split_lines;
use markdown_inkwell_engine::{LiveController, RenderMode};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::{Stdout, stdout},
    ops::Range,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};
use surface::{TAB, TerminalSurface, to_color};

/// Upper bound on how long the loop sleeps when no render is armed.
const IDLE_TICK: Duration = Duration::from_millis(250);

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App {
    path: PathBuf,
    controller: LiveController<TerminalSurface>,
    /// Caret as a byte offset into the source text.
    caret: usize,
    scroll: u16,
    status: String,
}

impl App {
    fn new(path: PathBuf, config: &Config) -> Result<Self> {
        let mut controller = LiveController::new(
            TerminalSurface::new(),
            config.render_style(),
            config.live_config(),
        );
        controller.set_base_dir(io::base_dir_for(&path));

        let status = match io::read_document(&path) {
            Ok(content) => {
                controller.load_text(&content);
                format!("Opened {}", path.display())
            }
            Err(IoError::NotFound(_)) => {
                controller.new_file();
                format!("New file {}", path.display())
            }
            Err(e) => return Err(e.into()),
        };
        log::info!("{status}");

        Ok(Self {
            path,
            controller,
            caret: 0,
            scroll: 0,
            status,
        })
    }

    fn title(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        let modified = if self.controller.is_modified() {
            " [+]"
        } else {
            ""
        };
        let mode = match self.controller.mode() {
            RenderMode::LiveEdit => "Live Edit",
            RenderMode::Preview => "Preview",
        };
        format!("{name}{modified} | {mode}")
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Flow> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Ok(Flow::Quit),
            KeyCode::Char('q') if ctrl => return Ok(Flow::Quit),
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Tab => self.toggle_mode(),
            _ if self.controller.mode() == RenderMode::Preview => {}
            KeyCode::Char(c) if !ctrl => self.insert(&c.to_string()),
            KeyCode::Enter => self.insert("\n"),
            KeyCode::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.delete(prev..self.caret);
                }
            }
            KeyCode::Delete => {
                if let Some(next) = self.next_boundary() {
                    self.delete(self.caret..next);
                }
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.move_caret(prev);
                }
            }
            KeyCode::Right => {
                if let Some(next) = self.next_boundary() {
                    self.move_caret(next);
                }
            }
            KeyCode::Home => self.move_caret(self.line_start()),
            KeyCode::End => self.move_caret(self.line_end()),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn insert(&mut self, text: &str) {
        self.apply(TextEdit::insert(self.caret, text));
    }

    fn delete(&mut self, range: Range<usize>) {
        self.apply(TextEdit::delete(range));
    }

    fn apply(&mut self, edit: TextEdit) {
        match self.controller.apply_edit(edit, Instant::now()) {
            Ok(patch) => self.move_caret(patch.caret),
            Err(e) => {
                log::warn!("Rejected edit: {e}");
                self.status = format!("Rejected edit: {e}");
            }
        }
    }

    fn move_caret(&mut self, offset: usize) {
        self.caret = offset;
        self.controller.surface_mut().place_caret(offset);
    }

    /// Previous caret stop. A `\r\n` pair is a single stop.
    fn prev_boundary(&self) -> Option<usize> {
        let text = self.controller.text();
        let prev = text.prev_codepoint_offset(self.caret)?;
        if prev > 0 && text.byte_at(prev) == b'\n' && text.byte_at(prev - 1) == b'\r' {
            Some(prev - 1)
        } else {
            Some(prev)
        }
    }

    /// Next caret stop. A `\r\n` pair is a single stop.
    fn next_boundary(&self) -> Option<usize> {
        let text = self.controller.text();
        let next = text.next_codepoint_offset(self.caret)?;
        if next < text.len() && text.byte_at(next - 1) == b'\r' && text.byte_at(next) == b'\n' {
            Some(next + 1)
        } else {
            Some(next)
        }
    }

    fn line_start(&self) -> usize {
        let text = self.controller.text();
        let mut at = self.caret;
        while at > 0 && !is_line_break(text.byte_at(at - 1)) {
            at -= 1;
        }
        at
    }

    fn line_end(&self) -> usize {
        let text = self.controller.text();
        let mut at = self.caret;
        while at < text.len() && !is_line_break(text.byte_at(at)) {
            at += 1;
        }
        at
    }

    fn toggle_mode(&mut self) {
        let next = match self.controller.mode() {
            RenderMode::LiveEdit => RenderMode::Preview,
            RenderMode::Preview => RenderMode::LiveEdit,
        };
        self.controller.set_mode(next);
        if next == RenderMode::LiveEdit {
            self.move_caret(self.caret);
        }
    }

    fn save(&mut self) {
        match io::write_document(&self.path, &self.controller.plain_text()) {
            Ok(()) => {
                self.controller.mark_saved();
                self.status = format!("Saved {}", self.path.display());
                log::info!("{}", self.status);
            }
            Err(e) => {
                log::error!("Failed to save {}: {e}", self.path.display());
                self.status = format!("Save failed: {e}");
            }
        }
    }

    /// Row and column of the caret on screen, tabs expanded.
    ///
    /// Rendered whitespace-only lines are empty, so the caret sits at their start.
    fn caret_row_col(&self) -> (u16, u16) {
        let text = self.controller.text();
        let before = text.slice_to_cow(..self.caret);
        let lines = split_lines(&before);
        let row = lines.len().saturating_sub(1);
        let rendered_blank = self.controller.state() == SessionState::Idle
            && text
                .slice_to_cow(self.line_start()..self.line_end())
                .trim()
                .is_empty();
        let col = match lines.last() {
            Some(line) if !rendered_blank => line
                .chars()
                .map(|c| if c == '\t' { TAB.len() } else { 1 })
                .sum::<usize>(),
            _ => 0,
        };
        (
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        )
    }

    /// Lines to draw: the last render, or the raw text while a render is pending.
    fn body(&self) -> Vec<Line<'static>> {
        match self.controller.state() {
            SessionState::Idle => self.controller.surface().lines().to_vec(),
            _ => split_lines(&self.controller.plain_text())
                .into_iter()
                .map(|l| Line::from(l.replace('\t', TAB)))
                .collect(),
        }
    }
}

fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() == 2 && args[1] == "--print-default-config" {
        print!("{}", Config::default_toml());
        return Ok(());
    }
    if args.len() != 2 {
        eprintln!("Usage: {} <file.md>", args[0]);
        eprintln!("       {} --print-default-config", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let mut app = App::new(path, &config)?;

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;

    let outcome = run_app(&mut terminal, &mut app);

    // The terminal must be handed back even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = outcome {
        eprintln!("Error: {err:?}");
        process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = app
            .controller
            .deadline()
            .map_or(IDLE_TICK, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            });
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key)? == Flow::Quit
        {
            return Ok(());
        }

        app.controller.poll(Instant::now());
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    let body_area = chunks[0];
    let visible_rows = body_area.height.saturating_sub(2);
    let (row, col) = app.caret_row_col();
    if row < app.scroll {
        app.scroll = row;
    } else if visible_rows > 0 && row >= app.scroll + visible_rows {
        app.scroll = row - visible_rows + 1;
    }

    let content = Paragraph::new(app.body())
        .style(app.controller.surface().page_style())
        .block(Block::default().borders(Borders::ALL).title(app.title()))
        .scroll((app.scroll, 0));
    f.render_widget(content, body_area);

    if app.controller.mode() == RenderMode::LiveEdit {
        f.set_cursor_position(Position {
            x: body_area.x.saturating_add(1).saturating_add(col),
            y: body_area.y.saturating_add(1).saturating_add(row - app.scroll),
        });
    }

    // Status and instructions
    let style = app.controller.style();
    let help = Line::from(vec![
        Span::styled(
            format!("{} ", app.status),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "| Tab: Preview/Edit | Ctrl-S: Save | Ctrl-Q/Esc: Quit",
            Style::default().fg(to_color(style.bullet)),
        ),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}
