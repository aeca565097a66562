use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use xi_rope::Rope;

use crate::parsing::{Document, segment};
use crate::render::{
    FsImageResolver, Handlers, RenderMode, RenderStyle, StyledNode, StyledTree, render,
};

use super::edit::{EditError, Patch, TextEdit};
use super::session::{EditSession, SessionState};
use super::surface::EditSurface;

/// Debounce window used when nothing is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveConfig {
    /// Quiet period after the last edit before re-rendering.
    pub debounce: Duration,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// How the caret was put back after a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretRestore {
    Restored(usize),
    /// The captured offset was no longer valid; the caret went to `end`.
    Clamped { requested: usize, end: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub mode: RenderMode,
    pub block_count: usize,
    pub caret: CaretRestore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The document entered `Dirty`.
    ContentDirty,
    RenderCompleted(RenderReport),
}

type Subscriber = Box<dyn FnMut(&ControllerEvent)>;

/// Owns the source text of one editing surface and keeps the surface's
/// rendered content in step with it.
///
/// Edits go through [`apply_edit`](Self::apply_edit) and are rendered once
/// the debounce window has passed; the host drives time by calling
/// [`poll`](Self::poll), sleeping until [`deadline`](Self::deadline).
pub struct LiveController<S: EditSurface> {
    surface: S,
    buffer: Rope,
    document: Document,
    tree: Option<StyledTree>,
    style: RenderStyle,
    mode: RenderMode,
    images: FsImageResolver,
    handlers: Handlers,
    session: EditSession,
    subscribers: Vec<Subscriber>,
    modified: bool,
}

impl<S: EditSurface> LiveController<S> {
    pub fn new(surface: S, style: RenderStyle, config: LiveConfig) -> Self {
        Self {
            surface,
            buffer: Rope::from(""),
            document: Document::default(),
            tree: None,
            style,
            mode: RenderMode::default(),
            images: FsImageResolver::new(PathBuf::from(".")),
            handlers: Handlers::default(),
            session: EditSession::new(config.debounce),
            subscribers: Vec::new(),
            modified: false,
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_handlers(mut self, handlers: Handlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Document from the last render.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Tree from the last render, if any.
    pub fn tree(&self) -> Option<&StyledTree> {
        self.tree.as_ref()
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn base_dir(&self) -> &Path {
        self.images.base_dir()
    }

    /// The unrendered source text, exactly as loaded and edited.
    pub fn plain_text(&self) -> String {
        self.buffer.to_string()
    }

    /// The source buffer, for hosts that navigate it without copying.
    pub fn text(&self) -> &Rope {
        &self.buffer
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&ControllerEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Registers a callback fired each time the document becomes dirty.
    pub fn on_content_changed(&mut self, mut callback: impl FnMut() + 'static) {
        self.subscribe(move |event| {
            if matches!(event, ControllerEvent::ContentDirty) {
                callback();
            }
        });
    }

    /// Replaces the content, resets the session and renders immediately.
    pub fn load_text(&mut self, text: &str) {
        self.buffer = Rope::from(text);
        self.session.reset();
        self.modified = false;
        self.render_now(Instant::now());
    }

    /// Starts an empty document.
    pub fn new_file(&mut self) {
        self.load_text("");
    }

    /// Swaps the style and re-renders without touching the modified flag.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
        self.render_now(Instant::now());
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        if self.mode != mode {
            self.mode = mode;
            self.render_now(Instant::now());
        }
    }

    /// Changes where relative image paths resolve from.
    ///
    /// Only Preview embeds images, so only Preview re-renders.
    pub fn set_base_dir(&mut self, base_dir: impl Into<PathBuf>) {
        self.images.set_base_dir(base_dir);
        if self.mode == RenderMode::Preview {
            self.render_now(Instant::now());
        }
    }

    /// Applies an edit to the source text and (re)arms the debounce window.
    ///
    /// Rejected edits leave the text and session untouched.
    pub fn apply_edit(&mut self, edit: TextEdit, now: Instant) -> Result<Patch, EditError> {
        let (buffer, patch) = edit.apply(&self.buffer)?;
        self.buffer = buffer;
        if self.session.note_edit() {
            self.enter_dirty(now);
        }
        Ok(patch)
    }

    /// When the armed render is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.session.deadline()
    }

    /// Renders if the debounce window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<RenderReport> {
        self.session.is_due(now).then(|| self.render_now(now))
    }

    /// Re-segments and re-renders the whole text, then restores the caret.
    pub fn render_now(&mut self, now: Instant) -> RenderReport {
        let caret = self.surface.caret_offset();
        self.session.begin_render(caret);

        let document = segment(&self.buffer.to_string());
        let tree = render(&document, &self.style, self.mode, &self.images);

        let session = &mut self.session;
        self.surface
            .replace_content(&tree, &mut |origin| session.observe_echo(origin));
        let caret = self.restore_caret(caret);

        let report = RenderReport {
            mode: self.mode,
            block_count: document.blocks.len(),
            caret,
        };
        log::debug!(
            "Rendered {} blocks in {:?} mode, caret {:?}",
            report.block_count,
            report.mode,
            report.caret
        );

        self.document = document;
        self.tree = Some(tree);
        let deferred = self.session.finish_render();
        self.emit(&ControllerEvent::RenderCompleted(report.clone()));
        if self.replay(deferred) {
            self.enter_dirty(now);
        }
        report
    }

    /// Applies edits held back during a render. Returns true if any applied.
    fn replay(&mut self, edits: Vec<TextEdit>) -> bool {
        let mut applied = false;
        for edit in edits {
            match edit.apply(&self.buffer) {
                Ok((buffer, _)) => {
                    self.buffer = buffer;
                    applied = true;
                }
                Err(err) => log::warn!("Dropping edit made during render: {err}"),
            }
        }
        applied && self.session.note_edit()
    }

    /// Dispatches a node's interaction to the injected handlers.
    pub fn activate(&self, node: &StyledNode) -> bool {
        self.handlers.activate(node)
    }

    fn restore_caret(&mut self, requested: usize) -> CaretRestore {
        match self.surface.set_caret(requested) {
            Ok(()) => CaretRestore::Restored(requested),
            Err(err) => {
                let end = self.surface.end_offset();
                log::debug!("{err}; moving caret to end of document ({end})");
                if let Err(err) = self.surface.set_caret(end) {
                    log::warn!("Failed to move caret to end of document: {err}");
                }
                CaretRestore::Clamped { requested, end }
            }
        }
    }

    fn enter_dirty(&mut self, now: Instant) {
        self.modified = true;
        self.emit(&ControllerEvent::ContentDirty);
        self.session.arm(now);
    }

    fn emit(&mut self, event: &ControllerEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}
