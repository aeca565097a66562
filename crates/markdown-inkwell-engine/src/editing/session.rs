use std::time::{Duration, Instant};

use super::edit::TextEdit;
use super::surface::ChangeOrigin;

/// Debounce state of one editing surface.
///
/// `Idle -> Dirty -> Armed -> Rendering -> Idle`. An edit while `Armed`
/// goes back through `Dirty` and restarts the window. An edit seen while
/// `Rendering` is held back and handed to the controller once the render
/// finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Dirty,
    Armed {
        deadline: Instant,
    },
    Rendering,
}

#[derive(Debug, Clone)]
pub struct EditSession {
    state: SessionState,
    debounce: Duration,
    caret: Option<usize>,
    deferred: Vec<TextEdit>,
    suppressed: usize,
}

impl EditSession {
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: SessionState::Idle,
            debounce,
            caret: None,
            deferred: Vec::new(),
            suppressed: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Caret offset captured at the start of the last render.
    pub fn last_caret(&self) -> Option<usize> {
        self.caret
    }

    pub fn is_rendering(&self) -> bool {
        self.state == SessionState::Rendering
    }

    /// Self-triggered notifications dropped since the last reset.
    pub fn suppressed_echoes(&self) -> usize {
        self.suppressed
    }

    /// Records an applied edit. Returns false while rendering, where edits
    /// must arrive through [`observe_echo`](Self::observe_echo) instead.
    pub fn note_edit(&mut self) -> bool {
        if self.is_rendering() {
            return false;
        }
        self.state = SessionState::Dirty;
        true
    }

    /// Starts (or restarts) the debounce window from `now`.
    pub fn arm(&mut self, now: Instant) {
        if self.state == SessionState::Dirty {
            self.state = SessionState::Armed {
                deadline: now + self.debounce,
            };
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            SessionState::Armed { deadline } => Some(deadline),
            _ => None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }

    pub fn begin_render(&mut self, caret: usize) {
        self.state = SessionState::Rendering;
        self.caret = Some(caret);
    }

    /// Classifies a change notification raised during a render.
    pub fn observe_echo(&mut self, origin: ChangeOrigin) {
        match origin {
            ChangeOrigin::Programmatic => {
                self.suppressed += 1;
                log::debug!("Suppressed self-triggered change during render");
            }
            ChangeOrigin::User(edit) => {
                log::debug!("Deferring user change until render completes");
                self.deferred.push(edit);
            }
        }
    }

    /// Leaves `Rendering`, returning the user edits held back meanwhile.
    pub fn finish_render(&mut self) -> Vec<TextEdit> {
        self.state = SessionState::Idle;
        std::mem::take(&mut self.deferred)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.debounce);
    }
}
