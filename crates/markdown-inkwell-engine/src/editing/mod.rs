//! # Live Editing
//!
//! Debounced re-rendering of an editing surface.
//!
//! ## Modules
//!
//! - **`edit`**: `TextEdit` byte-range edits compiled to xi-rope deltas
//! - **`session`**: `EditSession`, the `Idle -> Dirty -> Armed -> Rendering` state machine
//! - **`surface`**: `EditSurface` trait implemented by hosts
//! - **`controller`**: `LiveController` tying buffer, session, pipeline and surface together
//!
//! The controller is single-threaded. Time is passed in as `Instant`s so a
//! host can drive it from any event loop.

pub mod controller;
pub mod edit;
pub mod session;
pub mod surface;

pub use controller::{
    CaretRestore, ControllerEvent, DEFAULT_DEBOUNCE, LiveConfig, LiveController, RenderReport,
};
pub use edit::{EditError, Patch, TextEdit};
pub use session::{EditSession, SessionState};
pub use surface::{CaretError, ChangeOrigin, EditSurface};
