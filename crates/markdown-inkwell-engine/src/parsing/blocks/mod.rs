//! # Block Segmenting
//!
//! Two-phase, line-based block segmenting.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    from local facts only (blank, image reference, heading prefix, list marker)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` groups consecutive list
//!    items into one list block and emits every other line as its own block
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListItem`, `ImageRef`, `HeadingLevel`, `ListMarker`)
//! - **`kinds`**: Block-specific types with owned syntax (Heading, ListSyntax, ImageSyntax)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks appear in source line order
//! - Every source line belongs to exactly one block
//! - `Block::to_source` reproduces the block's lines (whitespace-only lines
//!   normalize to empty)

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, HeadingLevel, ImageRef, ListItem, ListMarker};
