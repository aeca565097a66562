//! # Inline Tokenizing
//!
//! Cursor-based tokenizing of a single line into typed [`Span`]s.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Plain, Bold, Italic, Code, Link)
//! - **`kinds`**: Inline-specific types with owned delimiters (Bold, Italic, CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! At every scan position the constructs are tried in a fixed order:
//!
//! | order | construct | shape           |
//! |-------|-----------|-----------------|
//! | 1     | bold      | `**text**`      |
//! | 2     | italic    | `*text*`        |
//! | 3     | link      | `[text](url)`   |
//! | 4     | code      | `` `code` ``    |
//! | 5     | plain     | anything else   |
//!
//! Spans never nest and never cross a line boundary. A delimiter that opens
//! but does not close degrades to plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind};
