//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = b"**"`
//! - **`Italic`**: `DELIM = b'*'`
//! - **`CodeSpan`**: `TICK = b'\`'` - verbatim content, no parsing inside
//! - **`Link`**: `TEXT_OPEN = b'['`, `TEXT_CLOSE = b']'`, `URL_OPEN = b'('`, `URL_CLOSE = b')'`
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::Link;
