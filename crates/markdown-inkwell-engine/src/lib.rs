pub mod editing;
pub mod io;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use editing::{
    ChangeOrigin, ControllerEvent, EditSurface, LiveConfig, LiveController, RenderReport,
    TextEdit,
};
pub use parsing::{Block, Document, ListItem, Span, segment, tokenize};
pub use render::{
    Color, FsImageResolver, Handlers, ImageResolver, RenderMode, RenderStyle, StyledTree, render,
};
