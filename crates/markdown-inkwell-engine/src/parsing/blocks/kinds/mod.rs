pub mod heading;
pub mod image;
pub mod list;

pub use heading::Heading;
pub use image::ImageSyntax;
pub use list::{ListLine, ListSyntax};
