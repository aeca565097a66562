use std::fmt;
use std::path::Path;

use super::tree::{Interaction, StyledNode};

pub type LinkHandler = Box<dyn Fn(&str)>;
pub type ImageClickHandler = Box<dyn Fn(&Path)>;

/// Side-effecting callbacks injected by the host.
///
/// The pipeline only records interactions on nodes; navigation and resize
/// dialogs are the host's business.
#[derive(Default)]
pub struct Handlers {
    on_link: Option<LinkHandler>,
    on_image_click: Option<ImageClickHandler>,
}

impl Handlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_handler(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_link = Some(Box::new(handler));
        self
    }

    pub fn with_image_click_handler(mut self, handler: impl Fn(&Path) + 'static) -> Self {
        self.on_image_click = Some(Box::new(handler));
        self
    }

    /// Invokes the handler matching the node's interaction.
    ///
    /// Returns false when the node has no interaction or no handler is set.
    pub fn activate(&self, node: &StyledNode) -> bool {
        match &node.interaction {
            Some(Interaction::Link(url)) => match &self.on_link {
                Some(on_link) => {
                    on_link(url);
                    true
                }
                None => false,
            },
            Some(Interaction::ResizeImage(path)) => match &self.on_image_click {
                Some(on_image_click) => {
                    on_image_click(path);
                    true
                }
                None => false,
            },
            None => false,
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("on_link", &self.on_link.is_some())
            .field("on_image_click", &self.on_image_click.is_some())
            .finish()
    }
}
