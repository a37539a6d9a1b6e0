mod document;
mod html;
mod template;

pub use document::{Container, Document};
pub use html::HtmlPage;

use anyhow::Result;

/// Where feed cards are painted. Looking a container up by id mirrors the
/// page markup: an id with no element is simply absent.
pub trait Surface {
    fn container_mut(&mut self, id: &str) -> Option<&mut Container>;

    /// Makes the current container contents visible.
    fn present(&mut self) -> Result<()>;
}

impl Surface for Document {
    fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        Document::container_mut(self, id)
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
