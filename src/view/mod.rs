mod html;
mod terminal;

pub use html::{HtmlView, Message, OverlayBody, ResultsState};
pub use terminal::TerminalView;

use crate::model::{RecipeDetail, RecipeSummary};

/// What the overlay should display
#[derive(Debug, Clone, Copy)]
pub enum OverlayContent<'a> {
    Loading,
    Detail(&'a RecipeDetail),
    Error(&'a str),
}

/// Where a click inside the result grid landed, resolved to the enclosing card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridTarget<'a> {
    Card { id: &'a str },
    /// The grid itself, outside any card
    Container,
}

/// Where a click on the open overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTarget {
    CloseButton,
    /// The overlay's outer boundary, outside the content area
    Backdrop,
    Content,
}

/// Surface the client renders into.
///
/// Implementations own the result grid, the message area and the overlay.
/// Opening the overlay suppresses background scrolling; closing restores it.
pub trait View {
    /// Remove every card from the grid
    fn clear_results(&mut self);

    fn append_card(&mut self, recipe: &RecipeSummary);

    /// Replace the message area text, resetting any previous error styling
    fn show_message(&mut self, text: &str, is_error: bool);

    fn clear_message(&mut self);

    fn open_overlay(&mut self);

    fn set_overlay_content(&mut self, content: OverlayContent<'_>);

    fn close_overlay(&mut self);

    fn is_overlay_open(&self) -> bool;

    /// Identifier recorded on the card at `position` (0-based)
    fn card_id(&self, position: usize) -> Option<&str>;
}
