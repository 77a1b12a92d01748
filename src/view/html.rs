use html_escape::encode_text;

use super::{OverlayContent, View};
use crate::model::{RecipeDetail, RecipeSummary};
use crate::render::html as markup;

/// Text currently shown in the message area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

/// Content of the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayBody {
    Loading,
    Detail(RecipeDetail),
    Error(String),
}

/// State of the grid and message area, which change together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsState<'a> {
    Empty,
    Results(&'a [RecipeSummary]),
    Message(&'a Message),
}

/// In-memory page: the grid, message area and overlay of the search page,
/// rendered to HTML on demand.
#[derive(Debug, Default)]
pub struct HtmlView {
    cards: Vec<RecipeSummary>,
    message: Option<Message>,
    overlay_open: bool,
    overlay_body: Option<OverlayBody>,
    scroll_locked: bool,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[RecipeSummary] {
        &self.cards
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Overlay content, or `None` while the overlay is hidden
    pub fn overlay(&self) -> Option<&OverlayBody> {
        if self.overlay_open {
            self.overlay_body.as_ref()
        } else {
            None
        }
    }

    pub fn background_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn results_state(&self) -> ResultsState<'_> {
        match (&self.message, self.cards.is_empty()) {
            (Some(message), _) => ResultsState::Message(message),
            (None, false) => ResultsState::Results(&self.cards),
            (None, true) => ResultsState::Empty,
        }
    }

    pub fn grid_html(&self) -> String {
        let cards: String = self.cards.iter().map(markup::card).collect();
        format!(r#"<div id="result-grid" class="result-grid">{}</div>"#, cards)
    }

    pub fn message_html(&self) -> String {
        match &self.message {
            Some(Message { text, is_error }) => format!(
                r#"<div id="message-area" class="{}">{}</div>"#,
                if *is_error { "message error" } else { "message" },
                encode_text(text)
            ),
            None => r#"<div id="message-area" class="message"></div>"#.to_string(),
        }
    }

    pub fn overlay_html(&self) -> String {
        let body = match &self.overlay_body {
            Some(OverlayBody::Loading) => markup::loading(),
            Some(OverlayBody::Detail(recipe)) => markup::detail(recipe),
            Some(OverlayBody::Error(message)) => markup::inline_error(message),
            None => String::new(),
        };
        let (class, display) = if self.overlay_open {
            ("modal", "block")
        } else {
            ("modal hidden", "none")
        };

        format!(
            r#"<div id="recipe-modal" class="{class}" style="display: {display}"><div class="modal-content"><button id="close-button" class="close-button">&times;</button><div id="recipe-details-content">{body}</div></div></div>"#
        )
    }

    /// The whole page as a standalone HTML document
    pub fn document(&self) -> String {
        let body_style = if self.scroll_locked {
            r#" style="overflow: hidden""#
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Recipe Finder</title>
</head>
<body{body_style}>
<form id="search-form"><input id="search-input" type="text" placeholder="Search recipes..."><button type="submit">Search</button></form>
<button id="select-button">Random recipe</button>
{message}
{grid}
{overlay}
</body>
</html>
"#,
            message = self.message_html(),
            grid = self.grid_html(),
            overlay = self.overlay_html(),
        )
    }
}

impl View for HtmlView {
    fn clear_results(&mut self) {
        self.cards.clear();
    }

    fn append_card(&mut self, recipe: &RecipeSummary) {
        self.cards.push(recipe.clone());
    }

    fn show_message(&mut self, text: &str, is_error: bool) {
        self.message = Some(Message {
            text: text.to_string(),
            is_error,
        });
    }

    fn clear_message(&mut self) {
        self.message = None;
    }

    fn open_overlay(&mut self) {
        self.overlay_open = true;
        self.scroll_locked = true;
    }

    fn set_overlay_content(&mut self, content: OverlayContent<'_>) {
        self.overlay_body = Some(match content {
            OverlayContent::Loading => OverlayBody::Loading,
            OverlayContent::Detail(recipe) => OverlayBody::Detail(recipe.clone()),
            OverlayContent::Error(message) => OverlayBody::Error(message.to_string()),
        });
    }

    fn close_overlay(&mut self) {
        self.overlay_open = false;
        self.scroll_locked = false;
    }

    fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    fn card_id(&self, position: usize) -> Option<&str> {
        self.cards.get(position).map(|card| card.id.as_str())
    }
}
