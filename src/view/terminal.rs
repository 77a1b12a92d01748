use std::io::{self, Write};

use log::warn;

use super::{OverlayContent, View};
use crate::model::RecipeSummary;
use crate::render::{self, text};

/// Line-oriented view that prints every change to a writer
pub struct TerminalView<W: Write> {
    out: W,
    card_ids: Vec<String>,
    overlay_open: bool,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        TerminalView {
            out,
            card_ids: Vec::new(),
            overlay_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn clear_results(&mut self) {
        self.card_ids.clear();
    }

    fn append_card(&mut self, recipe: &RecipeSummary) {
        self.card_ids.push(recipe.id.clone());
        let line = text::card(self.card_ids.len(), recipe);
        self.emit(&line);
    }

    fn show_message(&mut self, text: &str, is_error: bool) {
        let line = if is_error {
            format!("error: {}", text)
        } else {
            text.to_string()
        };
        self.emit(&line);
    }

    // Printed lines can't be taken back.
    fn clear_message(&mut self) {}

    fn open_overlay(&mut self) {
        self.overlay_open = true;
    }

    fn set_overlay_content(&mut self, content: OverlayContent<'_>) {
        let block = match content {
            OverlayContent::Loading => render::DETAIL_LOADING.to_string(),
            OverlayContent::Detail(recipe) => format!("\n{}\n", text::detail(recipe)),
            OverlayContent::Error(message) => format!("error: {}", message),
        };
        self.emit(&block);
    }

    fn close_overlay(&mut self) {
        if self.overlay_open {
            self.overlay_open = false;
            self.emit("(recipe closed)");
        }
    }

    fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    fn card_id(&self, position: usize) -> Option<&str> {
        self.card_ids.get(position).map(String::as_str)
    }
}
