use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{debug, error, warn};

use crate::api::RecipeApi;
use crate::model::{RecipeSummary, SearchQuery};
use crate::render;
use crate::view::{GridTarget, OverlayContent, OverlayTarget, View};

/// Drives searches, random picks and the detail overlay against an injected view.
///
/// Handlers take `&self` and never hold the view lock across a request, so
/// several actions may be in flight at once. Each view region (results and
/// overlay) has a request token; a response that arrives after a newer
/// request for the same region was issued is dropped.
pub struct RecipeClient<A, V> {
    api: A,
    view: Mutex<V>,
    results_token: AtomicU64,
    overlay_token: AtomicU64,
}

impl<A: RecipeApi, V: View> RecipeClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        RecipeClient {
            api,
            view: Mutex::new(view),
            results_token: AtomicU64::new(0),
            overlay_token: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Read the current view state
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        f(&view)
    }

    pub fn into_view(self) -> V {
        self.view.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        let mut view = self.view.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut view)
    }

    /// Handle a search form submission with the raw input text
    pub async fn submit_search(&self, raw: &str) {
        match SearchQuery::parse(raw) {
            Ok(query) => self.search(&query).await,
            Err(e) => {
                debug!("Rejected search input {:?}: {}", raw, e);
                // Any search or random still in flight is now stale
                self.results_token.fetch_add(1, Ordering::SeqCst);
                self.update(|view| {
                    view.clear_results();
                    view.show_message(render::EMPTY_QUERY, true);
                });
            }
        }
    }

    pub async fn search(&self, query: &SearchQuery) {
        let token = self.begin_results_request();
        let result = self.api.search(query).await;
        if !is_current(&self.results_token, token) {
            debug!("Dropping stale search response for {:?}", query.as_str());
            return;
        }

        self.update(|view| match result {
            Ok(recipes) if recipes.is_empty() => {
                view.show_message(&render::not_found(query), false);
            }
            Ok(recipes) => render_cards(view, &recipes),
            Err(e) => {
                warn!("Search for {:?} failed: {}", query.as_str(), e);
                view.show_message(render::SEARCH_FAILED, true);
            }
        });
    }

    pub async fn random(&self) {
        let token = self.begin_results_request();
        let result = self.api.random().await;
        if !is_current(&self.results_token, token) {
            debug!("Dropping stale random recipe response");
            return;
        }

        self.update(|view| match result {
            Ok(recipes) if recipes.is_empty() => {
                view.show_message(render::RANDOM_EMPTY, true);
            }
            Ok(recipes) => render_cards(view, &recipes),
            Err(e) => {
                warn!("Random recipe request failed: {}", e);
                view.show_message(render::RANDOM_FAILED, true);
            }
        });
    }

    /// Handle a click delegated from the result grid
    pub async fn on_grid_click(&self, target: GridTarget<'_>) {
        if let GridTarget::Card { id } = target {
            debug!("Recipe ID: {}", id);
            self.show_details(id).await;
        }
    }

    /// Open the overlay on a loading placeholder, then fill it with the recipe
    pub async fn show_details(&self, id: &str) {
        let token = self.overlay_token.fetch_add(1, Ordering::SeqCst) + 1;
        self.update(|view| {
            view.open_overlay();
            view.set_overlay_content(OverlayContent::Loading);
        });

        let result = self.api.lookup(id).await;
        if !is_current(&self.overlay_token, token) {
            debug!("Dropping stale detail response for {}", id);
            return;
        }

        self.update(|view| match result {
            Ok(recipes) => match recipes.first() {
                Some(recipe) => view.set_overlay_content(OverlayContent::Detail(recipe)),
                None => view.set_overlay_content(OverlayContent::Error(render::DETAIL_EMPTY)),
            },
            Err(e) => {
                error!("Error fetching recipe details for {}: {}", id, e);
                view.set_overlay_content(OverlayContent::Error(render::DETAIL_FAILED));
            }
        });
    }

    pub fn on_overlay_click(&self, target: OverlayTarget) {
        match target {
            OverlayTarget::CloseButton | OverlayTarget::Backdrop => self.close_overlay(),
            OverlayTarget::Content => {}
        }
    }

    /// Hide the overlay; a detail lookup still in flight is abandoned
    pub fn close_overlay(&self) {
        self.overlay_token.fetch_add(1, Ordering::SeqCst);
        self.update(|view| view.close_overlay());
    }

    fn begin_results_request(&self) -> u64 {
        let token = self.results_token.fetch_add(1, Ordering::SeqCst) + 1;
        self.update(|view| {
            view.clear_results();
            view.clear_message();
        });
        token
    }
}

fn is_current(counter: &AtomicU64, token: u64) -> bool {
    counter.load(Ordering::SeqCst) == token
}

/// Render one card per recipe in the order given
pub fn render_cards<V: View + ?Sized>(view: &mut V, recipes: &[RecipeSummary]) {
    if recipes.is_empty() {
        view.show_message(render::NO_RECIPES, false);
        return;
    }

    for recipe in recipes {
        view.append_card(recipe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{HtmlView, ResultsState};

    #[test]
    fn test_render_cards_empty_list() {
        let mut view = HtmlView::new();
        render_cards(&mut view, &[]);

        assert!(view.cards().is_empty());
        assert_eq!(view.message().unwrap().text, "No recipes found");
    }

    #[test]
    fn test_render_cards_keeps_order_and_duplicates() {
        let mut view = HtmlView::new();
        let recipe = |id: &str| RecipeSummary {
            id: id.to_string(),
            name: id.to_string(),
            thumbnail: String::new(),
        };
        render_cards(&mut view, &[recipe("b"), recipe("a"), recipe("b")]);

        let ids: Vec<&str> = view.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "b"]);
        assert!(matches!(view.results_state(), ResultsState::Results(_)));
    }
}
