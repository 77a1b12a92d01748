//! # recipe-finder
//!
//! A client for [TheMealDB](https://www.themealdb.com): search recipes by
//! name, pick a random one, and open full details (ingredients, measures,
//! category, area, instructions) in an overlay.
//!
//! [`RecipeClient`] orchestrates everything against an injected [`View`].
//! [`HtmlView`] keeps the page in memory and renders it to HTML;
//! [`TerminalView`] prints to a terminal.
//!
//! ```no_run
//! # use recipe_finder::{ClientConfig, HtmlView, MealDbClient, RecipeClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = MealDbClient::new(&ClientConfig::load()?)?;
//! let client = RecipeClient::new(api, HtmlView::new());
//! client.submit_search("chicken").await;
//! println!("{}", client.with_view(|view| view.document()));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

pub use api::{Endpoint, MealDbClient, RecipeApi};
pub use client::{render_cards, RecipeClient};
pub use config::ClientConfig;
pub use error::RecipeError;
pub use model::{Ingredient, MealsEnvelope, RecipeDetail, RecipeSummary, SearchQuery};
pub use view::{
    GridTarget, HtmlView, Message, OverlayBody, OverlayContent, OverlayTarget, ResultsState,
    TerminalView, View,
};

fn default_client() -> Result<MealDbClient, RecipeError> {
    MealDbClient::new(&ClientConfig::load()?)
}

/// Search recipes by name using the loaded configuration
pub async fn search_recipes(term: &str) -> Result<Vec<RecipeSummary>, RecipeError> {
    let query = SearchQuery::parse(term)?;
    default_client()?.search(&query).await
}

/// Fetch one random recipe using the loaded configuration
pub async fn random_recipe() -> Result<Option<RecipeSummary>, RecipeError> {
    Ok(default_client()?.random().await?.into_iter().next())
}

/// Look up a full recipe by identifier using the loaded configuration
pub async fn lookup_recipe(id: &str) -> Result<Option<RecipeDetail>, RecipeError> {
    Ok(default_client()?.lookup(id).await?.into_iter().next())
}
