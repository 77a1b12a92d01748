//! User-facing copy and the two output formats (HTML markup and plain text).

pub mod html;
pub mod text;

use crate::model::SearchQuery;

pub const EMPTY_QUERY: &str = "Please enter a search term";
pub const SEARCH_FAILED: &str = "Something went wrong, please try again";
pub const NO_RECIPES: &str = "No recipes found";
pub const RANDOM_EMPTY: &str = "Could not fetch a random recipe. Try again";
pub const RANDOM_FAILED: &str = "Failed to fetch a random recipe. Please check your connection";
pub const DETAIL_LOADING: &str = "Loading recipe details...";
pub const DETAIL_EMPTY: &str = "Could not load recipe";
pub const DETAIL_FAILED: &str = "Failed to load recipe details";
pub const INSTRUCTIONS_FALLBACK: &str = "Instructions not available.";

pub fn not_found(query: &SearchQuery) -> String {
    format!("No recipe found for \"{}\"", query)
}

/// Split free text into lines, accepting both `\n` and `\r\n`
pub(crate) fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
