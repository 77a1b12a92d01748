mod mealdb;

pub use mealdb::MealDbClient;

use std::fmt;

use async_trait::async_trait;

use crate::model::{RecipeDetail, RecipeSummary, SearchQuery};
use crate::RecipeError;

/// The three lookups the recipe service offers
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Look up recipes by name
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// Fetch a random recipe (normally a single entry)
    async fn random(&self) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// Look up a full recipe by identifier (zero or one entry)
    async fn lookup(&self, id: &str) -> Result<Vec<RecipeDetail>, RecipeError>;
}

/// Endpoint templates, relative to the configured base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Random,
    Lookup,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "search.php",
            Endpoint::Random => "random.php",
            Endpoint::Lookup => "lookup.php",
        }
    }

    /// Name of the single query parameter the endpoint takes
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Endpoint::Search => Some("s"),
            Endpoint::Random => None,
            Endpoint::Lookup => Some("i"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
