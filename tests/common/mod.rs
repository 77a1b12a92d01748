#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use recipe_finder::{RecipeApi, RecipeDetail, RecipeError, RecipeSummary, SearchQuery};
use serde_json::json;
use tokio::sync::Notify;

/// A request the fake API received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    Search(String),
    Random,
    Lookup(String),
}

/// Holds a request open until the test releases it
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// Scripted `RecipeApi`: unscripted requests fail with a 500 status
#[derive(Default)]
pub struct FakeApi {
    searches: HashMap<String, Vec<RecipeSummary>>,
    random: Option<Vec<RecipeSummary>>,
    details: HashMap<String, Vec<RecipeDetail>>,
    gates: HashMap<Call, Arc<Gate>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, results: Vec<RecipeSummary>) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    pub fn with_random(mut self, results: Vec<RecipeSummary>) -> Self {
        self.random = Some(results);
        self
    }

    pub fn with_detail(mut self, id: &str, results: Vec<RecipeDetail>) -> Self {
        self.details.insert(id.to_string(), results);
        self
    }

    /// Hold `call` until the returned gate is released
    pub fn gated(mut self, call: Call) -> (Self, Arc<Gate>) {
        let gate = Arc::new(Gate::default());
        self.gates.insert(call, gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call.clone());
        if let Some(gate) = self.gates.get(&call) {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
    }
}

fn server_error(endpoint: &str) -> RecipeError {
    RecipeError::Status {
        status: 500,
        url: format!("http://fake/{}", endpoint),
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.record(Call::Search(query.as_str().to_string())).await;
        self.searches
            .get(query.as_str())
            .cloned()
            .ok_or_else(|| server_error("search.php"))
    }

    async fn random(&self) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.record(Call::Random).await;
        self.random.clone().ok_or_else(|| server_error("random.php"))
    }

    async fn lookup(&self, id: &str) -> Result<Vec<RecipeDetail>, RecipeError> {
        self.record(Call::Lookup(id.to_string())).await;
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| server_error("lookup.php"))
    }
}

pub fn summary(id: &str, name: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
    }
}

pub fn detail(id: &str, name: &str) -> RecipeDetail {
    serde_json::from_value(json!({
        "idMeal": id,
        "strMeal": name,
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
        "strCategory": "Chicken",
        "strArea": "Japanese",
        "strInstructions": "Preheat oven to 350F.\r\nBake for 30 minutes.",
        "strIngredient1": "soy sauce",
        "strMeasure1": "3/4 cup",
        "strIngredient2": "water",
        "strMeasure2": "1/2 cup",
        "strIngredient3": ""
    }))
    .unwrap()
}
