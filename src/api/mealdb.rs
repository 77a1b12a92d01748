use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{Endpoint, RecipeApi};
use crate::config::ClientConfig;
use crate::model::{MealsEnvelope, RecipeDetail, RecipeSummary, SearchQuery};
use crate::RecipeError;

/// HTTP client for TheMealDB
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RecipeError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(MealDbClient {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        arg: Option<&str>,
    ) -> Result<Vec<T>, RecipeError> {
        let url = self.endpoint_url(endpoint);
        let mut request = self.client.get(&url);
        if let (Some(name), Some(value)) = (endpoint.param(), arg) {
            request = request.query(&[(name, value)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}", endpoint, status);
            return Err(RecipeError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_str(&body)?;
        let meals = envelope.into_meals();
        debug!("{} returned {} record(s)", endpoint, meals.len());
        Ok(meals)
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.fetch(Endpoint::Search, Some(query.as_str())).await
    }

    async fn random(&self) -> Result<Vec<RecipeSummary>, RecipeError> {
        self.fetch(Endpoint::Random, None).await
    }

    async fn lookup(&self, id: &str) -> Result<Vec<RecipeDetail>, RecipeError> {
        self.fetch(Endpoint::Lookup, Some(id)).await
    }
}
