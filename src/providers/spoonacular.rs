use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::model::{Recipe, RecipeSummary};
use crate::providers::RecipeProvider;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct SpoonacularProvider {
    client: Client,
    api_key: String,
    base_url: String,
    number: u32,
    ranking: u32,
    ignore_pantry: bool,
}

impl SpoonacularProvider {
    /// Create a new Spoonacular provider from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, SearchError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or(SearchError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(SpoonacularProvider {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            number: config.number,
            ranking: config.ranking,
            ignore_pantry: config.ignore_pantry,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let defaults = ApiConfig::default();
        SpoonacularProvider {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            number: defaults.number,
            ranking: defaults.ranking,
            ignore_pantry: defaults.ignore_pantry,
        }
    }

    /// Query the find-by-ingredients endpoint
    pub async fn search_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        let query = [
            ("ingredients", ingredients.join(",")),
            ("number", self.number.to_string()),
            ("ranking", self.ranking.to_string()),
            ("ignorePantry", self.ignore_pantry.to_string()),
        ];

        self.get_json("/recipes/findByIngredients", &query).await
    }

    /// Query the recipe information endpoint for one recipe
    pub async fn fetch_information(&self, id: u64) -> Result<Recipe, SearchError> {
        match self
            .get_json(&format!("/recipes/{}/information", id), &[])
            .await
        {
            Err(SearchError::Api { status: 404, .. }) => Err(SearchError::RecipeNotFound(id)),
            other => other,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SearchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message: error_message(status, &message),
            });
        }

        Ok(response.json().await?)
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    // Spoonacular error bodies look like {"status": "failure", "code": 402, "message": "..."}
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

#[async_trait]
impl RecipeProvider for SpoonacularProvider {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<Recipe>, SearchError> {
        let summaries = self.search_by_ingredients(ingredients).await?;
        info!("Received {} recipes from API", summaries.len());

        // Details are fetched one at a time; a failed lookup degrades to the summary
        let mut recipes = Vec::with_capacity(summaries.len());
        for summary in summaries {
            match self.fetch_information(summary.id).await {
                Ok(recipe) => {
                    debug!("Added full recipe {}: {}", recipe.id, recipe.display_title());
                    recipes.push(recipe);
                }
                Err(e) => {
                    warn!("Error getting full recipe {}: {}", summary.id, e);
                    recipes.push(summary.into_partial_recipe());
                }
            }
        }

        Ok(recipes)
    }

    async fn recipe_information(&self, id: u64) -> Result<Recipe, SearchError> {
        self.fetch_information(id).await
    }
}
