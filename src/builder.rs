use std::time::Duration;

use log::{debug, info};

use crate::config::AppConfig;
use crate::providers::{FallbackProvider, LocalCatalogProvider, RecipeProvider};
use crate::{IngredientList, RankedRecipeList, Recipe, SearchError};

/// Where the recipe catalog comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Configured provider chain (API first, local catalog as fallback by default)
    #[default]
    Configured,
    /// Built-in catalog only, no network
    Local,
}

/// Builder for configuring and running a recipe search
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    ingredients: IngredientList,
    source: CatalogSource,
    config: Option<AppConfig>,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Add one ingredient to search with
    ///
    /// Blank entries and exact duplicates are ignored.
    ///
    /// # Example
    /// ```
    /// use recipe_corner::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredient("butter")
    ///     .ingredient("sugar");
    /// ```
    pub fn ingredient(mut self, ingredient: impl AsRef<str>) -> Self {
        self.ingredients.add(ingredient.as_ref());
        self
    }

    /// Add several ingredients at once
    ///
    /// # Example
    /// ```
    /// use recipe_corner::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder().ingredients(["butter", "eggs", "flour"]);
    /// ```
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ingredients.extend(ingredients);
        self
    }

    /// Search the built-in catalog only, without calling the recipe API
    pub fn offline(mut self) -> Self {
        self.source = CatalogSource::Local;
        self
    }

    /// Use this configuration instead of loading config.toml and the environment
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the Spoonacular API key
    ///
    /// # Example
    /// ```
    /// use recipe_corner::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredient("butter")
    ///     .api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the API provider at a different host
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_corner::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredient("butter")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Fetch the catalog and rank it against the ingredients
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No ingredients were added
    /// - Configuration cannot be loaded
    /// - No provider could deliver a catalog
    ///
    /// An empty result is not an error: it means nothing matched.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_corner::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let ranked = RecipeFinder::builder()
    ///     .ingredients(["butter", "sugar"])
    ///     .build()
    ///     .await?;
    /// for recipe in &ranked.recipes {
    ///     println!("{}", recipe.display_title());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<RankedRecipeList, SearchError> {
        if self.ingredients.is_empty() {
            return Err(SearchError::NoIngredients);
        }

        let provider = self.provider()?;
        info!(
            "Searching {} for {:?}",
            provider.provider_name(),
            self.ingredients.as_slice()
        );

        let catalog = provider
            .find_by_ingredients(self.ingredients.as_slice())
            .await?;
        let ranked = RankedRecipeList::rank(self.ingredients.as_slice(), &catalog);

        debug!(
            "Ranked {} of {} catalog recipes",
            ranked.len(),
            catalog.len()
        );
        Ok(ranked)
    }

    /// Fetch one recipe through the same provider selection as [`build`](Self::build)
    pub async fn recipe_information(self, id: u64) -> Result<Recipe, SearchError> {
        self.provider()?.recipe_information(id).await
    }

    fn provider(&self) -> Result<Box<dyn RecipeProvider>, SearchError> {
        if self.source == CatalogSource::Local {
            return Ok(Box::new(LocalCatalogProvider::new()));
        }

        let config = self.effective_config()?;
        Ok(Box::new(FallbackProvider::new(&config)?))
    }

    fn effective_config(&self) -> Result<AppConfig, SearchError> {
        let mut config = match &self.config {
            Some(config) => config.clone(),
            None => AppConfig::load()?,
        };

        if let Some(api_key) = &self.api_key {
            config.api.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout = timeout.as_secs().max(1);
        }

        Ok(config)
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use recipe_corner::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }

    /// Fetch one recipe's full details using `config`
    pub async fn recipe_information(id: u64, config: &AppConfig) -> Result<Recipe, SearchError> {
        Self::builder()
            .config(config.clone())
            .recipe_information(id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_without_ingredients() {
        let result = RecipeFinder::builder().offline().build().await;
        assert!(matches!(result, Err(SearchError::NoIngredients)));
    }

    #[tokio::test]
    async fn test_blank_ingredients_count_as_none() {
        let result = RecipeFinder::builder()
            .ingredients(["", "   "])
            .offline()
            .build()
            .await;

        match result {
            Err(e) => assert_eq!(e.to_string(), "Please add at least one ingredient"),
            Ok(_) => panic!("Expected validation error"),
        }
    }

    #[tokio::test]
    async fn test_offline_search() {
        let ranked = RecipeFinder::builder()
            .ingredient("chocolate chips")
            .offline()
            .build()
            .await
            .unwrap();

        assert_eq!(ranked.ingredients, vec!["chocolate chips"]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked.recipes[0].display_title(), "Chocolate Chip Cookies");
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let builder = RecipeFinder::builder()
            .config(AppConfig::default())
            .api_key("abc")
            .base_url("http://localhost:1234")
            .timeout(Duration::from_millis(200));

        let config = builder.effective_config().unwrap();
        assert_eq!(config.api.api_key.as_deref(), Some("abc"));
        assert_eq!(config.api.base_url, "http://localhost:1234");
        assert_eq!(config.api.timeout, 1);
    }
}
