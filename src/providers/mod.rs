mod factory;
mod fallback;
mod local;
mod spoonacular;

pub use factory::ProviderFactory;
pub use fallback::FallbackProvider;
pub use local::{fallback_catalog, LocalCatalogProvider};
pub use spoonacular::SpoonacularProvider;

use crate::error::SearchError;
use crate::model::Recipe;
use async_trait::async_trait;

/// Source of recipes: a catalog search plus a per-recipe detail lookup
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular", "local")
    fn provider_name(&self) -> &str;

    /// Fetch fully materialized recipes that use any of `ingredients`
    async fn find_by_ingredients(&self, ingredients: &[String])
        -> Result<Vec<Recipe>, SearchError>;

    /// Fetch the full details of one recipe
    async fn recipe_information(&self, id: u64) -> Result<Recipe, SearchError>;
}
