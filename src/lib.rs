//! Find baking recipes that match the ingredients you already have.
//!
//! Recipes come from the Spoonacular API, with a built-in catalog used when
//! the API cannot be reached. Whatever the source, the catalog is ranked the
//! same way by [`rank`].
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), recipe_corner::SearchError> {
//! let ranked = recipe_corner::find_recipes(&["butter", "eggs"]).await?;
//! for recipe in &ranked.recipes {
//!     println!("{} ({} min)", recipe.display_title(), recipe.ready_in_minutes);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod providers;
pub mod ranking;
pub mod uniffi_bindings;

pub use builder::{CatalogSource, RecipeFinder, RecipeFinderBuilder};
pub use config::AppConfig;
pub use error::SearchError;
pub use ingredients::IngredientList;
pub use model::{clean_instructions, RankedRecipeList, Recipe, RecipeIngredient, RecipeSummary};
pub use providers::{fallback_catalog, RecipeProvider};
pub use ranking::{rank, MAX_RANKED_RESULTS};

/// Search with the configured providers (config.toml and environment)
pub async fn find_recipes<S: AsRef<str>>(ingredients: &[S]) -> Result<RankedRecipeList, SearchError> {
    RecipeFinder::builder()
        .ingredients(ingredients)
        .build()
        .await
}

/// Search the built-in catalog only
pub async fn find_recipes_offline<S: AsRef<str>>(
    ingredients: &[S],
) -> Result<RankedRecipeList, SearchError> {
    RecipeFinder::builder()
        .ingredients(ingredients)
        .offline()
        .build()
        .await
}

/// Fetch one recipe's details with the configured providers
pub async fn find_recipe_information(id: u64) -> Result<Recipe, SearchError> {
    RecipeFinder::builder().recipe_information(id).await
}
