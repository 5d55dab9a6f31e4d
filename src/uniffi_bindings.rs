//! UniFFI bindings for recipe-corner
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.

use std::fmt;
use std::time::Duration;

use crate::{Recipe, RecipeIngredient, SearchError};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible ingredient line
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipeIngredient {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub amount: f64,
    pub unit: String,
    pub original: Option<String>,
}

/// FFI-compatible recipe structure
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub id: u64,
    /// Recipe title (empty string if none)
    pub title: String,
    pub image: Option<String>,
    pub ready_in_minutes: u32,
    pub servings: u32,
    /// Raw instructions as delivered, possibly with markup
    pub instructions: Option<String>,
    pub ingredients: Vec<FfiRecipeIngredient>,
}

impl From<RecipeIngredient> for FfiRecipeIngredient {
    fn from(ingredient: RecipeIngredient) -> Self {
        FfiRecipeIngredient {
            id: ingredient.id,
            name: ingredient.name,
            amount: ingredient.amount,
            unit: ingredient.unit,
            original: ingredient.original,
        }
    }
}

impl From<FfiRecipeIngredient> for RecipeIngredient {
    fn from(ffi: FfiRecipeIngredient) -> Self {
        RecipeIngredient {
            id: ffi.id,
            name: ffi.name,
            amount: ffi.amount,
            unit: ffi.unit,
            original: ffi.original,
        }
    }
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            id: recipe.id,
            title: recipe.title.unwrap_or_default(),
            image: recipe.image,
            ready_in_minutes: recipe.ready_in_minutes,
            servings: recipe.servings,
            instructions: recipe.instructions,
            ingredients: recipe.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<FfiRecipe> for Recipe {
    fn from(ffi: FfiRecipe) -> Self {
        Recipe {
            id: ffi.id,
            title: if ffi.title.is_empty() {
                None
            } else {
                Some(ffi.title)
            },
            image: ffi.image,
            ready_in_minutes: ffi.ready_in_minutes,
            servings: ffi.servings,
            instructions: ffi.instructions,
            ingredients: ffi.ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiSearchError {
    /// No ingredients were supplied; message is suitable for display
    NoIngredients { message: String },
    /// Network or API failure
    FetchError { message: String },
    /// Requested recipe does not exist
    NotFound { message: String },
    /// Configuration or provider setup error
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiSearchError::NoIngredients { message } => write!(f, "{}", message),
            FfiSearchError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiSearchError::NotFound { message } => write!(f, "Not found: {}", message),
            FfiSearchError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiSearchError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiSearchError {}

impl From<SearchError> for FfiSearchError {
    fn from(err: SearchError) -> Self {
        let message = err.to_string();
        match err {
            SearchError::NoIngredients => FfiSearchError::NoIngredients { message },
            SearchError::FetchError(_)
            | SearchError::Api { .. }
            | SearchError::AllProvidersFailed(_) => FfiSearchError::FetchError { message },
            SearchError::RecipeNotFound(_) => FfiSearchError::NotFound { message },
            SearchError::MissingApiKey
            | SearchError::UnknownProvider(_)
            | SearchError::ProviderDisabled(_)
            | SearchError::ConfigError(_) => FfiSearchError::ConfigError { message },
        }
    }
}

/// Configuration for a search
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiSearchConfig {
    /// Optional API key (uses config file or environment if not specified)
    pub api_key: Option<String>,
    /// Optional API base URL
    pub base_url: Option<String>,
    /// Optional timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// If true, only the built-in catalog is searched
    pub offline: bool,
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiSearchError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiSearchError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

fn configure(config: Option<FfiSearchConfig>) -> crate::RecipeFinderBuilder {
    let config = config.unwrap_or_default();
    let mut builder = crate::RecipeFinder::builder();

    if let Some(api_key) = config.api_key {
        builder = builder.api_key(api_key);
    }

    if let Some(base_url) = config.base_url {
        builder = builder.base_url(base_url);
    }

    if let Some(timeout_secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    if config.offline {
        builder = builder.offline();
    }

    builder
}

/// Search for recipes matching the given ingredients
///
/// # Returns
/// At most three recipes, best match first. An empty list means nothing matched.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn find_recipes(
    ingredients: Vec<String>,
    config: Option<FfiSearchConfig>,
) -> Result<Vec<FfiRecipe>, FfiSearchError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let ranked = configure(config).ingredients(ingredients).build().await?;
        Ok(ranked.recipes.into_iter().map(Into::into).collect())
    })
}

/// Fetch the full details of one recipe
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_recipe_information(
    id: u64,
    config: Option<FfiSearchConfig>,
) -> Result<FfiRecipe, FfiSearchError> {
    let rt = create_runtime()?;
    rt.block_on(async {
        let recipe = configure(config).recipe_information(id).await?;
        Ok(recipe.into())
    })
}

/// Rank an already fetched catalog without any I/O
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn rank_recipes(ingredients: Vec<String>, catalog: Vec<FfiRecipe>) -> Vec<FfiRecipe> {
    let catalog: Vec<Recipe> = catalog.into_iter().map(Into::into).collect();
    crate::rank(&ingredients, &catalog)
        .into_iter()
        .cloned()
        .map(Into::into)
        .collect()
}

/// Instructions with list and paragraph markup removed, ready to display
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn clean_recipe_instructions(instructions: Option<String>) -> String {
    crate::clean_instructions(instructions.as_deref())
}

/// The built-in recipes used when the API is unavailable
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn fallback_catalog() -> Vec<FfiRecipe> {
    crate::fallback_catalog().into_iter().map(Into::into).collect()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check whether an API key is available from configuration or environment
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn is_api_key_available() -> bool {
    if std::env::var("SPOONACULAR_API_KEY").is_ok() {
        return true;
    }
    crate::AppConfig::load()
        .map(|config| config.api.api_key.is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_recipe_conversion() {
        let recipe = crate::fallback_catalog().remove(0);

        let ffi_recipe: FfiRecipe = recipe.clone().into();
        assert_eq!(ffi_recipe.title, "Chocolate Chip Cookies");
        assert_eq!(ffi_recipe.ingredients.len(), 7);

        let back: Recipe = ffi_recipe.into();
        assert_eq!(back, recipe);
    }

    #[test]
    fn test_empty_title_becomes_none() {
        let ffi = FfiRecipe {
            id: 3,
            title: String::new(),
            image: None,
            ready_in_minutes: 10,
            servings: 2,
            instructions: None,
            ingredients: Vec::new(),
        };

        let recipe: Recipe = ffi.into();
        assert!(recipe.title.is_none());
    }

    #[test]
    fn test_rank_recipes() {
        let ranked = rank_recipes(vec!["butter".to_string()], fallback_catalog());
        let ids: Vec<u64> = ranked.iter().map(|r| r.id).collect();

        assert_eq!(ids, vec![1, 10, 2]);
    }

    #[test]
    fn test_find_recipes_offline() {
        let config = FfiSearchConfig {
            offline: true,
            ..Default::default()
        };

        let recipes = find_recipes(vec!["lemon zest".to_string()], Some(config)).unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title, "Lemon Bars");
    }

    #[test]
    fn test_find_recipes_without_ingredients() {
        let config = FfiSearchConfig {
            offline: true,
            ..Default::default()
        };

        match find_recipes(Vec::new(), Some(config)) {
            Err(FfiSearchError::NoIngredients { message }) => {
                assert_eq!(message, "Please add at least one ingredient");
            }
            other => panic!("Expected NoIngredients, got {:?}", other),
        }
    }

    #[test]
    fn test_error_mapping() {
        let err: FfiSearchError = SearchError::RecipeNotFound(5).into();
        assert!(matches!(err, FfiSearchError::NotFound { .. }));

        let err: FfiSearchError = SearchError::MissingApiKey.into();
        assert!(matches!(err, FfiSearchError::ConfigError { .. }));
    }

    #[test]
    fn test_clean_recipe_instructions() {
        assert_eq!(
            clean_recipe_instructions(Some("<p>Mix.</p><p>Bake.</p>".to_string())),
            "Mix.\nBake."
        );
        assert_eq!(clean_recipe_instructions(None), "No instructions available");
    }

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
