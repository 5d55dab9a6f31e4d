use thiserror::Error;

/// Errors that can occur while searching for recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// The search was requested with an empty ingredient list
    #[error("Please add at least one ingredient")]
    NoIngredients,

    /// Failed to reach the recipe API or decode its response
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with a non-success status
    #[error("Recipe API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// No recipe exists with the requested identifier
    #[error("Recipe {0} not found")]
    RecipeNotFound(u64),

    /// No API key in configuration or environment
    #[error("SPOONACULAR_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Provider name is not one the factory knows
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Provider is known but switched off in configuration
    #[error("Provider '{0}' is not enabled in configuration")]
    ProviderDisabled(String),

    /// Every provider in the fallback chain failed
    #[error("All providers failed:\n{0}")]
    AllProvidersFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
