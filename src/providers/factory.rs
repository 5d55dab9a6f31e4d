use crate::config::AppConfig;
use crate::error::SearchError;
use crate::providers::{LocalCatalogProvider, RecipeProvider, SpoonacularProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &AppConfig,
    ) -> Result<Box<dyn RecipeProvider>, SearchError> {
        match provider_name {
            "spoonacular" => {
                if !config.api.enabled {
                    return Err(SearchError::ProviderDisabled(provider_name.to_string()));
                }
                Ok(Box::new(SpoonacularProvider::new(&config.api)?))
            }
            "local" => Ok(Box::new(LocalCatalogProvider::new())),
            _ => Err(SearchError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Get the default provider from configuration
    pub fn get_default_provider(
        config: &AppConfig,
    ) -> Result<Box<dyn RecipeProvider>, SearchError> {
        Self::create(&config.default_provider, config)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["spoonacular", "local"]
    }
}
