use crate::config::AppConfig;
use crate::error::SearchError;
use crate::model::Recipe;
use crate::providers::{ProviderFactory, RecipeProvider};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Tries providers in configured order until one answers
pub struct FallbackProvider {
    providers: Vec<Box<dyn RecipeProvider>>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl FallbackProvider {
    /// Create a new fallback provider from configuration
    pub fn new(config: &AppConfig) -> Result<Self, SearchError> {
        if !config.fallback.enabled {
            // If fallback is disabled, just use the default provider
            let default_provider = ProviderFactory::get_default_provider(config)?;
            return Ok(FallbackProvider {
                providers: vec![default_provider],
                retry_attempts: 1,
                retry_delay_ms: 0,
            });
        }

        let mut providers = Vec::new();

        for provider_name in &config.fallback.order {
            match ProviderFactory::create(provider_name, config) {
                Ok(provider) => {
                    info!("Added '{}' to fallback chain", provider_name);
                    providers.push(provider);
                }
                Err(e) => {
                    warn!("Skipping provider '{}': {}", provider_name, e);
                }
            }
        }

        if providers.is_empty() {
            return Err(SearchError::AllProvidersFailed(
                "No providers available in fallback configuration".to_string(),
            ));
        }

        Ok(FallbackProvider {
            providers,
            retry_attempts: config.fallback.retry_attempts.max(1),
            retry_delay_ms: config.fallback.retry_delay_ms,
        })
    }

    /// Build a chain from already constructed providers
    pub fn from_providers(
        providers: Vec<Box<dyn RecipeProvider>>,
        retry_attempts: u32,
        retry_delay_ms: u64,
    ) -> Self {
        FallbackProvider {
            providers,
            retry_attempts: retry_attempts.max(1),
            retry_delay_ms,
        }
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.provider_name()).collect()
    }

    /// Run `operation` against one provider, retrying with linear backoff
    async fn try_provider_with_retry<T, F, Fut>(
        &self,
        provider: &dyn RecipeProvider,
        operation: F,
    ) -> Result<T, SearchError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, SearchError>>,
    {
        let mut attempt = 1;
        loop {
            debug!(
                "Querying {} (attempt {}/{})",
                provider.provider_name(),
                attempt,
                self.retry_attempts
            );

            match operation().await {
                Ok(result) => {
                    info!("Recipes served by {}", provider.provider_name());
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        "Provider {} failed (attempt {}/{}): {}",
                        provider.provider_name(),
                        attempt,
                        self.retry_attempts,
                        e
                    );
                    if attempt >= self.retry_attempts {
                        return Err(e);
                    }
                }
            }

            let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
            debug!("Waiting {:?} before retry", delay);
            sleep(delay).await;
            attempt += 1;
        }
    }
}

#[async_trait]
impl RecipeProvider for FallbackProvider {
    fn provider_name(&self) -> &str {
        "fallback"
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<Recipe>, SearchError> {
        let mut all_errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match self
                .try_provider_with_retry(provider.as_ref(), || {
                    provider.find_by_ingredients(ingredients)
                })
                .await
            {
                Ok(recipes) => return Ok(recipes),
                Err(e) => all_errors.push(format!("{}: {}", provider.provider_name(), e)),
            }
        }

        Err(SearchError::AllProvidersFailed(all_errors.join("\n")))
    }

    async fn recipe_information(&self, id: u64) -> Result<Recipe, SearchError> {
        let mut all_errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match self
                .try_provider_with_retry(provider.as_ref(), || provider.recipe_information(id))
                .await
            {
                Ok(recipe) => return Ok(recipe),
                Err(e) => all_errors.push(format!("{}: {}", provider.provider_name(), e)),
            }
        }

        Err(SearchError::AllProvidersFailed(all_errors.join("\n")))
    }
}
