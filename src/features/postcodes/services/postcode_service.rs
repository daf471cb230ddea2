use std::sync::Arc;

use crate::core::error::Result;
use crate::features::postcodes::models::{PostalRecord, ValidationOutcome};
use crate::features::postcodes::services::matcher;
use crate::features::postcodes::sources::DatasetProvider;

/// Suburb lookups over a freshly loaded dataset.
///
/// Every call reloads the dataset from the provider; no state is kept between
/// requests.
pub struct PostcodeService {
    provider: Arc<dyn DatasetProvider>,
}

impl PostcodeService {
    pub fn new(provider: Arc<dyn DatasetProvider>) -> Self {
        Self { provider }
    }

    /// Records whose suburb contains `query`, ignoring case
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<PostalRecord>> {
        let records = self.load().await?;
        let total = records.len();

        let results = matcher::autocomplete(records, query);
        tracing::debug!(
            "Autocomplete '{}' matched {} of {} records",
            query,
            results.len(),
            total
        );

        Ok(results)
    }

    /// Validate a suburb/area combination, falling back to suggestions
    pub async fn validate(&self, suburb: &str, area: &str) -> Result<ValidationOutcome> {
        let records = self.load().await?;

        let outcome = matcher::validate(records, suburb, area);
        match &outcome {
            ValidationOutcome::ExactMatch { details } => tracing::debug!(
                "Validated '{}'/'{}' as street code {}",
                suburb,
                area,
                details.street_code
            ),
            ValidationOutcome::NoExactMatch { suggestions } => tracing::debug!(
                "No exact match for '{}'/'{}', {} suggestions",
                suburb,
                area,
                suggestions.len()
            ),
        }

        Ok(outcome)
    }

    async fn load(&self) -> Result<Vec<PostalRecord>> {
        let records = self.provider.load().await.map_err(|e| {
            tracing::error!("Failed to load postal code dataset: {}", e);
            e
        })?;
        Ok(records)
    }
}
