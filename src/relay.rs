use std::sync::Arc;

use crate::data_models::{
    DestinationDigest, FlightSummary, SearchContentItem, SearchOptions, TravelQuery,
};
use crate::error::{MISSING_FIELDS_MESSAGE, RelayError};
use crate::generation_client::GenerationService;
use crate::prompts::{self, EXPLORE_QUERY, EXPLORE_RESULT_COUNT, FLIGHT_RESULT_COUNT};
use crate::search_client::SearchService;

/// Forwards travel queries to the search and generation services.
///
/// Holds nothing but the two service handles, so a single instance is shared
/// by every request.
pub struct Relay {
    search: Arc<dyn SearchService>,
    generation: Arc<dyn GenerationService>,
}

impl Relay {
    pub fn new(search: Arc<dyn SearchService>, generation: Arc<dyn GenerationService>) -> Relay {
        Relay { search, generation }
    }

    pub async fn search(&self, query: TravelQuery) -> Result<FlightSummary, RelayError> {
        if !query.is_complete() {
            return Err(RelayError::Validation(MISSING_FIELDS_MESSAGE));
        }

        tracing::info!(
            from = %query.origin,
            to = %query.destination,
            tier = query.tier.as_str(),
            "flight search"
        );

        let items = self
            .fetch_content(
                &prompts::flight_search_query(&query),
                SearchOptions::keyword_with_text(FLIGHT_RESULT_COUNT),
            )
            .await?;

        let flight_details = self.generate(&prompts::flight_prompt(&query, &items)).await?;

        Ok(FlightSummary {
            flight_class: query.tier.flight_class(),
            origin: query.origin,
            destination: query.destination,
            flight_details,
            follow_up_suggestions: prompts::FOLLOW_UP_SUGGESTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            references: items.iter().map(SearchContentItem::reference).collect(),
        })
    }

    pub async fn explore(&self) -> Result<DestinationDigest, RelayError> {
        tracing::info!("explore destinations");

        let items = self
            .fetch_content(
                EXPLORE_QUERY,
                SearchOptions::keyword_with_text(EXPLORE_RESULT_COUNT),
            )
            .await?;

        let destinations = self.generate(&prompts::explore_prompt(&items)).await?;

        Ok(DestinationDigest {
            destinations,
            references: items.iter().map(SearchContentItem::reference).collect(),
        })
    }

    async fn fetch_content(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<SearchContentItem>, RelayError> {
        let mut items = self
            .search
            .search_and_contents(query, options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "search service failed");
                RelayError::Search(e)
            })?;

        // the service may return more than asked for
        items.truncate(options.num_results as usize);
        tracing::debug!(results = items.len(), "search content fetched");
        Ok(items)
    }

    async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        self.generation.generate_content(prompt).await.map_err(|e| {
            tracing::error!(error = %e, "generation service failed");
            RelayError::Generation(e)
        })
    }
}
