use crate::client::{Client, Fetcher};
use crate::config::Config;
use crate::context::Invocation;
use crate::model::{EmptySummary, Item, ItemSummary, ResponseEnvelope};
use crate::retry::fetch_with_retry;
use crate::util::Trace;
use std::sync::Arc;

/// Fetches the item list and summarizes it into a response envelope.
pub struct Handler {
    config: Config,
    fetcher: Arc<dyn Fetcher>,
    trace: Trace,
}

impl Handler {
    pub fn new(config: Config, trace: Trace) -> Self {
        let fetcher = Arc::new(Client::new(&config));
        Self::with_fetcher(config, fetcher, trace)
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>, trace: Trace) -> Self {
        Handler {
            config,
            fetcher,
            trace,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Never fails: every error ends up in a 500 envelope.
    pub async fn handle(&self, ctx: &Invocation) -> ResponseEnvelope {
        let trace = &self.trace;
        trace.info(format_args!("Lambda execution started"));
        trace.info(format_args!("Fetching data from: {}", self.config.api_url));

        let items = match fetch_with_retry(
            self.fetcher.as_ref(),
            ctx,
            self.config.max_retries,
            trace,
        )
        .await
        {
            Ok(items) => items,
            Err(e) => {
                trace.error(format_args!("Failed to fetch items: {}", e));
                return ResponseEnvelope::error(format!("Failed to fetch items: {}", e));
            }
        };

        trace.info(format_args!("Total items fetched: {}", items.len()));
        let response = match summarize(&items) {
            None => {
                trace.info(format_args!("No items returned from the API"));
                ResponseEnvelope::json(200, &EmptySummary::default())
            }
            Some(summary) => {
                trace.info(format_args!(
                    "Title of first item: {}",
                    summary.first_item_title
                ));
                ResponseEnvelope::json(200, &summary)
            }
        };

        match response {
            Ok(response) => {
                trace.info(format_args!("Lambda execution completed successfully"));
                response
            }
            Err(e) => {
                trace.error(format_args!("Error marshaling response: {}", e));
                ResponseEnvelope::generate_failed()
            }
        }
    }
}

/// Count plus the first title in API order; `None` for an empty list.
pub fn summarize(items: &[Item]) -> Option<ItemSummary> {
    items.first().map(|first| ItemSummary {
        total: items.len(),
        first_item_title: first.title.clone(),
    })
}
