use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        completion_service::{CompletionClient, OpenAiCompletionClient},
        summary_service::SummaryService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub summary_service: Arc<SummaryService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let completion_client = Arc::new(OpenAiCompletionClient::new(config));
        log::info!(
            "Completion provider configured: model={}, temperature={}, max_output_tokens={}",
            config.openai_model,
            config.openai_temperature,
            config.openai_max_output_tokens
        );
        Self::with_completion_client(completion_client)
    }

    pub fn with_completion_client(completion_client: Arc<dyn CompletionClient>) -> Self {
        Self {
            summary_service: Arc::new(SummaryService::new(completion_client)),
        }
    }
}
