use std::sync::Arc;

use serde_json::Value;

use crate::{
    errors::{AppResult, CompletionError},
    models::domain::QuizAnswers,
    services::{completion_service::CompletionClient, prompt_service::build_prompt},
};

/// Validate, render, complete. Holds no per-request state.
pub struct SummaryService {
    completion_client: Arc<dyn CompletionClient>,
}

impl SummaryService {
    pub fn new(completion_client: Arc<dyn CompletionClient>) -> Self {
        Self { completion_client }
    }

    pub async fn generate_summary(&self, payload: Value) -> AppResult<String> {
        let answers = QuizAnswers::parse(payload)?;
        let prompt = build_prompt(&answers);
        log::debug!("Built summary prompt ({} chars)", prompt.len());

        let summary = self.completion_client.complete(&prompt).await?;
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(CompletionError::EmptyResponse.into());
        }

        Ok(summary.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::AppError,
        services::completion_service::MockCompletionClient,
        test_utils::fixtures::{scenario_a_payload, scenario_a_payload_without},
    };

    fn service_with(mock: MockCompletionClient) -> SummaryService {
        SummaryService::new(Arc::new(mock))
    }

    #[actix_rt::test]
    async fn test_generate_summary_passes_rendered_prompt() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|prompt| {
                assert!(prompt.contains("- Current focus: setups"));
                assert!(prompt.contains("under 300 words"));
                Ok("  You have a plan.  ".to_string())
            });

        let summary = service_with(mock)
            .generate_summary(scenario_a_payload())
            .await
            .unwrap();
        assert_eq!(summary, "You have a plan.");
    }

    #[actix_rt::test]
    async fn test_invalid_answers_never_reach_provider() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete().never();

        let err = service_with(mock)
            .generate_summary(scenario_a_payload_without("focus"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Bad request: `focus` is required");
    }

    #[actix_rt::test]
    async fn test_blank_completion_is_failure() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Ok(" \n ".to_string()));

        let err = service_with(mock)
            .generate_summary(scenario_a_payload())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Completion(CompletionError::EmptyResponse)
        ));
    }

    #[actix_rt::test]
    async fn test_provider_failure_is_completion_error() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .times(1)
            .returning(|_| Err(CompletionError::Timeout(std::time::Duration::from_secs(30))));

        let err = service_with(mock)
            .generate_summary(scenario_a_payload())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Completion(CompletionError::Timeout(_))));
    }
}
