pub mod completion_service;
pub mod prompt_service;
pub mod summary_service;

pub use completion_service::{CompletionClient, CompletionSettings, OpenAiCompletionClient};
pub use prompt_service::build_prompt;
pub use summary_service::SummaryService;
