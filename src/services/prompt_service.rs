use std::fmt::Write;

use crate::{
    constants::prompts::{
        MISSING_ANSWER_PLACEHOLDER, SUMMARY_PROMPT_INSTRUCTIONS, SUMMARY_PROMPT_INTRO,
    },
    models::domain::QuizAnswers,
};

/// Renders validated answers into the user prompt sent to the completion provider.
/// Deterministic: identical answers always produce the identical string.
pub fn build_prompt(answers: &QuizAnswers) -> String {
    let mut prompt = String::with_capacity(1024);
    prompt.push_str(SUMMARY_PROMPT_INTRO);
    prompt.push('\n');

    for (field, value) in answers.entries() {
        let value = value.trim();
        let value = if value.is_empty() {
            MISSING_ANSWER_PLACEHOLDER
        } else {
            value
        };
        // Writing into a String cannot fail.
        let _ = writeln!(prompt, "- {}: {}", field.label(), value);
    }

    prompt.push('\n');
    prompt.push_str(SUMMARY_PROMPT_INSTRUCTIONS);
    prompt.push('\n');
    prompt
}
