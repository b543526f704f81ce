pub mod quiz_answers;

pub use quiz_answers::{AnswerField, QuizAnswers};
