use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::{errors::ValidationError, models::dto::request::QuizAnswersRequest};

/// One of the ten quiz questions, in the order the quiz asks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerField {
    Experience,
    Years,
    Goal,
    Style,
    Time,
    Learning,
    Frustration,
    Risk,
    Tools,
    Focus,
}

impl AnswerField {
    pub const ALL: [AnswerField; 10] = [
        AnswerField::Experience,
        AnswerField::Years,
        AnswerField::Goal,
        AnswerField::Style,
        AnswerField::Time,
        AnswerField::Learning,
        AnswerField::Frustration,
        AnswerField::Risk,
        AnswerField::Tools,
        AnswerField::Focus,
    ];

    /// Wire name of the field in the request body.
    pub fn name(self) -> &'static str {
        match self {
            AnswerField::Experience => "experience",
            AnswerField::Years => "years",
            AnswerField::Goal => "goal",
            AnswerField::Style => "style",
            AnswerField::Time => "time",
            AnswerField::Learning => "learning",
            AnswerField::Frustration => "frustration",
            AnswerField::Risk => "risk",
            AnswerField::Tools => "tools",
            AnswerField::Focus => "focus",
        }
    }

    /// Human-readable label used in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            AnswerField::Experience => "Experience level",
            AnswerField::Years => "Years trading",
            AnswerField::Goal => "Goal",
            AnswerField::Style => "Style",
            AnswerField::Time => "Time available",
            AnswerField::Learning => "Learning style",
            AnswerField::Frustration => "Current frustration",
            AnswerField::Risk => "Risk tolerance",
            AnswerField::Tools => "Tools used",
            AnswerField::Focus => "Current focus",
        }
    }
}

/// Validated quiz answers. Every value is trimmed and non-empty; the only way to
/// obtain one is through [`QuizAnswers::parse`] or `TryFrom<QuizAnswersRequest>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswers {
    experience: String,
    years: String,
    goal: String,
    style: String,
    time: String,
    learning: String,
    frustration: String,
    risk: String,
    tools: String,
    focus: String,
}

impl QuizAnswers {
    /// Validates an arbitrary JSON payload against the quiz schema.
    pub fn parse(payload: Value) -> Result<Self, ValidationError> {
        if !payload.is_object() {
            return Err(ValidationError::new("request body must be a JSON object"));
        }

        let request: QuizAnswersRequest = serde_json::from_value(payload)
            .map_err(|e| ValidationError::new(e.to_string()))?;

        Self::try_from(request)
    }

    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::Experience => &self.experience,
            AnswerField::Years => &self.years,
            AnswerField::Goal => &self.goal,
            AnswerField::Style => &self.style,
            AnswerField::Time => &self.time,
            AnswerField::Learning => &self.learning,
            AnswerField::Frustration => &self.frustration,
            AnswerField::Risk => &self.risk,
            AnswerField::Tools => &self.tools,
            AnswerField::Focus => &self.focus,
        }
    }

    /// All answers paired with their field, in quiz order.
    pub fn entries(&self) -> impl Iterator<Item = (AnswerField, &str)> + '_ {
        AnswerField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl TryFrom<QuizAnswersRequest> for QuizAnswers {
    type Error = ValidationError;

    fn try_from(request: QuizAnswersRequest) -> Result<Self, Self::Error> {
        request.validate().map_err(|e| first_violation(&e))?;

        Ok(QuizAnswers {
            experience: request.experience,
            years: request.years,
            goal: request.goal,
            style: request.style,
            time: request.time,
            learning: request.learning,
            frustration: request.frustration,
            risk: request.risk,
            tools: request.tools,
            focus: request.focus,
        })
    }
}

/// Picks the earliest failing field in quiz order so the reported error is stable.
fn first_violation(errors: &ValidationErrors) -> ValidationError {
    let field_errors = errors.field_errors();

    AnswerField::ALL
        .iter()
        .find_map(|field| {
            field_errors.get(field.name()).map(|errs| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                ValidationError::new(format!("`{}` {}", field.name(), reason))
            })
        })
        .unwrap_or_else(|| ValidationError::new(errors.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{scenario_a_payload, scenario_a_payload_without};
    use serde_json::json;

    #[test]
    fn test_parse_valid_payload() {
        let answers = QuizAnswers::parse(scenario_a_payload()).unwrap();

        assert_eq!(answers.get(AnswerField::Experience), "beginner");
        assert_eq!(answers.get(AnswerField::Years), "<1");
        assert_eq!(answers.get(AnswerField::Focus), "setups");
        assert_eq!(answers.entries().count(), 10);
    }

    #[test]
    fn test_parse_trims_values() {
        let mut payload = scenario_a_payload();
        payload["goal"] = json!("   income  ");

        let answers = QuizAnswers::parse(payload).unwrap();
        assert_eq!(answers.get(AnswerField::Goal), "income");
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        for field in AnswerField::ALL {
            let err = QuizAnswers::parse(scenario_a_payload_without(field.name())).unwrap_err();
            assert_eq!(err.to_string(), format!("`{}` is required", field.name()));
        }
    }

    #[test]
    fn test_every_blank_field_is_reported() {
        for field in AnswerField::ALL {
            let mut payload = scenario_a_payload();
            payload[field.name()] = json!(" \t ");
            let err = QuizAnswers::parse(payload).unwrap_err();
            assert_eq!(err.to_string(), format!("`{}` is required", field.name()));
        }
    }

    #[test]
    fn test_first_violation_follows_quiz_order() {
        let mut payload = scenario_a_payload();
        payload["focus"] = json!("");
        payload["years"] = json!("");

        let err = QuizAnswers::parse(payload).unwrap_err();
        assert_eq!(err.to_string(), "`years` is required");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut payload = scenario_a_payload();
        payload["broker"] = json!("acme");

        let err = QuizAnswers::parse(payload).unwrap_err();
        assert!(err.to_string().contains("unknown field `broker`"));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = QuizAnswers::parse(json!(["beginner"])).unwrap_err();
        assert_eq!(err.to_string(), "request body must be a JSON object");
    }
}
