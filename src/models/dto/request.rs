use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

/// Raw `/generate-summary` body. Values are coerced to strings and trimmed while
/// deserializing; absent fields default to empty so `validate` reports them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct QuizAnswersRequest {
    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub experience: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub years: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub goal: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub style: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub time: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub learning: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub frustration: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub risk: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub tools: String,

    #[serde(default, deserialize_with = "answer_text")]
    #[validate(length(min = 1, message = "is required"))]
    pub focus: String,
}

fn answer_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => return Err(de::Error::custom("answer values cannot be null")),
        Value::Array(_) => return Err(de::Error::custom("answer values must be text, found a list")),
        Value::Object(_) => {
            return Err(de::Error::custom("answer values must be text, found an object"))
        }
    };
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_values_are_trimmed_and_coerced() {
        let request: QuizAnswersRequest = serde_json::from_value(json!({
            "experience": "  beginner ",
            "years": 2,
            "goal": true,
        }))
        .unwrap();

        assert_eq!(request.experience, "beginner");
        assert_eq!(request.years, "2");
        assert_eq!(request.goal, "true");
        assert_eq!(request.focus, "");
    }

    #[test]
    fn test_blank_value_fails_validation() {
        let request: QuizAnswersRequest = serde_json::from_value(json!({
            "experience": "beginner", "years": "<1", "goal": "income", "style": "swing",
            "time": "5h/week", "learning": "visual", "frustration": "overtrading",
            "risk": "low", "tools": "broker app", "focus": "   ",
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("focus"));
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = serde_json::from_value::<QuizAnswersRequest>(json!({ "mood": "calm" }))
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `mood`"));
    }

    #[test]
    fn test_null_and_nested_values_are_rejected() {
        assert!(serde_json::from_value::<QuizAnswersRequest>(json!({ "risk": null })).is_err());
        assert!(serde_json::from_value::<QuizAnswersRequest>(json!({ "tools": ["a"] })).is_err());
        assert!(serde_json::from_value::<QuizAnswersRequest>(json!({ "goal": {} })).is_err());
    }
}
