use serde_json::{json, Value};

use crate::models::domain::QuizAnswers;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A complete, valid quiz submission for a cautious beginner swing trader.
    pub fn scenario_a_payload() -> Value {
        json!({
            "experience": "beginner",
            "years": "<1",
            "goal": "income",
            "style": "swing",
            "time": "5h/week",
            "learning": "visual",
            "frustration": "overtrading",
            "risk": "low",
            "tools": "broker app",
            "focus": "setups"
        })
    }

    /// The valid submission with one key removed.
    pub fn scenario_a_payload_without(field: &str) -> Value {
        let mut payload = scenario_a_payload();
        if let Some(map) = payload.as_object_mut() {
            map.remove(field);
        }
        payload
    }

    pub fn scenario_a_answers() -> QuizAnswers {
        QuizAnswers::parse(scenario_a_payload()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_payload_has_ten_fields() {
        assert_eq!(scenario_a_payload().as_object().unwrap().len(), 10);
    }

    #[test]
    fn test_fixture_payload_without_drops_one_field() {
        let payload = scenario_a_payload_without("risk");
        let map = payload.as_object().unwrap();
        assert_eq!(map.len(), 9);
        assert!(!map.contains_key("risk"));
    }
}
