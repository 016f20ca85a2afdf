//! FAQ domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A question/answer pair grouped by category (`cat`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: i64,
    pub q: String,
    pub a: String,
    pub cat: String,
}

fn default_question() -> String {
    "New Question?".to_string()
}

fn default_answer() -> String {
    "Answer here.".to_string()
}

fn default_cat() -> String {
    "General".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FaqInput {
    #[serde(default = "default_question")]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub q: String,

    #[serde(default = "default_answer")]
    pub a: String,

    #[serde(default = "default_cat")]
    pub cat: String,
}

impl FaqInput {
    pub fn into_faq(self, id: i64) -> Faq {
        Faq {
            id,
            q: self.q,
            a: self.a,
            cat: self.cat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_input_defaults() {
        let input: FaqInput = serde_json::from_str(r#"{"cat": "Booking"}"#).unwrap();
        let faq = input.into_faq(9);
        assert_eq!(faq.q, "New Question?");
        assert_eq!(faq.a, "Answer here.");
        assert_eq!(faq.cat, "Booking");
        assert_eq!(faq.id, 9);
    }
}
