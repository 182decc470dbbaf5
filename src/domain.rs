//! Domain records and creation payloads.
//!
//! `Question` and `Answer` are the canonical transport shapes: the sqlx
//! `FromRow` mapping converts storage rows and the serde derives produce
//! the wire keys (`questionId`, `user`, ...), so there is exactly one
//! conversion path from row to JSON.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Question {
    #[serde(rename = "questionId")]
    pub question_id: i64,
    pub question: String,
    pub description: Option<String>,
    pub option1: String,
    pub option2: String,
    pub true_answer: String,
    pub correct_question_percentage: f64,
    pub incorrect_question_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Answer {
    #[sqlx(rename = "username")]
    pub user: String,
    #[serde(rename = "questionId")]
    pub question_id: i64,
    pub answer: String,
}

/// Fields for creating or fully replacing a question. The percentages are
/// plain `f64`s: presence is enforced by deserialization, and zero is a
/// legitimate scoring delta.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    #[serde(default)]
    pub description: Option<String>,
    pub option1: String,
    pub option2: String,
    pub true_answer: String,
    pub correct_question_percentage: f64,
    pub incorrect_question_percentage: f64,
}

impl NewQuestion {
    /// Checks the invariants the storage schema cannot express: required
    /// strings must be non-blank and the true answer must be one of the
    /// two options.
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("question", &self.question),
            ("option1", &self.option1),
            ("option2", &self.option2),
            ("true_answer", &self.true_answer),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if self.true_answer != self.option1 && self.true_answer != self.option2 {
            return Err(AppError::Validation(
                "true_answer must equal option1 or option2".into(),
            ));
        }
        Ok(())
    }
}

/// Fields for submitting an answer; the question id comes from the URL.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewAnswer {
    pub user: String,
    pub answer: String,
}

impl NewAnswer {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.user.trim().is_empty() {
            return Err(AppError::Validation("user is required".into()));
        }
        if self.answer.trim().is_empty() {
            return Err(AppError::Validation("answer is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(true_answer: &str) -> NewQuestion {
        NewQuestion {
            question: "q1".into(),
            description: Some("d".into()),
            option1: "A".into(),
            option2: "B".into(),
            true_answer: true_answer.into(),
            correct_question_percentage: 10.0,
            incorrect_question_percentage: 5.0,
        }
    }

    #[test]
    fn valid_question_passes() {
        assert!(question("A").validate().is_ok());
        assert!(question("B").validate().is_ok());
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let mut q = question("A");
        q.option1 = "  ".into();
        let err = q.validate().unwrap_err();
        assert!(err.to_string().contains("option1"));
    }

    #[test]
    fn true_answer_must_match_an_option() {
        let err = question("C").validate().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn zero_percentages_are_valid() {
        let mut q = question("A");
        q.correct_question_percentage = 0.0;
        q.incorrect_question_percentage = 0.0;
        assert!(q.validate().is_ok());
    }

    #[test]
    fn question_serializes_with_wire_keys() {
        let q = Question {
            question_id: 1,
            question: "q1".into(),
            description: None,
            option1: "A".into(),
            option2: "B".into(),
            true_answer: "A".into(),
            correct_question_percentage: 10.0,
            incorrect_question_percentage: 5.0,
        };
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["questionId"], 1);
        assert_eq!(v["true_answer"], "A");
        assert_eq!(v["correct_question_percentage"], 10.0);
    }

    #[test]
    fn answer_serializes_with_wire_keys() {
        let a = Answer {
            user: "alice".into(),
            question_id: 1,
            answer: "A".into(),
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["user"], "alice");
        assert_eq!(v["questionId"], 1);
        assert_eq!(v["answer"], "A");
    }

    #[test]
    fn blank_answer_fields_are_rejected() {
        let a = NewAnswer {
            user: "".into(),
            answer: "A".into(),
        };
        assert!(matches!(a.validate(), Err(AppError::Validation(_))));
        let a = NewAnswer {
            user: "alice".into(),
            answer: " ".into(),
        };
        assert!(matches!(a.validate(), Err(AppError::Validation(_))));
    }
}
