use serde::{Deserialize, Deserializer};
use time::Date;

use crate::error::ApiError;

pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

pub fn validate_difficulty(value: &str) -> Result<(), ApiError> {
    if DIFFICULTIES.contains(&value) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(format!(
            "difficulty must be one of: {}",
            DIFFICULTIES.join(", ")
        )))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProblem {
    pub title: String,
    #[serde(default)]
    pub company_context: Option<String>,
    pub difficulty: String,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to the creation day when omitted.
    #[serde(default)]
    pub solved_at: Option<Date>,
}

/// Marks a field as present even when its value is `null`: absent stays
/// `None`, a present value (including `null`) becomes `Some(...)`.
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update: only fields present in the body are applied. The nullable
/// `company_context` is cleared by an explicit `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProblem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub company_context: Option<Option<String>>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub situation: Option<String>,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub solved_at: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct ListProblemsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_closed_set() {
        for ok in DIFFICULTIES {
            assert!(validate_difficulty(ok).is_ok());
        }
        for bad in ["easy", "HARD", "Impossible", ""] {
            let err = validate_difficulty(bad).unwrap_err();
            assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
            assert!(err.to_string().contains("difficulty must be one of"));
        }
    }

    #[test]
    fn create_defaults_tags_and_solved_at() {
        let p: CreateProblem = serde_json::from_value(serde_json::json!({
            "title": "Latency regression",
            "difficulty": "Medium",
            "situation": "s",
            "task": "t",
            "action": "a",
            "result": "r"
        }))
        .unwrap();
        assert!(p.tags.is_empty());
        assert!(p.solved_at.is_none());
        assert!(p.company_context.is_none());
    }

    #[test]
    fn update_keeps_absent_fields_unset() {
        let p: UpdateProblem =
            serde_json::from_value(serde_json::json!({"title": "New title"})).unwrap();
        assert_eq!(p.title.as_deref(), Some("New title"));
        assert!(p.difficulty.is_none());
        assert!(p.tags.is_none());
        assert!(p.solved_at.is_none());
        assert!(p.company_context.is_none());
    }

    #[test]
    fn update_distinguishes_null_from_absent_company_context() {
        let p: UpdateProblem = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(p.company_context, None);

        let p: UpdateProblem =
            serde_json::from_value(serde_json::json!({"company_context": null})).unwrap();
        assert_eq!(p.company_context, Some(None));

        let p: UpdateProblem =
            serde_json::from_value(serde_json::json!({"company_context": "Acme"})).unwrap();
        assert_eq!(p.company_context, Some(Some("Acme".into())));
    }
}
