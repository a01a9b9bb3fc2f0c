use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct CreateLearning {
    pub topic: String,
    /// Defaults to the creation day when omitted.
    #[serde(default)]
    pub learned_date: Option<Date>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListLearningsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_learned_date_and_tags() {
        let l: CreateLearning =
            serde_json::from_value(serde_json::json!({"topic": "B-tree splits"})).unwrap();
        assert!(l.learned_date.is_none());
        assert!(l.tags.is_empty());
    }
}
