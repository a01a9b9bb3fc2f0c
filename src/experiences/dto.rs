use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct CreateExperience {
    pub company: String,
    pub role: String,
    pub start_date: Date,
    /// May precede start_date; the range is stored as given.
    #[serde(default)]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListExperiencesQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub company: Option<String>,
}
