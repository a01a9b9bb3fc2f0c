use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct CreateInterviewQuestion {
    pub question: String,
    pub answer: String,
    pub company: String,
    pub asked_date: Date,
}

#[derive(Debug, Deserialize)]
pub struct ListInterviewQuestionsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub company: Option<String>,
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
}
