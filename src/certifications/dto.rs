use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct CreateCertification {
    pub name: String,
    pub issuer: String,
    pub issue_date: Date,
    #[serde(default)]
    pub expiry_date: Option<Date>,
    #[serde(default)]
    pub credential_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListCertificationsQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
