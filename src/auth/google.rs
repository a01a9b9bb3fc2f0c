use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::config::GoogleConfig;
use crate::error::ApiError;

/// Sign-in is restricted to one email domain. Product constraint, not config.
pub const ALLOWED_EMAIL_DOMAIN: &str = "@gmail.com";

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// URL the SPA sends the browser to for consent.
pub fn authorization_url(google: &GoogleConfig) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth?\
         client_id={}&\
         redirect_uri={}&\
         response_type=code&\
         scope=openid%20email%20profile&\
         access_type=offline&\
         prompt=consent",
        google.client_id, google.redirect_uri
    )
}

/// Exchange the authorization code for a provider access token.
pub async fn exchange_code(
    http: &reqwest::Client,
    google: &GoogleConfig,
    code: &str,
) -> Result<String, ApiError> {
    let response = http
        .post(TOKEN_ENDPOINT)
        .form(&[
            ("code", code),
            ("client_id", google.client_id.as_str()),
            ("client_secret", google.client_secret.as_str()),
            ("redirect_uri", google.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(provider_unreachable)?;
    let body: Value = response.json().await.map_err(provider_unreachable)?;
    token_from_response(&body)
}

pub(crate) fn token_from_response(body: &Value) -> Result<String, ApiError> {
    if let Some(err) = body.get("error") {
        let msg = body
            .get("error_description")
            .and_then(Value::as_str)
            .or_else(|| err.as_str())
            .unwrap_or("Unknown error");
        warn!(error = %msg, "google token exchange failed");
        return Err(ApiError::BadRequest(format!("OAuth error: {msg}")));
    }
    body.get("access_token")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::BadRequest("OAuth error: token response missing access_token".into())
        })
}

pub async fn fetch_userinfo(
    http: &reqwest::Client,
    access_token: &str,
) -> Result<GoogleUserInfo, ApiError> {
    http.get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(provider_unreachable)?
        .json::<GoogleUserInfo>()
        .await
        .map_err(provider_unreachable)
}

/// The profile email must be present, well-formed and in the allowed domain.
pub fn validate_email_domain(email: Option<&str>) -> Result<&str, ApiError> {
    match email {
        Some(addr) if is_valid_email(addr) && addr.ends_with(ALLOWED_EMAIL_DOMAIN) => Ok(addr),
        _ => Err(ApiError::Forbidden("Only Gmail accounts are allowed".into())),
    }
}

/// Display name, falling back to the email local part.
pub fn display_name(name: Option<String>, email: &str) -> String {
    name.unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string())
}

fn provider_unreachable(err: reqwest::Error) -> ApiError {
    error!(error = %err, "google request failed");
    ApiError::Internal(format!("Authentication failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> GoogleConfig {
        GoogleConfig {
            client_id: "client-123".into(),
            client_secret: "shh".into(),
            redirect_uri: "http://localhost:5173/auth/callback".into(),
        }
    }

    #[test]
    fn authorization_url_carries_client_and_redirect() {
        let url = authorization_url(&config());
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=http://localhost:5173/auth/callback"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile"));
    }

    #[test]
    fn token_from_response_prefers_error_description() {
        let body = json!({"error": "invalid_grant", "error_description": "Bad code"});
        let err = token_from_response(&body).unwrap_err();
        assert_eq!(err.to_string(), "OAuth error: Bad code");

        let body = json!({"error": "invalid_grant"});
        let err = token_from_response(&body).unwrap_err();
        assert_eq!(err.to_string(), "OAuth error: invalid_grant");
    }

    #[test]
    fn token_from_response_requires_access_token() {
        let body = json!({"token_type": "Bearer"});
        assert!(token_from_response(&body).is_err());

        let body = json!({"access_token": "ya29.abc"});
        assert_eq!(token_from_response(&body).unwrap(), "ya29.abc");
    }

    #[test]
    fn domain_policy_rejects_everything_but_gmail() {
        assert!(validate_email_domain(None).is_err());
        assert!(validate_email_domain(Some("me@example.com")).is_err());
        assert!(validate_email_domain(Some("not-an-email")).is_err());
        assert_eq!(validate_email_domain(Some("me@gmail.com")).unwrap(), "me@gmail.com");
    }

    #[test]
    fn domain_policy_failures_are_forbidden() {
        let err = validate_email_domain(Some("me@example.com")).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "Only Gmail accounts are allowed");
    }

    #[test]
    fn display_name_falls_back_to_local_part() {
        assert_eq!(display_name(Some("Ada L".into()), "ada@gmail.com"), "Ada L");
        assert_eq!(display_name(None, "ada@gmail.com"), "ada");
    }
}
