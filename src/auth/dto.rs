use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::repo::User;

/// Body posted by the SPA after the Google redirect.
#[derive(Debug, Deserialize)]
pub struct GoogleCallbackRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct AuthorizationUrl {
    pub authorization_url: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_serializes_bearer_and_user() {
        let user = User {
            id: Uuid::new_v4(),
            email: "ada@gmail.com".into(),
            full_name: "Ada".into(),
            hashed_password: None,
            google_id: Some("g-1".into()),
            is_active: true,
            created_at: OffsetDateTime::now_utc(),
        };
        let token = Token {
            access_token: "abc".into(),
            token_type: "bearer",
            user: PublicUser::from(&user),
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["user"]["email"], "ada@gmail.com");
        // Internal-only fields never leave the server.
        assert!(json["user"].get("hashed_password").is_none());
        assert!(json["user"].get("google_id").is_none());
    }
}
