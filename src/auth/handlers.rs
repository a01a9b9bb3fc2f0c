use axum::{
    extract::{FromRef, State},
    Json,
};
use tracing::{error, info, instrument};

use super::dto::{AuthorizationUrl, GoogleCallbackRequest, PublicUser, Token};
use super::extractors::CurrentUser;
use super::google;
use super::jwt::JwtKeys;
use super::repo::User;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn google_login(State(state): State<AppState>) -> Json<AuthorizationUrl> {
    Json(AuthorizationUrl {
        authorization_url: google::authorization_url(&state.config.google),
    })
}

/// Exchange the code, apply the domain policy, find-or-create the user and
/// mint an access token. Provider errors surface as 400 with the provider's
/// message, policy violations as 403; anything unexpected becomes a generic
/// 500 and is never swallowed.
#[instrument(skip(state, payload))]
pub async fn google_callback(
    State(state): State<AppState>,
    Json(payload): Json<GoogleCallbackRequest>,
) -> Result<Json<Token>, ApiError> {
    let provider_token =
        google::exchange_code(&state.http, &state.config.google, &payload.code).await?;
    let info = google::fetch_userinfo(&state.http, &provider_token).await?;

    let email = google::validate_email_domain(info.email.as_deref())?.to_string();
    let full_name = google::display_name(info.name.clone(), &email);

    let user = match User::find_by_email_or_google_id(&state.db, &email, &info.id)
        .await
        .map_err(auth_failed)?
    {
        Some(user) if user.google_id.is_none() => {
            User::set_google_id(&state.db, user.id, &info.id)
                .await
                .map_err(auth_failed)?
        }
        Some(user) => user,
        None => {
            let user = User::create_oauth(&state.db, &email, &full_name, &info.id)
                .await
                .map_err(auth_failed)?;
            info!(user_id = %user.id, "user created from google profile");
            user
        }
    };

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id).map_err(auth_failed)?;

    info!(user_id = %user.id, "google sign-in succeeded");
    Ok(Json(Token {
        access_token,
        token_type: "bearer",
        user: PublicUser::from(&user),
    }))
}

#[instrument(skip(user))]
pub async fn me(CurrentUser(user): CurrentUser) -> Json<PublicUser> {
    Json(PublicUser::from(&user))
}

fn auth_failed(err: anyhow::Error) -> ApiError {
    error!(error = %err, "google callback failed");
    ApiError::Internal(format!("Authentication failed: {err}"))
}
