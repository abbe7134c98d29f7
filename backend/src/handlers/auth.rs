//! Authentication handlers
//!
//! Session state lives in the `access` and `refresh` cookies; login and
//! refresh responses carry no token body.

use axum::{extract::State, http::StatusCode};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::{ACCESS_COOKIE, REFRESH_COOKIE};
use crate::services::auth::AuthTokens;
use crate::services::AuthService;
use crate::AppState;
use shared::validation::validate_email;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login endpoint handler
///
/// Sets both session cookies on success; on failure no cookie is touched and
/// the error body is returned with 401.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> AppResult<(CookieJar, StatusCode)> {
    validate_email(&body.email).map_err(|msg| AppError::Validation {
        field: "email".to_string(),
        message: msg.to_string(),
    })?;

    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.login(&body.email, &body.password).await?;

    Ok((set_session_cookies(jar, &state, tokens), StatusCode::OK))
}

/// Refresh endpoint handler
///
/// Reads the refresh token from its cookie, never from a header. On failure
/// the previously set cookies are left untouched.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, StatusCode)> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::Unauthorized("Missing refresh cookie".to_string()))?;

    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let tokens = auth_service.refresh(&refresh_token).await?;

    Ok((set_session_cookies(jar, &state, tokens), StatusCode::OK))
}

/// Logout endpoint handler
///
/// Clears both session cookies regardless of authentication state.
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar
        .remove(Cookie::build(ACCESS_COOKIE).path("/"))
        .remove(Cookie::build(REFRESH_COOKIE).path("/"));
    (jar, StatusCode::OK)
}

fn set_session_cookies(jar: CookieJar, state: &AppState, tokens: AuthTokens) -> CookieJar {
    let max_age = state.config.jwt.cookie_max_age;
    jar.add(session_cookie(ACCESS_COOKIE, tokens.access_token, max_age))
        .add(session_cookie(
            REFRESH_COOKIE,
            tokens.refresh_token,
            max_age,
        ))
}

fn session_cookie(name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}
