//! Session cookie authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::api::AppState;
use crate::config::SESSION_COOKIE_NAME;
use crate::domain::CurrentUser;
use crate::errors::{AppError, AppResult};

/// Resolve the session cookie in `jar` to the signed-in user.
///
/// Fails with `Unauthorized` (or a token error) when the cookie is missing,
/// forged, expired, revoked, or names a user that no longer exists.
pub async fn current_user(state: &AppState, jar: &CookieJar) -> AppResult<CurrentUser> {
    let token = jar
        .get(SESSION_COOKIE_NAME)
        .map(|cookie| cookie.value())
        .ok_or(AppError::Unauthorized)?;

    let record = state.session_service.resolve(token).await?;
    let user = state
        .auth_service
        .find_user(record.user_id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
        session_id: record.id,
    })
}

/// Session middleware.
///
/// Validates the session cookie, then injects the CurrentUser into the
/// request extensions. Anonymous requests are redirected to the login page.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jar = CookieJar::from_headers(request.headers());
    let user = current_user(&state, &jar).await?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
