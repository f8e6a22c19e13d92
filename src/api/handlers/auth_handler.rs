//! Login, registration and logout handlers.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use validator::Validate;

use crate::api::extractors::ValidatedForm;
use crate::api::middleware::current_user;
use crate::api::AppState;
use crate::config::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH, SESSION_COOKIE_NAME};
use crate::domain::{CreateUser, CurrentUser, User};
use crate::errors::{AppError, AppResult};
use crate::utils::templates;

/// Login form fields
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration form fields
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 1, max = 80, message = "Username must be 1 to 80 characters"))]
    pub username: String,
    #[validate(
        email(message = "Invalid email address"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl From<RegisterForm> for CreateUser {
    fn from(form: RegisterForm) -> Self {
        Self {
            username: form.username,
            email: form.email,
            password: form.password,
        }
    }
}

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_form).post(login))
        .route(REGISTER_PATH, get(register_form).post(register))
}

/// Open a session for `user` and send them to the dashboard.
async fn sign_in(state: &AppState, jar: CookieJar, user: &User) -> AppResult<Response> {
    let token = state.session_service.start(user).await?;
    let cookie = Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::to(DASHBOARD_PATH)).into_response())
}

/// Re-render a form with the error, or propagate errors that are not the user's.
fn form_error(error: AppError, render: fn(Option<&str>) -> String) -> AppResult<Response> {
    if !error.is_form_error() {
        return Err(error);
    }
    error.log();
    Ok(Html(render(Some(&error.user_message()))).into_response())
}

pub async fn login_form(State(state): State<AppState>, jar: CookieJar) -> Response {
    if current_user(&state, &jar).await.is_ok() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    Html(templates::login_page(None)).into_response()
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<ValidatedForm<LoginForm>, AppError>,
) -> AppResult<Response> {
    let attempt = match form {
        Ok(ValidatedForm(form)) => {
            state
                .auth_service
                .login(&form.username, &form.password)
                .await
        }
        Err(e) => Err(e),
    };

    match attempt {
        Ok(user) => sign_in(&state, jar, &user).await,
        Err(e) => form_error(e, templates::login_page),
    }
}

pub async fn register_form(State(state): State<AppState>, jar: CookieJar) -> Response {
    if current_user(&state, &jar).await.is_ok() {
        return Redirect::to(DASHBOARD_PATH).into_response();
    }
    Html(templates::register_page(None)).into_response()
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<ValidatedForm<RegisterForm>, AppError>,
) -> AppResult<Response> {
    let attempt = match form {
        Ok(ValidatedForm(form)) => state.auth_service.register(form.into()).await,
        Err(e) => Err(e),
    };

    match attempt {
        Ok(user) => sign_in(&state, jar, &user).await,
        Err(e) => form_error(e, templates::register_page),
    }
}

/// Close the session and clear the cookie. Requires a live session.
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    jar: CookieJar,
) -> Response {
    state.session_service.end(user.session_id).await;
    tracing::info!(user_id = %user.id, "User logged out");

    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/"));
    (jar, Redirect::to(LOGIN_PATH)).into_response()
}
