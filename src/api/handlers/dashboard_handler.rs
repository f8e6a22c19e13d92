//! Dashboard page handler.

use axum::{extract::State, response::Html, Extension};

use crate::api::AppState;
use crate::domain::CurrentUser;
use crate::utils::templates;

/// Every request fetches fresh data from every source.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Html<String> {
    let view = state.dashboard_service.build().await;
    Html(templates::dashboard_page(&view, &user.username))
}
