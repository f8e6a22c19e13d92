//! Application route configuration.

use std::any::Any;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::{auth_routes, dashboard, logout};
use super::middleware::{rate_limit_middleware, session_middleware};
use super::AppState;
use crate::config::{DASHBOARD_PATH, HEALTH_PATH, LOGOUT_PATH};
use crate::utils::templates;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Pages that need a live session
    let protected = Router::new()
        .route(DASHBOARD_PATH, get(dashboard))
        .route(LOGOUT_PATH, get(logout))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new()
        .merge(protected)
        .merge(auth_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        // Health check is added after the limiter so probes are never throttled
        .route(HEALTH_PATH, get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates::internal_error_page()),
    )
        .into_response()
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let healthy = match state.database.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            false
        }
    };

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            database: ServiceStatus {
                status: if healthy { "healthy" } else { "unhealthy" },
            },
        },
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
