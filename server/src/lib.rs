//! Shared types and HTTP API for the Licensor server.

mod error;

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{post, put},
    Router,
};
use licensor_core::{License, LicensePatch, NewLicense};
use licensor_service::{LicenseService, ServiceResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub use error::ApiError;

/// Body of every admin endpoint response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            license: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            license: None,
        }
    }
}

/// Body of a verification request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VerifyRequest {
    #[serde(default)]
    pub license_key: Option<String>,
}

/// Body of a verification response.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    pub message: String,
}

type AppState = Arc<LicenseService>;

async fn login_handler(
    State(service): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    // A missing, malformed, or empty body is a bad request, not a failed login.
    let body = payload.ok().map(|Json(v)| v);
    let Some(fields) = body.as_ref().and_then(Value::as_object).filter(|o| !o.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ActionResponse::failed("no data provided")),
        )
            .into_response();
    };
    let password = fields.get("password").and_then(Value::as_str).unwrap_or_default();

    if service.authenticate(password) {
        info!("Admin login succeeded");
        Json(ActionResponse::ok("login successful")).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ActionResponse::failed("incorrect password")),
        )
            .into_response()
    }
}

// rusqlite blocks, so store work runs off the async workers.
async fn run_blocking<T, F>(service: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&LicenseService) -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(service);
    Ok(tokio::task::spawn_blocking(move || op(&service)).await??)
}

async fn list_handler(State(service): State<AppState>) -> Result<Json<Vec<License>>, ApiError> {
    let licenses = run_blocking(&service, |svc| svc.list()).await?;
    Ok(Json(licenses))
}

async fn create_handler(
    State(service): State<AppState>,
    payload: Result<Json<NewLicense>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(request) = payload?;
    let license = run_blocking(&service, move |svc| svc.create(request)).await?;
    Ok(Json(ActionResponse {
        license: Some(license),
        ..ActionResponse::ok("license created")
    }))
}

async fn update_handler(
    State(service): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<LicensePatch>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    run_blocking(&service, move |svc| svc.update(id, &patch)).await?;
    Ok(Json(ActionResponse::ok("license updated")))
}

async fn delete_handler(
    State(service): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Path(id) = id?;
    run_blocking(&service, move |svc| svc.delete(id)).await?;
    Ok(Json(ActionResponse::ok("license deleted")))
}

async fn verify_handler(
    State(service): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> (StatusCode, Json<VerifyResponse>) {
    let request = payload.map(|Json(r)| r).unwrap_or_default();
    let service = Arc::clone(&service);
    let outcome =
        tokio::task::spawn_blocking(move || service.verify(request.license_key.as_deref())).await;

    let failure = match outcome {
        Ok(Ok(verdict)) => {
            return (
                StatusCode::OK,
                Json(VerifyResponse {
                    valid: verdict.is_valid(),
                    expiry_date: verdict.expiry_date().map(str::to_string),
                    message: verdict.message().to_string(),
                }),
            );
        }
        Ok(Err(e)) => e.to_string(),
        Err(e) => e.to_string(),
    };
    error!("License verification failed: {failure}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(VerifyResponse {
            valid: false,
            expiry_date: None,
            message: format!("server error: {failure}"),
        }),
    )
}

/// Build the HTTP API router over the given service.
pub fn build_router(service: Arc<LicenseService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/login", post(login_handler))
        .route("/api/licenses", post(create_handler).get(list_handler))
        .route("/api/licenses/{id}", put(update_handler).delete(delete_handler))
        .route("/api/verify-license", post(verify_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
