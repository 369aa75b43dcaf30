//! Admin authentication for the dashboard endpoints.
//!
//! Provides an Axum extractor enforcing the server-admin gate: every guarded
//! handler requires `Authorization: Bearer <token>` matching the configured
//! `admin_token_secret`. Handlers behind the gate assume it has passed.

use crate::AppResources;
use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error type for authentication failures
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthError {
    /// Error code (e.g., "invalid_token")
    pub error: String,
    /// Human-readable error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

impl AuthError {
    pub fn invalid_token(description: impl Into<String>) -> Self {
        Self {
            error: "invalid_token".to_string(),
            error_description: Some(description.into()),
        }
    }

    pub fn forbidden(description: impl Into<String>) -> Self {
        Self {
            error: "forbidden".to_string(),
            error_description: Some(description.into()),
        }
    }

    pub fn server_error() -> Self {
        Self {
            error: "server_error".to_string(),
            error_description: None,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "invalid_token" => StatusCode::UNAUTHORIZED,
            "forbidden" => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Axum extractor that validates the server-admin bearer token.
///
/// # Example
///
/// ```ignore
/// async fn handler(_admin: ServerAdminAuth) -> impl IntoResponse {
///     "only admins see this"
/// }
/// ```
#[derive(Debug)]
pub struct ServerAdminAuth;

impl<S> FromRequestParts<S> for ServerAdminAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get AppResources from extensions
        let resources = parts
            .extensions
            .get::<AppResources>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!("AppResources not found in extensions");
                AuthError::server_error()
            })?;

        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok());

        let token = match auth_header {
            Some(header) if header.starts_with("Bearer ") => &header[7..],
            Some(_) => {
                return Err(AuthError::invalid_token(
                    "Authorization header must use Bearer scheme",
                ));
            }
            None => {
                return Err(AuthError::invalid_token("Missing Authorization header"));
            }
        };

        if token != resources.config.admin_token_secret {
            tracing::warn!(
                name = "auth.admin_token_rejected",
                target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                message = "rejected request with invalid admin token"
            );
            return Err(AuthError::invalid_token("Invalid admin token"));
        }

        Ok(ServerAdminAuth)
    }
}
