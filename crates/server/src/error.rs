use axum::{
    Json,
    response::{IntoResponse, Response},
};
use hyper::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Failures while assembling or rendering the activity report. There is no
/// recovery path here: any of these surfaces as a server error on the request.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("database error: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        tracing::error!(
            name = "report.request_failed",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            error = %self,
            message = "activity report request failed"
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response()
    }
}
