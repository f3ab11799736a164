use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),
    #[error("database pool unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("failed to save contact: {0}")]
    Storage(#[from] diesel::result::Error),
    #[error("failed to send notification email: {0}")]
    Mail(String),
}

impl ContactError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Contact submission failed: {}", self);
        } else {
            tracing::warn!("Contact submission rejected: {}", self);
        }
        (status, Json(json!({"success": false, "error": self.to_string()}))).into_response()
    }
}
