use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kaycore_common::ContactErrors;
use serde_json::json;

use crate::api::notifier::NotifyError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please correct the highlighted fields")]
    Validation(ContactErrors),
    #[error("Invalid contact form payload: {0}")]
    MalformedBody(String),
    #[error("Too many requests, please try again in a minute")]
    RateLimited,
    #[error("No content source is configured")]
    NotConfigured,
    #[error("Content source unavailable: {0}")]
    Upstream(String),
    #[error("We couldn't send your message, please try again")]
    Delivery(#[from] NotifyError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotConfigured => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::Delivery(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(fields) => json!({
                "error": self.to_string(),
                "fields": fields,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
