use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

/// API failure mapped onto the wire contract: validation failures carry the
/// full list of violated rules, everything else a single user-facing message.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<String>),
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    success: bool,
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

impl ApiError {
    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::Validation(errors)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::Validation(vec![message.into()])
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        let mut response = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    success: false,
                    errors,
                }),
            )
                .into_response(),
            ApiError::Internal(error) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FailureBody {
                    success: false,
                    error,
                }),
            )
                .into_response(),
        };
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response
                .headers_mut()
                .insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}

pub fn map_json_rejection(err: JsonRejection) -> ApiError {
    ApiError::bad_request(format!("Invalid JSON payload: {}", err.body_text()))
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
