//! Engine errors as HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tictac_core::EngineError;

/// Every failure is rendered as `{detail, error_code}`
#[derive(Debug)]
pub enum ApiError {
    /// The engine refused the request
    Engine(EngineError),
    /// The body was not a JSON object of the expected shape
    Malformed(JsonRejection),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(err) if err.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Engine(_) => StatusCode::BAD_REQUEST,
            ApiError::Malformed(rejection) => rejection.status(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Engine(err) => err.kind(),
            ApiError::Malformed(_) => "malformed_request",
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Engine(err) => err.to_string(),
            ApiError::Malformed(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        tracing::warn!("Rejected AI request ({}): {}", status, detail);

        let body = json!({
            "detail": detail,
            "error_code": self.error_code(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::Mark;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(EngineError::NoLegalMoves).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(EngineError::GameOver { winner: Mark::X }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(EngineError::InvalidPlayer { value: "Q".into() }).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_error_code_follows_engine_kind() {
        let err = ApiError::from(EngineError::InvalidBoard { reason: "short".into() });
        assert_eq!(err.error_code(), "invalid_board");
        assert!(err.detail().contains("short"));
    }
}
