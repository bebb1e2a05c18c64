use axum::http::StatusCode;

use crate::api::FetchError;
use crate::export::ExportError;
use crate::history::ParseError;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        if err.is_not_found() {
            return Self::not_found("no data for this game");
        }
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("corrupt history payload: {err}"),
        }
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
