use crate::{
    application::{ApplicationResult, error::ApplicationError},
    domain::errors::DomainError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_)) => {
                StatusCode::CONFLICT
            }
            ApplicationError::Forbidden(_) | ApplicationError::Domain(DomainError::Forbidden(_)) => {
                StatusCode::FORBIDDEN
            }
            ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApplicationError::Infrastructure(_)
            | ApplicationError::Domain(DomainError::Persistence(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %err, "request failed");
            return Self::new(status, "Internal server error".into());
        }
        Self::new(status, err.message().to_owned())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            status_code: self.status.as_u16(),
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
