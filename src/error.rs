use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Store responded with {status}: {body}")]
    Store {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Store request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Timezone error: {0}")]
    Timezone(#[from] jiff::Error),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Invalid {key} value: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {self}");
            return (status, "Internal server error").into_response();
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_payload_is_client_error() {
        let response = AppError::MalformedPayload.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_failure_is_server_error() {
        let response = AppError::Store {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "Invalid API key".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
