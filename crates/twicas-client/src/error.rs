//! Error taxonomy for the twicas-client crate.

use serde_json::Value;

use crate::schema::{self, ValidationError};
use crate::transport::RawResponse;

/// Message used whenever the upstream error body cannot be interpreted.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Coarse failure category, for callers that only need to branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input rejected before any network call.
    ClientValidation,
    /// Upstream returned a non-success status (or a non-JSON body).
    Api,
    /// Upstream returned success with a body that breaks the documented contract.
    ResponseSchemaViolation,
    /// The HTTP exchange itself failed.
    Transport,
    /// Client construction failed.
    Configuration,
}

/// Unified error type for the twicas-client crate.
#[derive(Debug, thiserror::Error)]
pub enum TwicasError {
    #[error("invalid request parameters: {0}")]
    ClientValidation(#[from] ValidationError),

    #[error("TwitCasting API error (code {code}): {message}")]
    Api {
        code: i64,
        message: String,
        details: Option<Value>,
        response: Box<RawResponse>,
    },

    #[error("TwitCasting response violated its schema: {source}")]
    ResponseSchema {
        source: ValidationError,
        response: Box<RawResponse>,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Either an access token or both client id and client secret must be provided")]
    InvalidCredentials,

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(serde::Deserialize)]
struct ErrorDetail {
    code: i64,
    message: String,
    #[serde(default)]
    details: Option<Value>,
}

impl TwicasError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TwicasError::ClientValidation(_) => ErrorKind::ClientValidation,
            TwicasError::Api { .. } => ErrorKind::Api,
            TwicasError::ResponseSchema { .. } => ErrorKind::ResponseSchemaViolation,
            TwicasError::Transport(_) => ErrorKind::Transport,
            TwicasError::InvalidCredentials
            | TwicasError::InvalidConfig(_)
            | TwicasError::UrlParse(_) => ErrorKind::Configuration,
        }
    }

    /// Upstream error code for [`ErrorKind::Api`] errors, `-1` when unknown.
    pub fn code(&self) -> Option<i64> {
        match self {
            TwicasError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Raw upstream response, when the failure happened after one arrived.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            TwicasError::Api { response, .. } | TwicasError::ResponseSchema { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Api error with the sentinel code, for bodies that carry no usable error object.
    pub(crate) fn unknown_api_error(response: RawResponse) -> Self {
        TwicasError::Api {
            code: -1,
            message: UNKNOWN_API_ERROR.into(),
            details: None,
            response: Box::new(response),
        }
    }

    /// Build an Api error from a failed response's parsed body.
    pub(crate) fn from_error_body(body: &Value, response: RawResponse) -> Self {
        match schema::entities::error_body().parse::<ErrorBody>(body) {
            Ok(parsed) => TwicasError::Api {
                code: parsed.error.code,
                message: parsed.error.message,
                details: parsed.error.details,
                response: Box::new(response),
            },
            Err(_) => Self::unknown_api_error(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn error_body_with_code_and_message_is_extracted() {
        let raw = RawResponse::json(400, &json!({}));
        let body = json!({ "error": { "code": 4001, "message": "X" } });

        let err = TwicasError::from_error_body(&body, raw);
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.code(), Some(4001));
        assert_eq!(err.to_string(), "TwitCasting API error (code 4001): X");
        assert_eq!(err.raw_response().map(|r| r.status), Some(400));
    }

    #[test]
    fn validation_details_are_kept() {
        let raw = RawResponse::json(400, &json!({}));
        let body = json!({
            "error": {
                "code": 1001,
                "message": "Validation error",
                "details": { "limit": ["invalid"] }
            }
        });

        match TwicasError::from_error_body(&body, raw) {
            TwicasError::Api { details, .. } => {
                assert_eq!(details, Some(json!({ "limit": ["invalid"] })));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unexpected_error_shape_falls_back_to_sentinel() {
        let raw = RawResponse::json(500, &json!({}));
        let err = TwicasError::from_error_body(&json!({ "message": "oops" }), raw);

        assert_eq!(err.code(), Some(-1));
        assert_eq!(
            err.to_string(),
            format!("TwitCasting API error (code -1): {UNKNOWN_API_ERROR}")
        );
    }

    #[test]
    fn construction_errors_have_configuration_kind() {
        assert_eq!(
            TwicasError::InvalidCredentials.kind(),
            ErrorKind::Configuration
        );
        assert!(TwicasError::InvalidCredentials.raw_response().is_none());
    }
}
