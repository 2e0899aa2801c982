//! Turns raw upstream responses into the uniform result envelope.

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::TwicasError;
use crate::schema::Schema;
use crate::transport::RawResponse;

pub const RATE_LIMIT_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";
pub const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

/// Per-call quota counters. Each is `-1` when the header was absent or not numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    pub limit: i64,
    pub remaining: i64,
    /// Unix time at which `remaining` resets.
    pub reset: i64,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(-1)
        };
        Self {
            limit: read(RATE_LIMIT_LIMIT_HEADER),
            remaining: read(RATE_LIMIT_REMAINING_HEADER),
            reset: read(RATE_LIMIT_RESET_HEADER),
        }
    }
}

/// Successful endpoint result.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub rate_limit: RateLimit,
    pub raw_response: RawResponse,
}

/// Result of the live thumbnail endpoint, which is not rate limited.
#[derive(Debug, Clone)]
pub struct ImageResponse {
    pub data: Vec<u8>,
    pub raw_response: RawResponse,
}

impl ImageResponse {
    /// `image/jpeg` or `image/png`, as reported by upstream.
    pub fn content_type(&self) -> Option<&str> {
        self.raw_response.content_type()
    }
}

/// Check status, validate the body against `schema` and decode it as `T`.
pub fn format_response<T: DeserializeOwned>(
    raw: RawResponse,
    schema: &Schema,
) -> Result<ApiResponse<T>, TwicasError> {
    let body: Value = match serde_json::from_slice(&raw.body) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                status = raw.status,
                error = %e,
                "TwitCasting response body is not JSON"
            );
            return Err(TwicasError::unknown_api_error(raw));
        }
    };

    if !raw.is_success() {
        let err = TwicasError::from_error_body(&body, raw);
        tracing::warn!(
            code = err.code().unwrap_or(-1),
            error = %err,
            "TwitCasting API returned an error"
        );
        return Err(err);
    }

    let data = match schema.parse::<T>(&body) {
        Ok(data) => data,
        Err(source) => {
            tracing::warn!(error = %source, "TwitCasting response did not match its schema");
            return Err(TwicasError::ResponseSchema {
                source,
                response: Box::new(raw),
            });
        }
    };

    Ok(ApiResponse {
        data,
        rate_limit: RateLimit::from_headers(&raw.headers),
        raw_response: raw,
    })
}

/// Binary variant: body returned as-is, no rate limit. A failure status is
/// still reported as an Api error.
pub fn format_image_response(raw: RawResponse) -> Result<ImageResponse, TwicasError> {
    if !raw.is_success() {
        let err = match serde_json::from_slice::<Value>(&raw.body) {
            Ok(body) => TwicasError::from_error_body(&body, raw),
            Err(_) => TwicasError::unknown_api_error(raw),
        };
        return Err(err);
    }

    Ok(ImageResponse {
        data: raw.body.clone(),
        raw_response: raw,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::ErrorKind;
    use crate::schema::{loose_object, number, string};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Added {
        added_count: i64,
    }

    fn added_schema() -> Schema {
        loose_object().required("added_count", number()).into()
    }

    #[test]
    fn success_decodes_and_reads_rate_limit() {
        let raw = RawResponse::json(200, &json!({ "added_count": 2 }))
            .with_header("X-RateLimit-Limit", "60")
            .with_header("X-RateLimit-Remaining", "59")
            .with_header("X-RateLimit-Reset", "1700000000");

        let resp: ApiResponse<Added> = format_response(raw, &added_schema()).unwrap();
        assert_eq!(resp.data, Added { added_count: 2 });
        assert_eq!(
            resp.rate_limit,
            RateLimit {
                limit: 60,
                remaining: 59,
                reset: 1_700_000_000,
            }
        );
        assert_eq!(resp.raw_response.status, 200);
    }

    #[test]
    fn missing_or_garbage_rate_limit_headers_become_minus_one() {
        let raw = RawResponse::json(200, &json!({ "added_count": 1 }))
            .with_header("X-RateLimit-Limit", "sixty");

        let resp: ApiResponse<Added> = format_response(raw, &added_schema()).unwrap();
        assert_eq!(
            resp.rate_limit,
            RateLimit {
                limit: -1,
                remaining: -1,
                reset: -1,
            }
        );
    }

    #[test]
    fn error_status_with_error_object_keeps_upstream_code() {
        let raw = RawResponse::json(400, &json!({ "error": { "code": 4001, "message": "X" } }));
        let err = format_response::<Added>(raw, &added_schema()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.code(), Some(4001));
    }

    #[test]
    fn non_json_body_is_unknown_api_error() {
        let raw = RawResponse::new(502, "<html>Bad Gateway</html>");
        let err = format_response::<Added>(raw, &added_schema()).unwrap_err();

        assert_eq!(err.code(), Some(-1));
        assert_eq!(
            err.raw_response().map(RawResponse::text).as_deref(),
            Some("<html>Bad Gateway</html>")
        );
    }

    #[test]
    fn non_json_success_body_is_unknown_api_error() {
        let raw = RawResponse::new(200, "not json");
        let err = format_response::<Added>(raw, &added_schema()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.code(), Some(-1));
    }

    #[test]
    fn contract_drift_is_a_schema_violation() {
        let raw = RawResponse::json(200, &json!({ "added_count": "two" }));
        let err = format_response::<Added>(raw, &added_schema()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ResponseSchemaViolation);
        match err {
            TwicasError::ResponseSchema { source, response } => {
                assert!(source.has_issue_at("added_count"));
                assert_eq!(response.status, 200);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn image_response_skips_json_handling() {
        let raw = RawResponse::new(200, vec![0xff, 0xd8, 0xff])
            .with_header("Content-Type", "image/jpeg");
        let image = format_image_response(raw).unwrap();

        assert_eq!(image.data, vec![0xff, 0xd8, 0xff]);
        assert_eq!(image.content_type(), Some("image/jpeg"));
    }

    #[test]
    fn image_error_status_is_api_error() {
        let raw = RawResponse::json(
            404,
            &json!({ "error": { "code": 404, "message": "Not Found" } }),
        );
        let err = format_image_response(raw).unwrap_err();
        assert_eq!(err.code(), Some(404));
    }

    #[test]
    fn string_schema_is_usable_for_scalar_bodies() {
        let raw = RawResponse::json(200, &json!("ok"));
        let resp: ApiResponse<String> = format_response(raw, &string().into()).unwrap();
        assert_eq!(resp.data, "ok");
    }
}
