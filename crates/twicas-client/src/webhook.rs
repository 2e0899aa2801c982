//! Receiver for TwitCasting webhook deliveries.
//!
//! TwitCasting POSTs a JSON body `{signature, movie, broadcaster}` to the
//! registered URL when a live starts or ends. [`WebhookReceiver::handle`]
//! checks the shape, then the signature, and tells the caller which status
//! to answer with. It performs no I/O, so any HTTP server can host it.

use reqwest::StatusCode;
use serde_json::Value;

use crate::api::WebhookPayload;
use crate::schema::{Schema, entities};

const FORBIDDEN_BODY: &str = "Forbidden";

/// Outcome of one delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub body: String,
    /// Decoded delivery, present only when accepted.
    pub event: Option<WebhookPayload>,
}

impl WebhookResponse {
    fn accepted(event: WebhookPayload) -> Self {
        Self {
            status: StatusCode::NO_CONTENT,
            body: String::new(),
            event: Some(event),
        }
    }

    fn forbidden() -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            body: FORBIDDEN_BODY.into(),
            event: None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.event.is_some()
    }
}

/// Validates deliveries against the application's webhook signature.
#[derive(Clone)]
pub struct WebhookReceiver {
    signature: String,
    schema: Schema,
}

impl WebhookReceiver {
    /// `signature` is the value shown for the application on the
    /// TwitCasting developer page.
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            schema: entities::webhook_payload(),
        }
    }

    /// Validate a parsed JSON body.
    pub fn handle(&self, payload: &Value) -> WebhookResponse {
        let event: WebhookPayload = match self.schema.parse(payload) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected malformed webhook payload");
                return WebhookResponse::forbidden();
            }
        };

        if event.signature != self.signature {
            tracing::warn!(movie_id = %event.movie.id, "Rejected webhook with wrong signature");
            return WebhookResponse::forbidden();
        }

        tracing::info!(
            movie_id = %event.movie.id,
            user_id = %event.broadcaster.id,
            is_live = event.movie.is_live,
            "Accepted webhook delivery"
        );
        WebhookResponse::accepted(event)
    }

    /// Validate a raw request body. Bodies that are not JSON are rejected.
    pub fn handle_body(&self, body: &[u8]) -> WebhookResponse {
        match serde_json::from_slice::<Value>(body) {
            Ok(payload) => self.handle(&payload),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected non-JSON webhook body");
                WebhookResponse::forbidden()
            }
        }
    }
}

impl std::fmt::Debug for WebhookReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookReceiver")
            .field("signature", &"***")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(signature: &str) -> Value {
        json!({
            "signature": signature,
            "movie": {
                "id": "189037369",
                "user_id": "182224938",
                "title": "ライブ #189037369",
                "subtitle": null,
                "last_owner_comment": null,
                "category": null,
                "link": "http://twitcasting.tv/twitcasting_jp/movie/189037369",
                "is_live": true,
                "is_recorded": false,
                "comment_count": 0,
                "large_thumbnail": "http://example.com/l.jpg",
                "small_thumbnail": "http://example.com/s.jpg",
                "country": "jp",
                "duration": 0,
                "created": 1438500282,
                "is_collabo": false,
                "is_protected": false,
                "max_view_count": 0,
                "current_view_count": 0,
                "total_view_count": 0,
                "hls_url": "https://twitcasting.tv/twitcasting_jp/metastream.m3u8/?video=1"
            },
            "broadcaster": {
                "id": "182224938",
                "screen_id": "twitcasting_jp",
                "name": "ツイキャス公式",
                "image": "http://example.com/i.png",
                "profile": "",
                "level": 24,
                "last_movie_id": "189037369",
                "is_live": true
            }
        })
    }

    #[test]
    fn correct_signature_is_accepted() {
        let receiver = WebhookReceiver::new("s3cret");
        let resp = receiver.handle(&payload("s3cret"));

        assert_eq!(resp.status, StatusCode::NO_CONTENT);
        assert!(resp.body.is_empty());
        let event = resp.event.unwrap();
        assert_eq!(event.movie.id, "189037369");
        assert_eq!(event.broadcaster.screen_id, "twitcasting_jp");
    }

    #[test]
    fn wrong_signature_is_forbidden() {
        let receiver = WebhookReceiver::new("s3cret");
        let resp = receiver.handle(&payload("guess"));

        assert_eq!(resp.status, StatusCode::FORBIDDEN);
        assert!(resp.event.is_none());
    }

    #[test]
    fn malformed_payload_is_forbidden_even_with_right_signature() {
        let receiver = WebhookReceiver::new("s3cret");
        let resp = receiver.handle(&json!({ "signature": "s3cret" }));

        assert_eq!(resp.status, StatusCode::FORBIDDEN);
        assert!(!resp.is_accepted());
    }

    #[test]
    fn raw_body_paths() {
        let receiver = WebhookReceiver::new("s3cret");

        assert_eq!(
            receiver.handle_body(b"signature=s3cret").status,
            StatusCode::FORBIDDEN
        );

        let body = serde_json::to_vec(&payload("s3cret")).unwrap();
        assert!(receiver.handle_body(&body).is_accepted());
    }

    #[test]
    fn debug_does_not_print_the_secret() {
        let text = format!("{:?}", WebhookReceiver::new("s3cret"));
        assert!(!text.contains("s3cret"));
    }
}
