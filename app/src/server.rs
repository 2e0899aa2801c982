//! HTTP endpoint for TwitCasting webhook deliveries.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use twicas_client::WebhookReceiver;
use twicas_client::api::WebhookPayload;

use crate::config::ServerConfig;

pub const WEBHOOK_PATH: &str = "/webhook";

#[derive(Clone)]
struct WebhookState {
    receiver: Arc<WebhookReceiver>,
    events: mpsc::Sender<WebhookPayload>,
}

/// Create the router. Accepted deliveries are forwarded to `events`.
pub fn create_router(receiver: WebhookReceiver, events: mpsc::Sender<WebhookPayload>) -> Router {
    let state = WebhookState {
        receiver: Arc::new(receiver),
        events,
    };

    Router::new()
        .route(WEBHOOK_PATH, post(receive_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /webhook
async fn receive_webhook(State(state): State<WebhookState>, body: Bytes) -> (StatusCode, String) {
    let outcome = state.receiver.handle_body(&body);

    if let Some(event) = outcome.event {
        if let Err(e) = state.events.send(event).await {
            tracing::warn!("Webhook event dropped: {e}");
        }
    }

    (outcome.status, outcome.body)
}

/// Log every live start/end from `events`. The task finishes once all
/// senders are gone and the buffer is drained, returning how many events it
/// handled.
pub fn spawn_event_logger(mut events: mpsc::Receiver<WebhookPayload>) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let mut handled = 0;
        while let Some(event) = events.recv().await {
            let state = if event.movie.is_live { "started" } else { "ended" };
            tracing::info!(
                movie_id = %event.movie.id,
                screen_id = %event.broadcaster.screen_id,
                title = %event.movie.title,
                "Live {state}"
            );
            handled += 1;
        }
        handled
    })
}

/// Serve the webhook endpoint until Ctrl+C.
pub async fn start_server(
    config: ServerConfig,
    events: mpsc::Sender<WebhookPayload>,
) -> Result<()> {
    let app = create_router(WebhookReceiver::new(config.signature), events);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Webhook server listening on http://{}{}", addr, WEBHOOK_PATH);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {e}");
            }
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn delivery(signature: &str) -> Value {
        json!({
            "signature": signature,
            "movie": {
                "id": "189037369",
                "user_id": "182224938",
                "title": "ライブ #189037369",
                "link": "http://twitcasting.tv/twitcasting_jp/movie/189037369",
                "is_live": false,
                "is_recorded": true,
                "comment_count": 12,
                "large_thumbnail": "http://example.com/l.jpg",
                "small_thumbnail": "http://example.com/s.jpg",
                "country": "jp",
                "duration": 1186,
                "created": 1438500282,
                "is_collabo": false,
                "is_protected": false,
                "max_view_count": 10,
                "current_view_count": 0,
                "total_view_count": 30
            },
            "broadcaster": {
                "id": "182224938",
                "screen_id": "twitcasting_jp",
                "name": "ツイキャス公式",
                "image": "http://example.com/i.png",
                "profile": "",
                "level": 24,
                "is_live": false
            }
        })
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(WEBHOOK_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn accepted_delivery_is_forwarded() {
        let (tx, mut rx) = mpsc::channel(4);
        let app = create_router(WebhookReceiver::new("s3cret"), tx);

        let resp = app
            .oneshot(post_json(delivery("s3cret").to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());

        let event = rx.recv().await.unwrap();
        assert_eq!(event.movie.id, "189037369");
        assert!(event.movie.is_recorded);
    }

    #[tokio::test]
    async fn wrong_signature_is_forbidden_and_not_forwarded() {
        let (tx, mut rx) = mpsc::channel(4);
        let app = create_router(WebhookReceiver::new("s3cret"), tx);

        let resp = app
            .oneshot(post_json(delivery("nope").to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn non_json_body_is_forbidden() {
        let (tx, _rx) = mpsc::channel(4);
        let app = create_router(WebhookReceiver::new("s3cret"), tx);

        let resp = app.oneshot(post_json("hello".into())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn closed_channel_still_answers_no_content() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let app = create_router(WebhookReceiver::new("s3cret"), tx);

        let resp = app
            .oneshot(post_json(delivery("s3cret").to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn logger_drains_buffered_events_after_senders_drop() {
        let (tx, rx) = mpsc::channel(8);
        let receiver = WebhookReceiver::new("s3cret");
        for _ in 0..3 {
            let event = receiver.handle(&delivery("s3cret")).event.unwrap();
            tx.send(event).await.unwrap();
        }

        let logger = spawn_event_logger(rx);
        drop(tx);

        assert_eq!(logger.await.unwrap(), 3);
    }

    #[tokio::test]
    async fn only_post_is_routed() {
        let (tx, _rx) = mpsc::channel(1);
        let app = create_router(WebhookReceiver::new("s3cret"), tx);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri(WEBHOOK_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
