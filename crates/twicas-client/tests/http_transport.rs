//! Exercises the reqwest transport against a local HTTP server.

use serde_json::json;
use twicas_client::api::{PostCommentParams, WebHookEventsParams};
use twicas_client::{ClientOptions, Credentials, ErrorKind, TwicasClient};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user() -> serde_json::Value {
    json!({
        "id": "182224938",
        "screen_id": "twitcasting_jp",
        "name": "ツイキャス公式",
        "image": "http://example.com/i.png",
        "profile": "",
        "level": 24,
        "last_movie_id": null,
        "is_live": false
    })
}

fn client(server: &MockServer, credentials: Credentials, gzip: bool) -> TwicasClient {
    TwicasClient::new(
        ClientOptions::new(credentials)
            .gzip(gzip)
            .base_url(server.uri()),
    )
    .unwrap()
}

#[tokio::test]
async fn bearer_token_and_api_version_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/twitcasting_jp"))
        .and(header("Authorization", "Bearer T"))
        .and(header("X-Api-Version", "2.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "user": user(),
                    "supporter_count": 1,
                    "supporting_count": 2
                }))
                .insert_header("X-RateLimit-Limit", "60")
                .insert_header("X-RateLimit-Remaining", "59")
                .insert_header("X-RateLimit-Reset", "1700000000"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server, Credentials::access_token("T"), false)
        .get_user_info("twitcasting_jp")
        .await
        .unwrap();

    assert_eq!(resp.data.supporting_count, 2);
    assert_eq!(resp.rate_limit.remaining, 59);
    assert_eq!(resp.rate_limit.reset, 1_700_000_000);
}

#[tokio::test]
async fn client_credentials_use_basic_auth_and_gzip_is_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .and(header("Authorization", "Basic aWQ6c2VjcmV0"))
        .and(header("Accept-Encoding", "gzip"))
        .and(query_param("limit", "50"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "all_count": 0, "webhooks": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server, Credentials::client_credentials("id", "secret"), true)
        .get_webhook_list(&Default::default())
        .await
        .unwrap();
    assert_eq!(resp.data.all_count, 0);
    // No rate limit headers in the response.
    assert_eq!(resp.rate_limit.limit, -1);
}

#[tokio::test]
async fn post_sends_json_body_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/movies/189037369/comments"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "comment": "モイ！" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "movie_id": "189037369",
            "all_count": 1,
            "comment": { "id": "1", "message": "モイ！", "from_user": user(), "created": 1479579471 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server, Credentials::access_token("T"), false)
        .post_comment(
            "189037369",
            &PostCommentParams {
                comment: "モイ！".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(resp.data.comment.id, "1");
}

#[tokio::test]
async fn delete_with_array_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/webhooks"))
        .and(query_param("user_id", "7"))
        .and(query_param("events[]", "livestart"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "user_id": "7", "deleted_events": ["livestart"] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server, Credentials::access_token("T"), false)
        .remove_webhook(&WebHookEventsParams {
            user_id: "7".into(),
            events: vec!["livestart".into()],
        })
        .await
        .unwrap();
    assert_eq!(resp.data.deleted_events, vec!["livestart"]);
}

#[tokio::test]
async fn upstream_error_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verify_credentials"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "code": 1000, "message": "Invalid token" }
        })))
        .mount(&server)
        .await;

    let err = client(&server, Credentials::access_token("expired"), false)
        .verify_credentials()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.code(), Some(1000));
    assert_eq!(err.raw_response().map(|r| r.status), Some(401));
}

#[tokio::test]
async fn thumbnail_bytes_are_returned_untouched() {
    let server = MockServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    Mock::given(method("GET"))
        .and(path("/users/twitcasting_jp/live/thumbnail"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
        .mount(&server)
        .await;

    let image = client(&server, Credentials::access_token("T"), false)
        .get_live_thumbnail_image("twitcasting_jp")
        .await
        .unwrap();
    assert_eq!(image.data, png);
    assert_eq!(image.content_type(), Some("image/png"));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on the discard port.
    let client = TwicasClient::new(
        ClientOptions::new(Credentials::access_token("T")).base_url("http://127.0.0.1:9"),
    )
    .unwrap();

    let err = client.get_rtmp_url().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}
