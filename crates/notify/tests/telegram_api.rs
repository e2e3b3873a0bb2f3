//! Bot API client tests against a local mock server.

use dealdrip_notify::channels::TelegramBotClient;
use dealdrip_notify::{ChatTransport, Error, TelegramConfig};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer, parse_mode: Option<&str>) -> TelegramConfig {
    TelegramConfig {
        api_base: server.uri(),
        parse_mode: parse_mode.map(str::to_string),
        ..Default::default()
    }
}

#[tokio::test]
async fn send_text_posts_to_send_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:ABC/sendMessage"))
        .and(body_json(json!({
            "chat_id": "42",
            "text": "\u{1f525} *Deal*\n\nbody",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramBotClient::new("123:ABC", &config(&server, None));
    client
        .send_text("42", "\u{1f525} *Deal*\n\nbody")
        .await
        .unwrap();
}

#[tokio::test]
async fn send_text_includes_parse_mode_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:ABC/sendMessage"))
        .and(body_json(json!({
            "chat_id": "42",
            "text": "hi",
            "parse_mode": "Markdown",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramBotClient::new("123:ABC", &config(&server, Some("Markdown")));
    client.send_text("42", "hi").await.unwrap();
}

#[tokio::test]
async fn rejected_message_is_a_delivery_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:ABC/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramBotClient::new("123:ABC", &config(&server, None));
    let err = client.send_text("42", "hi").await.unwrap_err();

    assert!(matches!(err, Error::Delivery { .. }));
    assert!(err.to_string().contains("chat not found"));
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "ok": false,
            "description": "Too Many Requests: retry after 5",
            "parameters": {"retry_after": 5},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramBotClient::new("123:ABC", &config(&server, None));
    assert!(client.send_text("42", "hi").await.is_err());
}

#[tokio::test]
async fn transport_error_hides_bot_token() {
    // Nothing listens on the discard port.
    let config = TelegramConfig {
        api_base: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    };
    let client = TelegramBotClient::new("123:SECRET", &config);
    let err = client.send_text("42", "hi").await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
    assert!(!err.to_string().contains("SECRET"));
}
