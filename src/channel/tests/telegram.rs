use mockito::Matcher;
use serde_json::json;

use super::message;
use crate::channel::telegram::TelegramClient;
use crate::error::delivery::DeliveryError;
use gjallar_test_utils::constant::{TEST_TELEGRAM_BOT_TOKEN, TEST_TELEGRAM_CHAT_ID};

fn client(api_base: &str) -> TelegramClient {
    TelegramClient::with_api_base(reqwest::Client::new(), TEST_TELEGRAM_BOT_TOKEN, api_base)
}

/// Expect a sendMessage call with chat id and silent flag for quiet kinds
#[tokio::test]
async fn sends_message_silently_when_not_mentionable() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/bot{}/sendMessage", TEST_TELEGRAM_BOT_TOKEN).as_str(),
        )
        .match_body(Matcher::PartialJson(json!({
            "chat_id": TEST_TELEGRAM_CHAT_ID,
            "disable_notification": true,
        })))
        .with_status(200)
        .with_body("{\"ok\":true}")
        .create_async()
        .await;

    let result = client(&server.url())
        .send(TEST_TELEGRAM_CHAT_ID, &message(false))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    mock.assert_async().await;
}

/// Expect mentionable messages to be sent with notifications on
#[tokio::test]
async fn mentionable_message_notifies() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock(
            "POST",
            format!("/bot{}/sendMessage", TEST_TELEGRAM_BOT_TOKEN).as_str(),
        )
        .match_body(Matcher::PartialJson(json!({
            "disable_notification": false,
        })))
        .with_status(200)
        .with_body("{\"ok\":true}")
        .create_async()
        .await;

    let result = client(&server.url())
        .send(TEST_TELEGRAM_CHAT_ID, &message(true))
        .await;

    assert!(result.is_ok());
    mock.assert_async().await;
}

/// Expect a 500 answer to surface as a transient endpoint error
#[tokio::test]
async fn server_error_is_transient() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "POST",
            format!("/bot{}/sendMessage", TEST_TELEGRAM_BOT_TOKEN).as_str(),
        )
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = client(&server.url())
        .send(TEST_TELEGRAM_CHAT_ID, &message(true))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Endpoint { status: 500, .. }));
    assert!(err.is_transient());
}

/// Expect a 400 answer to be permanent; retrying the same request is useless
#[tokio::test]
async fn client_error_is_permanent() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "POST",
            format!("/bot{}/sendMessage", TEST_TELEGRAM_BOT_TOKEN).as_str(),
        )
        .with_status(400)
        .with_body("{\"ok\":false}")
        .create_async()
        .await;

    let err = client(&server.url())
        .send(TEST_TELEGRAM_CHAT_ID, &message(true))
        .await
        .unwrap_err();

    assert!(!err.is_transient());
}

/// Expect an unreachable endpoint to be a transient network error
#[tokio::test]
async fn unreachable_endpoint_is_transient() {
    let err = client("http://127.0.0.1:1")
        .send(TEST_TELEGRAM_CHAT_ID, &message(true))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::Network(_)));
    assert!(err.is_transient());
}
