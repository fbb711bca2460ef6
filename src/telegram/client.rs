//! Long-polling client for the Bot API

use super::types::{ApiResponse, InlineKeyboardMarkup, Update};
use crate::render::RenderPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// How long getUpdates holds the connection open server-side.
const LONG_POLL_SECS: u64 = 30;

/// Transport error with classification.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TelegramError {
    pub kind: TelegramErrorKind,
    pub message: String,
}

impl TelegramError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: TelegramErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self {
            kind: TelegramErrorKind::Api,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramErrorKind {
    /// Connection problems, timeouts, bad transport payloads.
    Network,
    /// The API answered with ok=false.
    Api,
}

/// Outbound surface of the transport. The dispatcher is generic over this
/// so tests can swap in a recording mock.
#[async_trait]
pub trait BotApi: Send + Sync {
    /// Send a payload as a fresh message.
    async fn send_payload(
        &self,
        chat_id: i64,
        payload: &RenderPayload,
    ) -> Result<(), TelegramError>;

    /// Rewrite an existing message in place (button-press responses).
    async fn edit_payload(
        &self,
        chat_id: i64,
        message_id: i64,
        payload: &RenderPayload,
    ) -> Result<(), TelegramError>;

    /// Acknowledge a callback query so the client stops its spinner.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), TelegramError>;
}

pub struct BotClient {
    client: Client,
    base_url: String,
}

impl BotClient {
    pub fn new(token: &str) -> Result<Self, TelegramError> {
        // Client timeout must outlast the server-side long poll.
        let client = Client::builder()
            .timeout(Duration::from_secs(LONG_POLL_SECS + 10))
            .build()
            .map_err(|e| TelegramError::network(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: format!("https://api.telegram.org/bot{token}"),
        })
    }

    /// Long-poll for the next batch of updates. `offset` acknowledges
    /// everything below it.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &json!({
                "offset": offset,
                "timeout": LONG_POLL_SECS,
                "allowed_updates": ["message", "callback_query"],
            }),
        )
        .await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<T, TelegramError> {
        let response = self
            .client
            .post(format!("{}/{method}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| TelegramError::network(format!("{method}: {e}")))?;

        let api: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::network(format!("{method}: bad response body: {e}")))?;

        if api.ok {
            api.result
                .ok_or_else(|| TelegramError::api(format!("{method}: ok but empty result")))
        } else {
            let description = api.description.unwrap_or_else(|| "unknown error".to_string());
            Err(TelegramError::api(format!("{method}: {description}")))
        }
    }

    /// For methods whose result we don't care about (Message, bool, ...).
    async fn call_discarding(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<(), TelegramError> {
        let _: serde_json::Value = self.call(method, body).await?;
        Ok(())
    }
}

#[async_trait]
impl BotApi for BotClient {
    async fn send_payload(
        &self,
        chat_id: i64,
        payload: &RenderPayload,
    ) -> Result<(), TelegramError> {
        self.call_discarding(
            "sendMessage",
            &json!({
                "chat_id": chat_id,
                "text": payload.text,
                "reply_markup": InlineKeyboardMarkup::from_payload(payload),
                "disable_web_page_preview": true,
            }),
        )
        .await
    }

    async fn edit_payload(
        &self,
        chat_id: i64,
        message_id: i64,
        payload: &RenderPayload,
    ) -> Result<(), TelegramError> {
        self.call_discarding(
            "editMessageText",
            &json!({
                "chat_id": chat_id,
                "message_id": message_id,
                "text": payload.text,
                "reply_markup": InlineKeyboardMarkup::from_payload(payload),
                "disable_web_page_preview": true,
            }),
        )
        .await
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), TelegramError> {
        self.call_discarding(
            "answerCallbackQuery",
            &json!({ "callback_query_id": callback_id }),
        )
        .await
    }
}
