//! Inbound update dispatch
//!
//! Classifies Telegram updates into navigation actions, runs them through
//! the [`Navigator`], and delivers the resulting payload. Delivery always
//! happens after the state transition has committed.

use crate::flow::BACK_SENTINEL;
use crate::nav::{Navigator, SelectTarget};
use crate::render::{self, RenderPayload};
use crate::telegram::{BotApi, BotClient, CallbackQuery, Message, TelegramErrorKind, Update};
use std::sync::Arc;
use std::time::Duration;

const GO_PREFIX: &str = "go:";
const POLL_RETRY_SECS: u64 = 3;

/// What a text message asks for.
enum TextAction {
    /// `/start` — conversation (re)entry.
    Start,
    /// Any non-command text — re-display the current screen.
    Resume,
    /// Other commands; the original bot registers no handler for them.
    Ignore,
}

fn classify_text(text: &str) -> TextAction {
    let Some(first) = text.split_whitespace().next() else {
        return TextAction::Resume;
    };
    if let Some(command) = first.strip_prefix('/') {
        // Commands may carry a bot mention, e.g. `/start@SomeBot`.
        let name = command.split('@').next().unwrap_or(command);
        if name == "start" {
            TextAction::Start
        } else {
            TextAction::Ignore
        }
    } else {
        TextAction::Resume
    }
}

/// Decode a callback token. Only `go:<target>` is a known shape; the
/// empty-target case is handed to the engine, which resolves it as a
/// broken link.
fn decode_token(data: &str) -> Option<SelectTarget> {
    let target = data.strip_prefix(GO_PREFIX)?;
    if target == BACK_SENTINEL {
        Some(SelectTarget::Back)
    } else {
        Some(SelectTarget::Node(target.to_string()))
    }
}

/// Routes decoded actions to the navigator and payloads back out.
pub struct Dispatcher<A: BotApi> {
    api: Arc<A>,
    navigator: Arc<Navigator>,
}

impl<A: BotApi> Dispatcher<A> {
    pub fn new(api: Arc<A>, navigator: Arc<Navigator>) -> Self {
        Self { api, navigator }
    }

    pub async fn dispatch(&self, update: Update) {
        if let Some(message) = update.message {
            self.handle_message(message).await;
        } else if let Some(query) = update.callback_query {
            self.handle_callback(query).await;
        }
    }

    async fn handle_message(&self, message: Message) {
        let Some(user) = message.from else {
            return;
        };
        let Some(text) = message.text.as_deref() else {
            return;
        };

        let payload = match classify_text(text) {
            TextAction::Start => self.navigator.enter(user.id).await,
            TextAction::Resume => self.navigator.resume(user.id).await,
            TextAction::Ignore => return,
        };
        self.send(message.chat.id, &payload).await;
    }

    async fn handle_callback(&self, query: CallbackQuery) {
        if let Err(e) = self.api.answer_callback(&query.id).await {
            tracing::warn!(error = %e, "failed to answer callback query");
        }

        let data = query.data.as_deref().unwrap_or("");
        let payload = match decode_token(data) {
            Some(target) => self.navigator.select(query.from.id, target).await,
            // Unknown token shape: fixed message, no state change.
            None => render::unrecognized(),
        };

        match query.message {
            Some(message) => {
                let chat_id = message.chat.id;
                let message_id = message.message_id;
                if let Err(e) = self.api.edit_payload(chat_id, message_id, &payload).await {
                    tracing::warn!(error = %e, chat_id, "failed to edit message");
                }
            }
            // Detached button (message expired): fall back to a fresh
            // message in the private chat.
            None => self.send(query.from.id, &payload).await,
        }
    }

    async fn send(&self, chat_id: i64, payload: &RenderPayload) {
        if let Err(e) = self.api.send_payload(chat_id, payload).await {
            tracing::warn!(error = %e, chat_id, "failed to send message");
        }
    }
}

/// Long-poll loop: fetch update batches, dispatch each on its own task so
/// slow users never stall the rest. Transient poll failures back off and
/// retry.
pub async fn run(client: Arc<BotClient>, navigator: Arc<Navigator>) {
    let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&client), navigator));
    let mut offset = 0i64;

    loop {
        match client.get_updates(offset).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    let dispatcher = Arc::clone(&dispatcher);
                    tokio::spawn(async move {
                        dispatcher.dispatch(update).await;
                    });
                }
            }
            Err(e) => {
                let delay = match e.kind {
                    TelegramErrorKind::Network => Duration::from_secs(POLL_RETRY_SECS),
                    // ok=false on getUpdates usually means a competing
                    // poller on the same token; give it longer.
                    TelegramErrorKind::Api => Duration::from_secs(POLL_RETRY_SECS * 3),
                };
                tracing::warn!(error = %e, "getUpdates failed, backing off");
                tokio::time::sleep(delay).await;
            }
        }
    }
}
