//! Telegram transport
//!
//! Thin I/O wrapper around the Bot API: wire types, a long-polling
//! reqwest client, and the outbound trait the dispatcher is tested
//! against. Nothing in here knows about navigation semantics.

mod client;
mod types;

pub use client::{BotApi, BotClient, TelegramError, TelegramErrorKind};
pub use types::{
    CallbackQuery, Chat, InlineKeyboardButton, InlineKeyboardMarkup, Message, Update, User,
};
