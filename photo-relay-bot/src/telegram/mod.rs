//! Telegram framework layer: adapters, Bot implementation, dispatcher runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{
    parse_command, TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{process_callback, process_message, run_dispatcher};
