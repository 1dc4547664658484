//! # Photo relay bot
//!
//! Users send a photo, optionally add a caption or a poll, and the owner approves or rejects the submission;
//! approved posts are published to a channel.
//!
//! Core (Handler, Bot, Message), chain (HandlerChain), and telegram (dispatcher, adapters) are transport layers;
//! handlers, session, approval, poll and callback hold the relay logic.

pub mod approval;
pub mod callback;
pub mod chain;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod keyboards;
pub mod poll;
pub mod runner;
pub mod session;
pub mod telegram;
pub mod texts;

pub use cli::{load_config, version_line, Cli, Commands};

pub use crate::core::{
    init_tracing, Bot, Chat, ChatTarget, Handler, HandlerResponse, InlineButton,
    InlineKeyboard, Message, MessageKind, RelayError, Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;

pub use telegram::{
    process_callback, process_message, run_dispatcher, TelegramBotAdapter, TelegramCallbackWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};

pub use approval::{Approval, ApprovalStore, InMemoryApprovalStore, SqliteApprovalStore, Submission};
pub use callback::CallbackAction;
pub use components::{build_bot_components, build_handler_chain, create_approval_store, BotComponents};
pub use config::{ApprovalStoreType, BotConfig};
pub use handlers::{edit_or_reply, LoggingHandler, ModerationHandler, SubmissionHandler};
pub use poll::{parse_poll_args, PollDraft, PollError};
pub use runner::run_bot;
pub use session::{Draft, Session, SessionStore};
