//! Handler implementations: logging, user-side submission flow, owner-side moderation.

mod logging;
mod moderation;
mod reply;
mod submission;

pub use logging::LoggingHandler;
pub use moderation::ModerationHandler;
pub use reply::edit_or_reply;
pub use submission::SubmissionHandler;
