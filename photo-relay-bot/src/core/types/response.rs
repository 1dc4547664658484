//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` is sent back to the message's chat by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; the handler already produced its output.
    Stop,
    /// Not this handler's concern; try next.
    Ignore,
    /// Stop the chain and send the text to the originating chat.
    Reply(String),
}
