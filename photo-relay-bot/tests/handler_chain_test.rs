//! Integration tests for [`photo_relay_bot::HandlerChain`] and `process_message`.
//!
//! Covers: Ignore passing control on, Stop/Reply ending the handle phase, before() vetoing the chain,
//! after() running in reverse with the final response, and Reply being delivered to the chat.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::mock_bot::{BotCall, MockBot};
use photo_relay_bot::{
    process_message, ChatTarget, Handler, HandlerChain, HandlerResponse, Message, Result,
};

/// Returns a fixed response from handle() and logs every phase into `log`.
struct ScriptedHandler {
    name: &'static str,
    response: HandlerResponse,
    allow: bool,
    log: Arc<Mutex<Vec<String>>>,
}

impl ScriptedHandler {
    fn new(name: &'static str, response: HandlerResponse, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            response,
            allow: true,
            log,
        }
    }

    fn vetoing(mut self) -> Self {
        self.allow = false;
        self
    }
}

#[async_trait]
impl Handler for ScriptedHandler {
    async fn before(&self, _message: &Message) -> Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

fn log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

/// **Test: Ignore passes to the next handler; Stop ends the handle phase; after runs in reverse with Stop.**
#[tokio::test]
async fn test_ignore_then_stop() {
    common::init_tracing();
    let log = log();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(ScriptedHandler::new("a", HandlerResponse::Ignore, log.clone())))
        .add_handler(Arc::new(ScriptedHandler::new("b", HandlerResponse::Stop, log.clone())))
        .add_handler(Arc::new(ScriptedHandler::new("c", HandlerResponse::Continue, log.clone())));

    let result = chain.handle(&common::text(1, "hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before_a",
            "before_b",
            "before_c",
            "handle_a",
            "handle_b",
            "after_c:Stop",
            "after_b:Stop",
            "after_a:Stop",
        ]
    );
}

/// **Test: before() returning false stops the chain before any handle() or after().**
#[tokio::test]
async fn test_before_veto_stops_chain() {
    let log = log();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(
            ScriptedHandler::new("gate", HandlerResponse::Continue, log.clone()).vetoing(),
        ))
        .add_handler(Arc::new(ScriptedHandler::new("next", HandlerResponse::Stop, log.clone())));

    let result = chain.handle(&common::text(1, "hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["before_gate"]);
}

/// **Test: all Continue yields Continue; every handler handles once.**
#[tokio::test]
async fn test_all_continue() {
    let count = Arc::new(AtomicUsize::new(0));

    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl Handler for Counting {
        async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerResponse::Continue)
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(Counting(count.clone())))
        .add_handler(Arc::new(Counting(count.clone())));

    assert_eq!(chain.len(), 2);
    let result = chain.handle(&common::text(1, "hi")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

/// **Test: process_message sends a Reply to the originating chat; Stop sends nothing.**
#[tokio::test]
async fn test_process_message_delivers_reply() {
    let bot = MockBot::new();
    let reply_chain = HandlerChain::new().add_handler(Arc::new(ScriptedHandler::new(
        "r",
        HandlerResponse::Reply("pong".to_string()),
        log(),
    )));

    let response = process_message(&reply_chain, &bot, &common::text(77, "ping"))
        .await
        .unwrap();

    assert_eq!(response, HandlerResponse::Reply("pong".to_string()));
    assert_eq!(
        bot.take_calls(),
        vec![BotCall::SendMessage {
            target: ChatTarget::Id(77),
            text: "pong".to_string(),
        }]
    );

    let stop_chain = HandlerChain::new().add_handler(Arc::new(ScriptedHandler::new(
        "s",
        HandlerResponse::Stop,
        log(),
    )));
    process_message(&stop_chain, &bot, &common::text(77, "ping"))
        .await
        .unwrap();
    assert!(bot.calls().is_empty());
}
