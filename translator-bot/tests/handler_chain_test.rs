//! Tests for HandlerChain ordering: before gates the chain, handle stops at
//! the first Stop/Reply, after runs for every handler.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use translator_bot::{
    Chat, Handler, HandlerChain, HandlerResponse, Message, MessageDirection,
    Result as BotResult, User,
};

/// Records the phases it runs through; configurable responses per phase.
struct RecordingHandler {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    before_result: bool,
    handle_result: HandlerResponse,
}

impl RecordingHandler {
    fn new(
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        before_result: bool,
        handle_result: HandlerResponse,
    ) -> Self {
        Self {
            name,
            log,
            before_result,
            handle_result,
        }
    }
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> BotResult<bool> {
        self.log.lock().unwrap().push(format!("{}:before", self.name));
        Ok(self.before_result)
    }

    async fn handle(&self, _message: &Message) -> BotResult<HandlerResponse> {
        self.log.lock().unwrap().push(format!("{}:handle", self.name));
        Ok(self.handle_result.clone())
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> BotResult<()> {
        self.log.lock().unwrap().push(format!("{}:after", self.name));
        Ok(())
    }
}

fn make_message() -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 1,
            username: None,
            first_name: None,
            last_name: None,
        },
        chat: Chat {
            id: 2,
            chat_type: "private".to_string(),
        },
        content: "text".to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
        reply_to_message_id: None,
    }
}

#[tokio::test]
async fn runs_before_handle_after_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new(
            "a",
            log.clone(),
            true,
            HandlerResponse::Continue,
        )))
        .add_handler(Arc::new(RecordingHandler::new(
            "b",
            log.clone(),
            true,
            HandlerResponse::Continue,
        )));

    let response = chain.handle(&make_message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);

    let entries = log.lock().unwrap().clone();
    // before in order, handle in order, after in reverse
    assert_eq!(
        entries,
        vec![
            "a:before", "b:before", "a:handle", "b:handle", "b:after", "a:after"
        ]
    );
}

#[tokio::test]
async fn before_false_stops_everything() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new(
            "a",
            log.clone(),
            false,
            HandlerResponse::Continue,
        )))
        .add_handler(Arc::new(RecordingHandler::new(
            "b",
            log.clone(),
            true,
            HandlerResponse::Continue,
        )));

    let response = chain.handle(&make_message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);

    let entries = log.lock().unwrap().clone();
    assert_eq!(entries, vec!["a:before"]);
}

#[tokio::test]
async fn reply_ends_handle_phase_but_after_still_runs() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new(
            "a",
            log.clone(),
            true,
            HandlerResponse::Reply("done".to_string()),
        )))
        .add_handler(Arc::new(RecordingHandler::new(
            "b",
            log.clone(),
            true,
            HandlerResponse::Continue,
        )));

    let response = chain.handle(&make_message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Reply("done".to_string()));

    let entries = log.lock().unwrap().clone();
    assert_eq!(
        entries,
        vec!["a:before", "b:before", "a:handle", "b:after", "a:after"]
    );
}

#[tokio::test]
async fn ignore_falls_through_to_next_handler() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(RecordingHandler::new(
            "a",
            log.clone(),
            true,
            HandlerResponse::Ignore,
        )))
        .add_handler(Arc::new(RecordingHandler::new(
            "b",
            log.clone(),
            true,
            HandlerResponse::Stop,
        )));

    let response = chain.handle(&make_message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Stop);

    let entries = log.lock().unwrap().clone();
    assert!(entries.contains(&"a:handle".to_string()));
    assert!(entries.contains(&"b:handle".to_string()));
}

#[tokio::test]
async fn empty_chain_returns_continue() {
    let chain = HandlerChain::new();
    let response = chain.handle(&make_message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
