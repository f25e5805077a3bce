//! Shared test harness: a scripted gateway whose completions the test
//! resolves by hand, in whatever order the scenario needs.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use curio_client::SearchEvent;
use curio_gateway::{Gateway, GatewayError};
use serde_json::{json, Value};
use tokio::sync::{broadcast, mpsc, oneshot};

/// How long to wait for something that should happen promptly.
const WAIT: Duration = Duration::from_secs(5);

/// How long to wait before declaring that something did NOT happen.
const QUIET: Duration = Duration::from_millis(100);

/// One invocation captured by the [`ScriptedGateway`], waiting for the
/// test to decide its outcome.
pub struct PendingCall {
    pub operation: String,
    pub args: Value,
    responder: oneshot::Sender<Result<Value, GatewayError>>,
}

impl PendingCall {
    /// Complete the call successfully with the given JSON result.
    pub fn resolve(self, value: Value) {
        let _ = self.responder.send(Ok(value));
    }

    /// Complete the call with a backend failure.
    pub fn fail(self, status: u16, message: &str) {
        let _ = self.responder.send(Err(GatewayError::Backend {
            status,
            message: message.to_string(),
        }));
    }
}

/// Gateway whose calls block until the test resolves them.
///
/// Invocations are delivered to the paired receiver in issue order; each
/// carries its own response channel, so the test can complete them out
/// of order to simulate reordered backend responses.
pub struct ScriptedGateway {
    call_tx: mpsc::UnboundedSender<PendingCall>,
}

impl ScriptedGateway {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingCall>) {
        let (call_tx, call_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { call_tx }), call_rx)
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn invoke(&self, operation: &str, args: Value) -> Result<Value, GatewayError> {
        let (responder, outcome) = oneshot::channel();

        self.call_tx
            .send(PendingCall {
                operation: operation.to_string(),
                args,
                responder,
            })
            .expect("test dropped the call receiver");

        outcome
            .await
            .unwrap_or_else(|_| Err(GatewayError::Transport("scripted call dropped".into())))
    }
}

/// Wait for the next gateway invocation.
pub async fn next_call(calls: &mut mpsc::UnboundedReceiver<PendingCall>) -> PendingCall {
    tokio::time::timeout(WAIT, calls.recv())
        .await
        .expect("timed out waiting for a gateway call")
        .expect("gateway call channel closed")
}

/// Assert that no further invocation arrives.
pub async fn expect_no_call(calls: &mut mpsc::UnboundedReceiver<PendingCall>) {
    let outcome = tokio::time::timeout(QUIET, calls.recv()).await;
    assert!(outcome.is_err(), "expected no gateway call, but one arrived");
}

/// Wait for the next controller event.
pub async fn next_event(events: &mut broadcast::Receiver<SearchEvent>) -> SearchEvent {
    tokio::time::timeout(WAIT, events.recv())
        .await
        .expect("timed out waiting for a search event")
        .expect("event channel closed")
}

/// Assert that no further event is emitted.
pub async fn expect_no_event(events: &mut broadcast::Receiver<SearchEvent>) {
    let outcome = tokio::time::timeout(QUIET, events.recv()).await;
    assert!(outcome.is_err(), "expected no event, but got {outcome:?}");
}

/// A minimal backend-shaped work row.
pub fn work_row(id: i64, path: &str) -> Value {
    json!({
        "path": path,
        "work_id": id,
        "size": 1024,
        "title": null,
        "author_id": null,
        "caption": null,
        "url": null,
        "hash": 0,
    })
}

/// A minimal backend-shaped editable payload.
pub fn work_edit_row(id: i64, path: &str) -> Value {
    json!({
        "work_id": id,
        "path": path,
        "title": null,
        "author": null,
        "caption": null,
        "url": null,
        "tags": [],
    })
}
