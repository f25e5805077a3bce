//! Reactive query synchronization controller.
//!
//! [`SearchController`] owns exactly one logical current query and one
//! current result set, and keeps them consistent under asynchronous,
//! possibly reordered remote completions. Every value change to the
//! query issues a lookup through the gateway; each lookup carries a
//! monotonically increasing ticket, and a completion is applied only if
//! its ticket is still the latest issued. A response that arrives after
//! its query was superseded is dropped, never merged, never queued.

use std::sync::{Arc, Mutex};

use curio_core::Work;
use curio_gateway::{ops, Gateway, GatewayError};
use tokio::sync::broadcast;

use crate::events::SearchEvent;

/// Broadcast channel capacity for search events.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Reactive controller binding a mutable query string to backend lookups.
///
/// Cheap to clone; all clones share the same state and event channel.
///
/// # Concurrency
///
/// `set_query` returns immediately: the lookup runs on a spawned task and
/// reconciles its outcome later. In-flight lookups are never cancelled;
/// a newer query simply outranks them at reconciliation time. The
/// controller must be used from within a tokio runtime.
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<ControllerInner>,
}

struct ControllerInner {
    gateway: Arc<dyn Gateway>,
    state: Mutex<SearchState>,
    event_tx: broadcast::Sender<SearchEvent>,
}

#[derive(Default)]
struct SearchState {
    query: String,
    works: Vec<Work>,
    /// Ticket of the most recently issued lookup. A completion whose
    /// ticket is older than this is stale.
    issued: u64,
}

impl SearchController {
    /// Create a controller with an empty query and an empty result set.
    ///
    /// Construction issues no lookup; call [`refresh`](Self::refresh) to
    /// request the initial population explicitly.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(ControllerInner {
                gateway,
                state: Mutex::new(SearchState::default()),
                event_tx,
            }),
        }
    }

    /// Current query text. Synchronous, no side effects.
    pub fn query(&self) -> String {
        self.inner.lock_state().query.clone()
    }

    /// Current result set. Synchronous, no side effects.
    pub fn works(&self) -> Vec<Work> {
        self.inner.lock_state().works.clone()
    }

    /// Replace the query and, if its value changed, issue a lookup.
    ///
    /// Change detection is over the query's value: setting the current
    /// value again is a no-op and issues no lookup. Use
    /// [`refresh`](Self::refresh) to re-run the current query.
    ///
    /// Returns immediately; the lookup proceeds independently and a
    /// failure never propagates to this caller.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();

        let ticket = {
            let mut state = self.inner.lock_state();
            if state.query == text {
                return;
            }
            state.query = text.clone();
            state.issued += 1;
            state.issued
        };

        self.inner.emit(SearchEvent::QueryChanged {
            query: text.clone(),
        });
        self.inner.spawn_lookup(ticket, text);
    }

    /// Issue a lookup for the current query without requiring a value
    /// change. This is the recovery path after a failed lookup and the
    /// way the initial population is requested.
    pub fn refresh(&self) {
        let (ticket, query) = {
            let mut state = self.inner.lock_state();
            state.issued += 1;
            (state.issued, state.query.clone())
        };

        self.inner.spawn_lookup(ticket, query);
    }

    /// Subscribe to the controller's observable state changes.
    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.inner.event_tx.subscribe()
    }
}

impl ControllerInner {
    fn lock_state(&self) -> std::sync::MutexGuard<'_, SearchState> {
        self.state.lock().expect("search state lock poisoned")
    }

    /// Publish an event. Zero receivers is fine; the send error only
    /// means nobody is listening.
    fn emit(&self, event: SearchEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Spawn the lookup task for a captured `(ticket, query)` pair.
    fn spawn_lookup(self: &Arc<Self>, ticket: u64, query: String) {
        let inner = Arc::clone(self);

        tokio::spawn(async move {
            let result = ops::work_query(inner.gateway.as_ref(), &query).await;
            inner.reconcile(ticket, query, result);
        });
    }

    /// Fold a completed lookup into the controller state.
    ///
    /// Success for the latest issued ticket replaces the result set
    /// wholesale. Success for an older ticket is dropped. Failure leaves
    /// the result set at its last known-good value.
    fn reconcile(&self, ticket: u64, query: String, result: Result<Vec<Work>, GatewayError>) {
        match result {
            Ok(works) => {
                let applied_count = {
                    let mut state = self.lock_state();
                    if ticket == state.issued {
                        let count = works.len();
                        state.works = works;
                        Some(count)
                    } else {
                        None
                    }
                };

                match applied_count {
                    Some(count) => {
                        tracing::debug!(query = %query, count, "search results updated");
                        self.emit(SearchEvent::ResultsUpdated { query, count });
                    }
                    None => {
                        tracing::debug!(query = %query, "dropping stale search response");
                        self.emit(SearchEvent::StaleLookupDropped { query });
                    }
                }
            }
            Err(error) => {
                tracing::warn!(query = %query, error = %error, "search lookup failed");
                self.emit(SearchEvent::LookupFailed {
                    query,
                    error: error.to_string(),
                });
            }
        }
    }
}
