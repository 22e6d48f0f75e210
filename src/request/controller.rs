use std::{
    panic::AssertUnwindSafe,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use flume::{Receiver, Sender};
use futures::FutureExt;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::{http::SearchApi, model::SearchResults};

use super::{
    error::{ErrorInfo, FetchError},
    inflight::InFlight,
    query::SearchQuery,
    state::FetchState,
};

/// A finished search posted back to the controller that issued it.
#[derive(Debug)]
pub struct Completion {
    pub request_id: u64,
    pub outcome: Result<SearchResults, FetchError>,
}

/// What happened to a completion when it reached the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued after this one.
    Stale,
    /// The controller was torn down before the response arrived.
    Detached,
}

/// Owns the fetch lifecycle behind the search view.
///
/// `evaluate` is called once per frame with the committed query. A new search
/// is spawned only when the query differs from the one last issued; every
/// response is matched against the latest `request_id` so the last issued
/// search always wins, whatever order the responses arrive in.
///
/// Every spawned search posts exactly one completion while the controller is
/// mounted, a panicking call included, so `pending` only drops to zero once
/// each issued search has been received.
///
/// Spawning needs a tokio runtime, so the controller must be driven from
/// inside one.
pub struct RequestController {
    id: Uuid,
    api: Arc<dyn SearchApi>,
    state: FetchState,
    last_query: SearchQuery,
    alive: Arc<AtomicBool>,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
    pending: usize,
    in_flight: InFlight,
}

impl RequestController {
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        let (completion_tx, completion_rx) = flume::unbounded();
        let id = Uuid::new_v4();
        trace!(controller = %id, "search controller mounted");

        Self {
            id,
            api,
            state: FetchState::default(),
            last_query: SearchQuery::default(),
            alive: Arc::new(AtomicBool::new(true)),
            completion_tx,
            completion_rx,
            pending: 0,
            in_flight: InFlight::new(),
        }
    }

    pub fn evaluate(&mut self, url: &str, query: &SearchQuery) -> &FetchState {
        self.pump();

        if self.is_mounted() && *query != self.last_query {
            self.issue(url, query.clone());
        }

        &self.state
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Searches issued whose completion has not been received yet.
    pub fn in_flight(&self) -> usize {
        self.pending
    }

    /// Applies every completion that has already been posted and returns how
    /// many of them changed the visible state.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            if self.receive(completion) == Resolution::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Waits for the next completion and applies it. Returns `None` when no
    /// search is queued or running.
    pub async fn settle_next(&mut self) -> Option<Resolution> {
        if !self.is_mounted() || self.pending == 0 {
            return None;
        }
        let completion = self.completion_rx.recv_async().await.ok()?;
        Some(self.receive(completion))
    }

    pub async fn join_pending(&mut self) {
        self.in_flight.join_all().await;
    }

    pub fn apply(&mut self, completion: Completion) -> Resolution {
        let Completion {
            request_id,
            outcome,
        } = completion;

        if !self.is_mounted() {
            trace!(controller = %self.id, request_id, "dropping response after teardown");
            return Resolution::Detached;
        }

        if request_id != self.state.request_id {
            debug!(
                controller = %self.id,
                request_id,
                latest = self.state.request_id,
                "discarding stale search response"
            );
            return Resolution::Stale;
        }

        self.state = match outcome {
            Ok(results) => {
                debug!(controller = %self.id, request_id, songs = results.len(), "search succeeded");
                FetchState::success(request_id, results)
            }
            Err(err) => {
                tracing::warn!(controller = %self.id, request_id, "search failed: {}", err);
                FetchState::failed(request_id, ErrorInfo::from(&err))
            }
        };
        Resolution::Applied
    }

    fn receive(&mut self, completion: Completion) -> Resolution {
        self.pending = self.pending.saturating_sub(1);
        self.apply(completion)
    }

    /// Detaches the controller from its pending searches. Running calls are
    /// left to finish but their results are never applied.
    pub fn teardown(&mut self) {
        if self.alive.swap(false, Ordering::AcqRel) {
            trace!(
                controller = %self.id,
                pending = self.pending,
                running = self.in_flight.running(),
                "search controller torn down"
            );
        }
        while self.completion_rx.try_recv().is_ok() {}
        self.pending = 0;
    }

    fn issue(&mut self, url: &str, query: SearchQuery) {
        let request_id = self.state.request_id + 1;
        self.state = FetchState::loading(request_id);
        debug!(
            controller = %self.id,
            request_id,
            text = %query.text,
            words = %query.words,
            "issuing search"
        );

        let api = Arc::clone(&self.api);
        let tx = self.completion_tx.clone();
        let alive = Arc::clone(&self.alive);
        let url = url.to_owned();
        let text = query.text.clone();
        let words = query.words.clone();
        self.last_query = query;

        let task = tokio::spawn(async move {
            let outcome = AssertUnwindSafe(api.search(&url, &text, &words))
                .catch_unwind()
                .await
                .unwrap_or_else(|_| {
                    tracing::error!(request_id, "search call panicked");
                    Err(FetchError::Network("search call panicked".to_string()))
                });
            if !alive.load(Ordering::Acquire) {
                trace!(request_id, "controller gone, response ignored");
                return;
            }
            let _ = tx.send(Completion {
                request_id,
                outcome,
            });
        });
        self.pending += 1;
        self.in_flight.track(request_id, task);
    }
}

impl Drop for RequestController {
    fn drop(&mut self) {
        self.teardown();
    }
}
