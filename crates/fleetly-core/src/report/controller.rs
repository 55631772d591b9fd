// ── Report fetch lifecycle ──
//
// Generation-tagged fetch state machine. Overlapping submissions are not
// cancelled; instead every submission takes a fresh generation number and
// a completion that is no longer the newest generation is discarded
// wholesale. Displayed state therefore always reflects the last
// submission, not whichever response happened to resolve last.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::CoreError;

/// Fetch lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Observable controller state.
#[derive(Debug, Clone)]
pub struct ReportState<R> {
    pub phase: FetchPhase,
    /// True while the newest submission is in flight. Consumers overlay a
    /// loading indicator over the (stale) items rather than blanking them.
    pub loading: bool,
    /// Records from the last successful fetch. Kept through reloads and
    /// failures.
    pub items: Vec<R>,
    /// Diagnostic text from the most recent failure.
    pub error: Option<String>,
}

impl<R> Default for ReportState<R> {
    fn default() -> Self {
        Self {
            phase: FetchPhase::Idle,
            loading: false,
            items: Vec::new(),
            error: None,
        }
    }
}

/// Async source of report records for one query type.
pub trait ReportSource: Send + Sync {
    type Query: Send + Sync;
    type Record: Clone + Send + Sync + 'static;

    fn fetch(
        &self,
        query: &Self::Query,
    ) -> impl Future<Output = Result<Vec<Self::Record>, CoreError>> + Send;
}

/// Orchestrates the fetch lifecycle for one report surface.
///
/// State is observable through a `watch` channel; every mutation is a
/// single `send_modify` so subscribers only ever see consistent states.
pub struct ReportFetchController<S: ReportSource> {
    source: S,
    generation: AtomicU64,
    state: watch::Sender<ReportState<S::Record>>,
}

impl<S: ReportSource> ReportFetchController<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(ReportState::default());
        Self {
            source,
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ReportState<S::Record>> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ReportState<S::Record> {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Records from the last successful fetch.
    pub fn items(&self) -> Vec<S::Record> {
        self.state.borrow().items.clone()
    }

    /// Run one fetch to completion.
    ///
    /// Entering the loading state keeps the previous items visible. On
    /// success the items are replaced; on failure they are left untouched
    /// and the diagnostic text is surfaced. Either way the newest
    /// generation always leaves `loading == false` behind. A submission
    /// that has been superseded while in flight touches nothing at all,
    /// not even the loading flag, which still belongs to the newer fetch.
    pub async fn submit(&self, query: &S::Query) -> Result<(), CoreError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.phase = FetchPhase::Loading;
            state.loading = true;
        });

        let result = self.source.fetch(query).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "discarding superseded report response");
            return Ok(());
        }

        match result {
            Ok(items) => {
                debug!(generation, count = items.len(), "report fetch succeeded");
                self.state.send_modify(|state| {
                    state.phase = FetchPhase::Success;
                    state.loading = false;
                    state.items = items;
                    state.error = None;
                });
                Ok(())
            }
            Err(err) => {
                warn!(generation, %err, "report fetch failed");
                self.state.send_modify(|state| {
                    state.phase = FetchPhase::Failed;
                    state.loading = false;
                    state.error = Some(err.to_string());
                });
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use tokio::sync::oneshot;

    use super::*;

    /// Source that answers each fetch with the next scripted response,
    /// released by the test through a oneshot channel.
    struct QueuedSource {
        responses: Mutex<VecDeque<oneshot::Receiver<Result<Vec<String>, CoreError>>>>,
    }

    impl QueuedSource {
        fn new(
            receivers: impl IntoIterator<Item = oneshot::Receiver<Result<Vec<String>, CoreError>>>,
        ) -> Self {
            Self {
                responses: Mutex::new(receivers.into_iter().collect()),
            }
        }
    }

    impl ReportSource for QueuedSource {
        type Query = u32;
        type Record = String;

        async fn fetch(&self, _query: &u32) -> Result<Vec<String>, CoreError> {
            let receiver = self
                .responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .expect("unscripted fetch");
            receiver.await.expect("response sender dropped")
        }
    }

    /// Source that resolves immediately.
    struct InstantSource {
        response: fn() -> Result<Vec<String>, CoreError>,
    }

    impl ReportSource for InstantSource {
        type Query = u32;
        type Record = String;

        async fn fetch(&self, _query: &u32) -> Result<Vec<String>, CoreError> {
            (self.response)()
        }
    }

    fn rows(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_owned()).collect()
    }

    #[tokio::test]
    async fn success_path_replaces_items_and_clears_loading() {
        let controller = ReportFetchController::new(InstantSource {
            response: || Ok(vec!["a".to_owned()]),
        });

        controller.submit(&1).await.unwrap();

        let state = controller.state();
        assert_eq!(state.phase, FetchPhase::Success);
        assert!(!state.loading);
        assert_eq!(state.items, rows(&["a"]));
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn failure_keeps_previous_items_and_surfaces_diagnostic() {
        let (tx1, rx1) = oneshot::channel();
        let (tx2, rx2) = oneshot::channel();
        let controller = ReportFetchController::new(QueuedSource::new([rx1, rx2]));

        tx1.send(Ok(rows(&["kept"]))).unwrap();
        controller.submit(&1).await.unwrap();

        tx2.send(Err(CoreError::Report {
            message: "boom".to_owned(),
            status: Some(500),
        }))
        .unwrap();
        let result = controller.submit(&2).await;
        assert!(result.is_err());

        let state = controller.state();
        assert_eq!(state.phase, FetchPhase::Failed);
        assert!(!state.loading);
        assert_eq!(state.items, rows(&["kept"]));
        assert!(state.error.unwrap().contains("boom"));
    }

    #[tokio::test]
    async fn loading_flag_tracks_the_newest_submission() {
        let (tx, rx) = oneshot::channel();
        let controller = ReportFetchController::new(QueuedSource::new([rx]));

        let submit = controller.submit(&1);
        let observe = async {
            tokio::task::yield_now().await;
            assert!(controller.is_loading());
            tx.send(Ok(rows(&["a"]))).unwrap();
        };
        let (result, ()) = tokio::join!(submit, observe);
        result.unwrap();
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn superseded_response_is_discarded_wholesale() {
        let (tx1, rx1) = oneshot::channel();
        let (tx2, rx2) = oneshot::channel();
        let controller = ReportFetchController::new(QueuedSource::new([rx1, rx2]));

        let first = controller.submit(&1);
        let second = controller.submit(&2);
        let driver = async {
            // Resolve the newer submission first, then the stale one.
            tx2.send(Ok(rows(&["newest"]))).unwrap();
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            tx1.send(Ok(rows(&["stale"]))).unwrap();
        };
        let (first_result, second_result, ()) = tokio::join!(first, second, driver);
        first_result.unwrap();
        second_result.unwrap();

        let state = controller.state();
        assert_eq!(state.items, rows(&["newest"]));
        assert_eq!(state.phase, FetchPhase::Success);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn stale_completion_does_not_clear_loading_of_inflight_fetch() {
        let (tx1, rx1) = oneshot::channel();
        let (_tx2, rx2) = oneshot::channel();
        let controller =
            std::sync::Arc::new(ReportFetchController::new(QueuedSource::new([rx1, rx2])));

        let first = {
            let controller = std::sync::Arc::clone(&controller);
            tokio::spawn(async move { controller.submit(&1).await })
        };
        tokio::task::yield_now().await;

        // Second submission supersedes the first and stays in flight.
        let _second = {
            let controller = std::sync::Arc::clone(&controller);
            tokio::spawn(async move { controller.submit(&2).await })
        };
        tokio::task::yield_now().await;

        tx1.send(Ok(rows(&["stale"]))).unwrap();
        first.await.unwrap().unwrap();

        let state = controller.state();
        // The stale completion was discarded: items untouched, loading
        // still owned by the in-flight second submission.
        assert!(state.items.is_empty());
        assert!(state.loading);
    }
}
