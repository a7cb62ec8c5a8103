//! Query State
//!
//! Lifecycle of one asynchronous retrieval per view, its render branch,
//! and the Leptos hooks that drive it.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::{ApiError, UNKNOWN_ERROR};

/// Placeholder rows shown while a list loads
pub const SKELETON_ROWS: usize = 3;

const RETRY_BASE_DELAY_MS: u32 = 1_000;
const RETRY_MAX_DELAY_MS: u32 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
}

impl RetryPolicy {
    pub const DISABLED: RetryPolicy = RetryPolicy { max_retries: 0 };

    pub const fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Backoff before retry number `attempt` (0-based): 1s, 2s, 4s ... capped at 30s
    pub fn delay_ms(&self, attempt: u32) -> u32 {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        RETRY_BASE_DELAY_MS.saturating_mul(factor).min(RETRY_MAX_DELAY_MS)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Error(ApiError),
}

/// What a list view draws for its current state
#[derive(Debug, Clone, PartialEq)]
pub enum RenderBranch<T> {
    Placeholders(usize),
    Message(String),
    Rows(Vec<T>),
}

/// Coarse state for single-record pages, so a form is built once
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Failed(String),
    Ready,
}

impl<T> FetchState<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            FetchState::Idle | FetchState::Loading => Phase::Loading,
            FetchState::Success(_) => Phase::Ready,
            FetchState::Error(err) => {
                Phase::Failed(err.message().unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
            }
        }
    }

    /// Reason text for the error block
    pub fn error_text(&self) -> Option<String> {
        match self {
            FetchState::Error(err) => {
                Some(err.message().unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
            }
            _ => None,
        }
    }
}

impl<T: Clone> FetchState<Vec<T>> {
    pub fn branch(&self) -> RenderBranch<T> {
        match self {
            // Idle only exists until the mount effect runs
            FetchState::Idle | FetchState::Loading => RenderBranch::Placeholders(SKELETON_ROWS),
            FetchState::Error(err) => {
                RenderBranch::Message(err.message().unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
            }
            FetchState::Success(items) => RenderBranch::Rows(items.clone()),
        }
    }
}

/// Identifies one started retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, PartialEq)]
pub enum Settled<T> {
    /// Write this state to the view
    Apply(FetchState<T>),
    /// Run the retrieval again after the delay
    RetryAfter(u32),
    /// The view is gone or a newer retrieval started
    Stale,
}

/// Decides what to do with each outcome of a view's retrieval
#[derive(Debug)]
pub struct QueryTracker {
    policy: RetryPolicy,
    generation: u64,
    failures: u32,
    disposed: bool,
}

impl QueryTracker {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            generation: 0,
            failures: 0,
            disposed: false,
        }
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.failures = 0;
        Ticket(self.generation)
    }

    pub fn settle<T>(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Settled<T> {
        if !self.is_live(ticket) {
            return Settled::Stale;
        }
        match result {
            Ok(value) => Settled::Apply(FetchState::Success(value)),
            Err(err) if self.failures < self.policy.max_retries => {
                let delay = self.policy.delay_ms(self.failures);
                self.failures += 1;
                log::warn!(
                    "[query] attempt {} failed ({}), retrying in {}ms",
                    self.failures,
                    err,
                    delay
                );
                Settled::RetryAfter(delay)
            }
            Err(err) => Settled::Apply(FetchState::Error(err)),
        }
    }

    /// Whether results for `ticket` would still be applied
    pub fn is_live(&self, ticket: Ticket) -> bool {
        !self.disposed && ticket.0 == self.generation
    }

    /// Retrievals made so far for the current ticket
    pub fn attempts(&self) -> u32 {
        self.failures + 1
    }

    /// Called when the view is torn down; later results are dropped
    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

fn lock(tracker: &Mutex<QueryTracker>) -> MutexGuard<'_, QueryTracker> {
    tracker.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start a retrieval when the calling component mounts.
///
/// Results arriving after the component's owner is cleaned up are
/// discarded; the request itself is not cancelled.
pub fn use_query<T, F, Fut>(policy: RetryPolicy, fetch: F) -> ReadSignal<FetchState<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let (state, set_state) = signal(FetchState::Idle);
    let tracker = Arc::new(Mutex::new(QueryTracker::new(policy)));

    on_cleanup({
        let tracker = Arc::clone(&tracker);
        move || lock(&tracker).dispose()
    });

    // Load on mount
    Effect::new(move |_| {
        let ticket = lock(&tracker).begin();
        set_state.set(FetchState::Loading);
        let tracker = Arc::clone(&tracker);
        let fetch = fetch.clone();
        spawn_local(async move {
            loop {
                let result = fetch().await;
                let settled = lock(&tracker).settle(ticket, result);
                match settled {
                    Settled::Apply(next) => {
                        let _ = set_state.try_set(next);
                        break;
                    }
                    Settled::RetryAfter(delay) => {
                        TimeoutFuture::new(delay).await;
                        if !lock(&tracker).is_live(ticket) {
                            log::debug!("[query] view closed during backoff, not retrying");
                            break;
                        }
                    }
                    Settled::Stale => {
                        log::debug!("[query] discarding result for a closed view");
                        break;
                    }
                }
            }
        });
    });

    state
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationState {
    Idle,
    Pending,
    Success,
    Error(String),
}

impl MutationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }
}

/// Wrap an API call as a fire-and-forget action with observable state
pub fn use_mutation<A, R, F, Fut>(mutation_fn: F) -> (Callback<A>, ReadSignal<MutationState>)
where
    A: 'static,
    R: 'static,
    F: Fn(A) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<R, ApiError>> + 'static,
{
    let (state, set_state) = signal(MutationState::Idle);
    let mutate = Callback::new(move |args: A| {
        set_state.set(MutationState::Pending);
        let fut = mutation_fn(args);
        spawn_local(async move {
            let next = match fut.await {
                Ok(_) => MutationState::Success,
                Err(err) => {
                    log::error!("[mutation] failed: {}", err);
                    MutationState::Error(err.message().unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
                }
            };
            let _ = set_state.try_set(next);
        });
    });
    (mutate, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_down() -> ApiError {
        ApiError::Network(Some("network down".into()))
    }

    #[test]
    fn test_empty_success_renders_zero_rows() {
        let mut tracker = QueryTracker::new(RetryPolicy::new(3));
        let ticket = tracker.begin();
        let Settled::Apply(state) = tracker.settle(ticket, Ok(Vec::<u32>::new())) else {
            panic!("expected state");
        };
        assert_eq!(state, FetchState::Success(vec![]));
        assert_eq!(state.branch(), RenderBranch::Rows(vec![]));
    }

    #[test]
    fn test_failure_without_retry_is_terminal() {
        let mut tracker = QueryTracker::new(RetryPolicy::DISABLED);
        let ticket = tracker.begin();
        let settled = tracker.settle::<Vec<u32>>(ticket, Err(network_down()));
        let Settled::Apply(state) = settled else {
            panic!("expected state");
        };
        assert_eq!(state.branch(), RenderBranch::Message("network down".into()));
        assert_eq!(tracker.attempts(), 1);
    }

    #[test]
    fn test_retries_back_off_then_fail() {
        let mut tracker = QueryTracker::new(RetryPolicy::new(3));
        let ticket = tracker.begin();
        let mut delays = Vec::new();
        loop {
            match tracker.settle::<Vec<u32>>(ticket, Err(network_down())) {
                Settled::RetryAfter(ms) => delays.push(ms),
                Settled::Apply(state) => {
                    assert_eq!(state.error_text().as_deref(), Some("network down"));
                    break;
                }
                Settled::Stale => panic!("unexpected stale"),
            }
        }
        assert_eq!(delays, vec![1_000, 2_000, 4_000]);
        assert_eq!(tracker.attempts(), 4);
    }

    #[test]
    fn test_retry_then_success() {
        let mut tracker = QueryTracker::new(RetryPolicy::new(3));
        let ticket = tracker.begin();
        assert_eq!(tracker.settle::<u32>(ticket, Err(network_down())), Settled::RetryAfter(1_000));
        assert_eq!(tracker.settle(ticket, Ok(5u32)), Settled::Apply(FetchState::Success(5)));
    }

    #[test]
    fn test_result_after_dispose_is_stale() {
        let mut tracker = QueryTracker::new(RetryPolicy::DISABLED);
        let ticket = tracker.begin();
        tracker.dispose();
        assert_eq!(tracker.settle(ticket, Ok(1u32)), Settled::Stale);
    }

    #[test]
    fn test_dispose_during_backoff_stops_retrying() {
        let mut tracker = QueryTracker::new(RetryPolicy::new(3));
        let ticket = tracker.begin();
        assert_eq!(tracker.settle::<u32>(ticket, Err(network_down())), Settled::RetryAfter(1_000));
        assert!(tracker.is_live(ticket));

        tracker.dispose();
        assert!(!tracker.is_live(ticket));
    }

    #[test]
    fn test_only_pending_mutation_blocks_resubmit() {
        assert!(MutationState::Pending.is_pending());
        assert!(!MutationState::Idle.is_pending());
        assert!(!MutationState::Success.is_pending());
        assert!(!MutationState::Error("boom".into()).is_pending());
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut tracker = QueryTracker::new(RetryPolicy::DISABLED);
        let old = tracker.begin();
        let new = tracker.begin();
        assert_eq!(tracker.settle(old, Ok(1u32)), Settled::Stale);
        assert_eq!(tracker.settle(new, Ok(2u32)), Settled::Apply(FetchState::Success(2)));
    }

    #[test]
    fn test_loading_renders_fixed_placeholders() {
        assert_eq!(
            FetchState::<Vec<u32>>::Loading.branch(),
            RenderBranch::Placeholders(SKELETON_ROWS)
        );
        assert_eq!(FetchState::<Vec<u32>>::Idle.branch(), RenderBranch::Placeholders(3));
    }

    #[test]
    fn test_unrecognized_error_uses_fallback() {
        let state = FetchState::<Vec<u32>>::Error(ApiError::Network(None));
        assert_eq!(state.branch(), RenderBranch::Message(UNKNOWN_ERROR.into()));
    }

    #[test]
    fn test_rows_keep_received_order() {
        let state = FetchState::Success(vec![3u32, 1, 2]);
        assert_eq!(state.branch(), RenderBranch::Rows(vec![3, 1, 2]));
    }

    #[test]
    fn test_phase_for_single_record() {
        assert_eq!(FetchState::<u32>::Loading.phase(), Phase::Loading);
        assert_eq!(FetchState::Success(1u32).phase(), Phase::Ready);
        assert_eq!(FetchState::Success(1u32).value(), Some(&1));
        let failed = FetchState::<u32>::Error(ApiError::Status { status: 404, message: None });
        assert_eq!(failed.phase(), Phase::Failed("Request failed with status code 404".into()));
    }

    #[test]
    fn test_delay_is_capped() {
        let policy = RetryPolicy::new(10);
        assert_eq!(policy.delay_ms(4), 16_000);
        assert_eq!(policy.delay_ms(5), 30_000);
        assert_eq!(policy.delay_ms(40), 30_000);
    }
}
