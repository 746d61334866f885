//! Fetch lifecycle for the announcement snapshot.
//!
//! [`FetchController`] owns the single mutable [`FetchState`] of the dashboard.
//! Every change goes through [`FetchController::refresh`]; readers either take
//! a synchronous snapshot with [`FetchController::state`] or subscribe to
//! changes with [`FetchController::subscribe`].

use crate::errors::AppError;
use crate::models::FetchResult;
use crate::provider::AnnouncementProvider;
use chrono::Local;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Banner text used when a failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// What the dashboard currently knows about the announcement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No fetch attempted yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded { result: FetchResult },
    /// The last fetch failed.
    Failed { message: String },
}

impl FetchState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded { .. } => "loaded",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn result(&self) -> Option<&FetchResult> {
        match self {
            Self::Loaded { result } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// How outcomes of overlapping refreshes are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// Apply every outcome in completion order. A slow earlier request can
    /// overwrite the result of a faster later one.
    #[default]
    ApplyAll,
    /// Drop outcomes of requests that were superseded by a newer refresh.
    DiscardSuperseded,
}

/// Mediates between refresh requests and a data provider.
pub struct FetchController<P> {
    provider: P,
    state: watch::Sender<FetchState>,
    latest_request: AtomicU64,
    policy: StalePolicy,
}

impl<P: AnnouncementProvider> FetchController<P> {
    /// Creates a controller in the `Idle` state applying every outcome.
    pub fn new(provider: P) -> Self {
        Self::with_policy(provider, StalePolicy::default())
    }

    pub fn with_policy(provider: P, policy: StalePolicy) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            provider,
            state,
            latest_request: AtomicU64::new(0),
            policy,
        }
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Returns a receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Fetches the current announcements and records the outcome.
    ///
    /// The state moves to `Loading`, then to `Loaded` with a client-side
    /// `fetched_at`, or to `Failed` with the error's message. Errors never
    /// escape this call; the caller observes them through the state.
    ///
    /// Overlapping calls are allowed. Under [`StalePolicy::ApplyAll`] the
    /// outcome that completes last wins; under
    /// [`StalePolicy::DiscardSuperseded`] only the newest request may write.
    pub async fn refresh(&self) {
        let request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            request_id,
            provider = self.provider.name(),
            "Refreshing announcements"
        );
        self.state.send_replace(FetchState::Loading);

        let started = Instant::now();
        let outcome = self.provider.fetch_announcements().await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if self.policy == StalePolicy::DiscardSuperseded
            && request_id != self.latest_request.load(Ordering::SeqCst)
        {
            debug!(request_id, elapsed_ms, "Discarding superseded refresh outcome");
            return;
        }

        let next = match outcome {
            Ok(batch) => {
                info!(
                    request_id,
                    items = batch.items.len(),
                    total = batch.total,
                    elapsed_ms,
                    "Announcements loaded"
                );
                FetchState::Loaded {
                    result: FetchResult {
                        items: batch.items,
                        total: batch.total,
                        fetched_at: Local::now(),
                    },
                }
            }
            Err(e) => {
                warn!(request_id, elapsed_ms, error = %e, "Failed to load announcements");
                FetchState::Failed {
                    message: failure_message(&e),
                }
            }
        };

        self.state.send_replace(next);
    }
}

fn failure_message(error: &AppError) -> String {
    let message = error.message().trim();
    if message.is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}
