use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    Failed,
}

impl RefreshOutcome {
    #[must_use]
    pub const fn is_refreshed(self) -> bool {
        matches!(self, Self::Refreshed)
    }
}

enum RefreshState {
    Idle,
    Refreshing(watch::Receiver<Option<RefreshOutcome>>),
}

/// Coalesces concurrent refresh attempts.
///
/// The first caller in `Idle` becomes the leader and drives the refresh;
/// everyone arriving while it is in flight waits for the leader's outcome
/// instead of starting another one. Once the outcome is published the state
/// is `Idle` again, so a later 401 starts a fresh refresh.
pub struct RefreshCoordinator {
    state: Mutex<RefreshState>,
}

enum Role {
    Leader(watch::Sender<Option<RefreshOutcome>>),
    Follower(watch::Receiver<Option<RefreshOutcome>>),
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RefreshState::Idle),
        }
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(*self.lock(), RefreshState::Refreshing(_))
    }

    pub async fn run<F, Fut>(&self, refresh: F) -> RefreshOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RefreshOutcome>,
    {
        let role = {
            let mut state = self.lock();
            match &*state {
                RefreshState::Refreshing(receiver) => Role::Follower(receiver.clone()),
                RefreshState::Idle => {
                    let (sender, receiver) = watch::channel(None);
                    *state = RefreshState::Refreshing(receiver);
                    Role::Leader(sender)
                }
            }
        };

        match role {
            Role::Follower(mut receiver) => {
                debug!("joining in-flight token refresh");
                match receiver.wait_for(Option::is_some).await {
                    Ok(outcome) => (*outcome).unwrap_or(RefreshOutcome::Failed),
                    // Leader dropped before publishing.
                    Err(_) => RefreshOutcome::Failed,
                }
            }
            Role::Leader(sender) => {
                let mut guard = LeaderGuard {
                    coordinator: self,
                    sender: Some(sender),
                };
                let outcome = refresh().await;
                guard.publish(outcome);
                outcome
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, RefreshState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn reset(&self) {
        *self.lock() = RefreshState::Idle;
    }
}

impl Default for RefreshCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the coordinator to `Idle` even when the leader's future is dropped
/// mid-refresh; followers then see the sender close and report failure.
struct LeaderGuard<'a> {
    coordinator: &'a RefreshCoordinator,
    sender: Option<watch::Sender<Option<RefreshOutcome>>>,
}

impl LeaderGuard<'_> {
    fn publish(&mut self, outcome: RefreshOutcome) {
        self.coordinator.reset();
        if let Some(sender) = self.sender.take() {
            sender.send_replace(Some(outcome));
        }
    }
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.coordinator.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_refresh() {
        let coordinator = Arc::new(RefreshCoordinator::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let gate = Arc::new(Notify::new());

        let mut handles = Vec::new();
        for _ in 0..5 {
            let coordinator = coordinator.clone();
            let calls = calls.clone();
            let gate = gate.clone();
            handles.push(tokio::spawn(async move {
                coordinator
                    .run(|| async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        gate.notified().await;
                        RefreshOutcome::Refreshed
                    })
                    .await
            }));
        }

        settle().await;
        assert!(coordinator.is_refreshing());
        gate.notify_one();

        for handle in handles {
            assert_eq!(handle.await.expect("join"), RefreshOutcome::Refreshed);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!coordinator.is_refreshing());
    }

    #[tokio::test]
    async fn followers_observe_failure() {
        let coordinator = Arc::new(RefreshCoordinator::new());
        let gate = Arc::new(Notify::new());

        let leader = {
            let coordinator = coordinator.clone();
            let gate = gate.clone();
            tokio::spawn(async move {
                coordinator
                    .run(|| async move {
                        gate.notified().await;
                        RefreshOutcome::Failed
                    })
                    .await
            })
        };
        settle().await;

        let follower = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move {
                coordinator
                    .run(|| async { RefreshOutcome::Refreshed })
                    .await
            })
        };
        settle().await;
        gate.notify_one();

        assert_eq!(leader.await.expect("join"), RefreshOutcome::Failed);
        assert_eq!(follower.await.expect("join"), RefreshOutcome::Failed);
    }

    #[tokio::test]
    async fn sequential_refreshes_run_again() {
        let coordinator = RefreshCoordinator::new();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            let outcome = coordinator
                .run(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    RefreshOutcome::Refreshed
                })
                .await;
            assert!(outcome.is_refreshed());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn dropped_leader_releases_followers() {
        let coordinator = Arc::new(RefreshCoordinator::new());

        let leader = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move {
                coordinator
                    .run(|| std::future::pending::<RefreshOutcome>())
                    .await
            })
        };
        settle().await;

        let follower = {
            let coordinator = coordinator.clone();
            tokio::spawn(async move {
                coordinator
                    .run(|| async { RefreshOutcome::Refreshed })
                    .await
            })
        };
        settle().await;

        leader.abort();
        assert!(leader.await.is_err());
        assert_eq!(follower.await.expect("join"), RefreshOutcome::Failed);
        assert!(!coordinator.is_refreshing());
    }
}
