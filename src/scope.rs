//! Lifetime scope for tasks owned by a screen.
//!
//! Every asynchronous operation a screen starts is launched as a child of its
//! [`ScreenScope`]. Cancelling the scope (or dropping it) cancels all of them.

use std::future::Future;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct ScreenScope {
    token: CancellationToken,
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Launch `task` on the current tokio runtime.
    ///
    /// The task stops at its next await point once either the returned
    /// [`Job`] or the whole scope is cancelled.
    pub fn launch<F>(&self, name: &'static str, task: F) -> Job
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.child_token();
        let guard = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = guard.cancelled() => {
                    tracing::trace!(job = name, "Job cancelled");
                }
                _ = task => {}
            }
        });
        Job { token, handle }
    }

    /// Cancel every job launched in this scope.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            tracing::debug!("Screen scope cancelled");
            self.token.cancel();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// A task launched in a [`ScreenScope`].
#[derive(Debug)]
pub struct Job {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Job {
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Wait for the job to complete or observe its cancellation.
    pub async fn join(self) {
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn cancelled_job_does_not_finish_its_work() {
        let scope = ScreenScope::new();
        let done = Arc::new(AtomicBool::new(false));
        let flag = done.clone();

        let job = scope.launch("sleeper", async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
        });
        job.cancel();
        job.join().await;

        assert!(!done.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn scope_cancel_reaches_every_job() {
        let scope = ScreenScope::new();
        let first = scope.launch("first", std::future::pending());
        let second = scope.launch("second", std::future::pending());

        scope.cancel();
        first.join().await;
        second.join().await;

        assert!(scope.is_cancelled());
    }

    #[tokio::test]
    async fn uncancelled_job_runs_to_completion() {
        let scope = ScreenScope::new();
        let done = Arc::new(AtomicBool::new(false));
        let flag = done.clone();

        let job = scope.launch("quick", async move {
            flag.store(true, Ordering::SeqCst);
        });
        job.join().await;

        assert!(done.load(Ordering::SeqCst));
    }
}
