//! Observable holder of the latest UI state.

use tokio::sync::watch;

use super::reducer::Reducer;
use super::state::UiState;

/// Holds the current immutable state snapshot and broadcasts replacements.
///
/// Every transition is a read-copy-write of the whole state performed under
/// the channel's lock, so two transitions never interleave. Observers only
/// ever see the latest snapshot; intermediate states may be skipped by slow
/// observers.
#[derive(Debug)]
pub struct StateStore<S: UiState> {
    tx: watch::Sender<S>,
}

impl<S: UiState> StateStore<S> {
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone of the current snapshot.
    pub fn state(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The returned receiver is marked as changed, so the first
    /// `changed().await` resolves immediately with the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        let mut rx = self.tx.subscribe();
        rx.mark_changed();
        rx
    }

    /// Run `intent` through reducer `R` and publish the result.
    ///
    /// Returns `true` if the state changed. Observers are not woken for
    /// transitions that produce an equal state.
    pub fn dispatch<R>(&self, intent: R::Intent) -> bool
    where
        R: Reducer<State = S>,
    {
        self.tx.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }
}

impl<S: UiState> Default for StateStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
