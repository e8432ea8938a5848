//! One-shot side effects delivered from the presentation layer to the view.

use std::fmt::Debug;

use tokio::sync::mpsc::{self, error::TrySendError};

/// Marker trait for effect objects.
///
/// Effects are transient instructions (navigate, show a dialog, show a
/// snackbar). Unlike state they are consumed exactly once and never replayed
/// to a new observer.
pub trait Effect: Debug + Send + 'static {}

/// Factory for a bounded single-consumer effect queue.
pub struct EffectChannel;

impl EffectChannel {
    /// Create a queue holding at most `capacity` undelivered effects.
    pub fn bounded<E: Effect>(capacity: usize) -> (EffectSender<E>, EffectReceiver<E>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (EffectSender { tx }, EffectReceiver { rx })
    }
}

/// Producer side. Cheap to clone; every producer appends to the same queue.
#[derive(Debug)]
pub struct EffectSender<E: Effect> {
    tx: mpsc::Sender<E>,
}

impl<E: Effect> Clone for EffectSender<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<E: Effect> EffectSender<E> {
    /// Append without waiting.
    ///
    /// Returns the effect back when the queue is full so the caller can
    /// deliver it later. Effects sent after the view has gone away are
    /// dropped.
    pub fn try_emit(&self, effect: E) -> Result<(), E> {
        match self.tx.try_send(effect) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(effect)) => Err(effect),
            Err(TrySendError::Closed(effect)) => {
                tracing::debug!(?effect, "Effect dropped, no receiver");
                Ok(())
            }
        }
    }

    /// Append, waiting for queue space.
    pub async fn emit(&self, effect: E) {
        if let Err(err) = self.tx.send(effect).await {
            tracing::debug!(effect = ?err.0, "Effect dropped, no receiver");
        }
    }
}

/// Consumer side, owned by the view layer.
#[derive(Debug)]
pub struct EffectReceiver<E: Effect> {
    rx: mpsc::Receiver<E>,
}

impl<E: Effect> EffectReceiver<E> {
    /// Wait for the next effect. `None` once every producer is gone.
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Take the next effect if one is queued.
    pub fn try_recv(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }

    /// Drain everything currently queued, in emission order.
    pub fn drain(&mut self) -> Vec<E> {
        let mut effects = Vec::new();
        while let Some(effect) = self.try_recv() {
            effects.push(effect);
        }
        effects
    }
}
