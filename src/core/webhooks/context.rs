//! Per-call deadline and cancellation
//!
//! Both dispatch paths accept a [`CallContext`] and abort the outbound request
//! as soon as its deadline passes or its [`CancelHandle`] fires.

use std::time::Duration;
use tokio::sync::watch;

/// Create a linked cancellation handle and signal
pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(tx), CancelSignal(rx))
}

/// Owner side: call [`CancelHandle::cancel`] to abort in-flight requests
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        // send_replace never fails, even with no receiver left
        self.0.send_replace(true);
    }
}

/// Observer side, cheap to clone into every call
#[derive(Debug, Clone)]
pub struct CancelSignal(watch::Receiver<bool>);

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolve once cancellation is requested; pends forever if the handle is dropped first
    pub async fn cancelled(&mut self) {
        loop {
            if *self.0.borrow_and_update() {
                return;
            }
            if self.0.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}

/// Deadline and cancellation for one dispatch
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub timeout: Option<Duration>,
    pub cancel: Option<CancelSignal>,
}

impl CallContext {
    /// No deadline beyond the HTTP client's own, no cancellation
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_cancel(mut self, signal: CancelSignal) -> Self {
        self.cancel = Some(signal);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelSignal::is_cancelled)
    }
}
