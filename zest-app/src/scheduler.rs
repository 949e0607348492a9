//! One-shot timers that post intents back onto the session queue.
//!
//! Every scheduled timer returns a cancel handle; the controller aborts
//! the tracking handles when the tracking screen is exited so a leaked
//! timer cannot fire into a later activation.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use zest_core::Intent;

/// Cancel handle for a scheduled one-shot intent.
#[derive(Debug)]
pub struct TimerHandle {
    handle: JoinHandle<()>,
}

impl TimerHandle {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

/// Post `intent` to `tx` after `delay`.
pub fn schedule(
    tx: UnboundedSender<Intent>,
    delay: Duration,
    intent: Intent,
) -> TimerHandle {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // The receiver may already be gone during shutdown.
        let _ = tx.send(intent);
    });
    TimerHandle { handle }
}
