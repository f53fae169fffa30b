/// Supervision utilities for the Soft AP state machine
///
/// Provides the cancellable tether-activation timeout: arming produces a
/// handle, cancellation invalidates it, and the fire path re-checks the flag
/// so a cancellation racing the deadline resolves deterministically.
use crate::channels::ApMessage;
use futures_channel::mpsc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// How often a pending timeout task re-checks its cancellation flag (ms)
///
/// Lets cancelled tasks exit well before their deadline instead of holding a
/// timer slot for the full await period.
pub const CANCEL_POLL_MS: u64 = 500;

/// Handle to cancel a pending timeout
///
/// When dropped or explicitly cancelled, the timeout task will not send its
/// fire message, preventing spurious teardowns after tethering completes or
/// an explicit stop wins the race.
#[derive(Clone)]
pub struct TimeoutHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimeoutHandle {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancel the timeout, preventing it from firing
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for TimeoutHandle {
    fn drop(&mut self) {
        // Auto-cancel when the owning state machine lets go of the handle
        self.cancel();
    }
}

/// Spawn a timeout task that fires `ApMessage::TetherTimeout` after
/// `timeout_ms`, unless cancelled first
///
/// The task waits against an absolute deadline with periodic cancellation
/// checks, so it behaves correctly under tokio's paused test clock and exits
/// early once cancelled. `token` ties the fire to the await period that armed
/// it; the state machine discards fires with a stale token.
pub fn spawn_timeout(
    state_tx: mpsc::Sender<ApMessage>,
    token: u64,
    timeout_ms: u64,
) -> TimeoutHandle {
    let handle = TimeoutHandle::new();
    let guard = handle.clone();

    // Pinned at arming, not at the task's first poll, so the window starts
    // the instant the state machine enters Enabled
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);

    tokio::spawn(async move {
        loop {
            if guard.is_cancelled() {
                return;
            }

            let now = Instant::now();
            if now >= deadline {
                break;
            }

            let next_check = now + Duration::from_millis(CANCEL_POLL_MS);
            tokio::time::sleep_until(deadline.min(next_check)).await;
        }

        // Final check before firing; a cancel dequeued just before the
        // deadline must win
        if !guard.is_cancelled() {
            let _ = state_tx.clone().try_send(ApMessage::TetherTimeout { token });
        }
    });

    handle
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use futures::stream::StreamExt;

    #[tokio::test]
    async fn test_timeout_fires_with_token() {
        let (state_tx, mut state_rx) = mpsc::channel(100);

        // Keep handle alive so the timeout can fire
        let _handle = spawn_timeout(state_tx, 7, 50);

        let msg = state_rx.next().await.unwrap();
        match msg {
            ApMessage::TetherTimeout { token } => assert_eq!(token, 7),
            _ => panic!("Expected TetherTimeout"),
        }
    }

    #[tokio::test]
    async fn test_timeout_cancelled_on_drop() {
        use tokio::time::sleep;

        let (state_tx, mut state_rx) = mpsc::channel(100);

        {
            let _handle = spawn_timeout(state_tx, 1, 50);
            // Handle dropped here
        }

        sleep(Duration::from_millis(200)).await;

        assert!(state_rx.try_next().is_ok_and(|msg| msg.is_none()));
    }

    #[tokio::test]
    async fn test_explicit_cancel_prevents_fire() {
        use tokio::time::sleep;

        let (state_tx, mut state_rx) = mpsc::channel(100);

        let handle = spawn_timeout(state_tx, 1, 50);
        handle.cancel();

        sleep(Duration::from_millis(200)).await;

        // Task exits without firing; all senders are gone
        assert!(state_rx.try_next().is_ok_and(|msg| msg.is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_starts_at_arming_instant() {
        let (state_tx, mut state_rx) = mpsc::channel(100);

        let _handle = spawn_timeout(state_tx, 9, 5000);

        // Advance the whole window before the timer task is ever polled; the
        // deadline must date from arming, not float with the first poll
        tokio::time::advance(Duration::from_millis(5000)).await;
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }

        match state_rx.try_next() {
            Ok(Some(ApMessage::TetherTimeout { token })) => assert_eq!(token, 9),
            other => panic!("Expected TetherTimeout, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_respects_deadline_under_paused_clock() {
        let (state_tx, mut state_rx) = mpsc::channel(100);

        let _handle = spawn_timeout(state_tx, 3, 5000);

        // Just shy of the deadline: nothing fires
        tokio::time::advance(Duration::from_millis(4999)).await;
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
        assert!(state_rx.try_next().is_err());

        // Crossing the deadline fires exactly once
        tokio::time::advance(Duration::from_millis(1)).await;
        for _ in 0..32 {
            tokio::task::yield_now().await;
        }
        match state_rx.try_next() {
            Ok(Some(ApMessage::TetherTimeout { token })) => assert_eq!(token, 3),
            other => panic!("Expected TetherTimeout, got {:?}", other),
        }
        // Task has finished; nothing further arrives
        assert!(state_rx.try_next().is_ok_and(|msg| msg.is_none()));
    }
}
