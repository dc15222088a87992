//! Single-slot rate limiting for third-party transports
//!
//! The transcription service tolerates one request at a time with a short
//! gap between dispatches. Every transcription transport in the process
//! shares one [`SlotLimiter`], so throttling holds across client instances.

use std::sync::LazyLock;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

/// Minimum spacing between transcription dispatches
pub const TRANSCRIPTION_MIN_INTERVAL: Duration = Duration::from_millis(50);

/// An async limiter admitting one permit holder at a time, with a minimum
/// interval between consecutive admissions.
#[derive(Debug)]
pub struct SlotLimiter {
    min_interval: Duration,
    // Some(instant) = when the last permit was issued
    slot: Mutex<Option<Instant>>,
}

/// Proof of admission. The slot stays taken until the permit is dropped.
#[derive(Debug)]
pub struct SlotPermit<'a> {
    _slot: MutexGuard<'a, Option<Instant>>,
}

impl SlotLimiter {
    /// Create a limiter with the given spacing between admissions
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            slot: Mutex::new(None),
        }
    }

    /// Wait for the slot, then for the spacing interval, and take a permit.
    ///
    /// Hold the returned permit for the full duration of the guarded request.
    pub async fn acquire(&self) -> SlotPermit<'_> {
        let mut slot = self.slot.lock().await;
        if let Some(last) = *slot {
            let ready_at = last + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                tracing::debug!(
                    wait_ms = (ready_at - now).as_millis() as u64,
                    "waiting for dispatch window"
                );
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *slot = Some(Instant::now());
        SlotPermit { _slot: slot }
    }
}

// One limiter per process, initialized on first use and never torn down.
static TRANSCRIPTION_LIMITER: LazyLock<SlotLimiter> =
    LazyLock::new(|| SlotLimiter::new(TRANSCRIPTION_MIN_INTERVAL));

/// The process-wide limiter shared by every transcription transport
pub fn transcription_limiter() -> &'static SlotLimiter {
    &TRANSCRIPTION_LIMITER
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatches_are_spaced_and_never_overlap() {
        let limiter = Arc::new(SlotLimiter::new(Duration::from_millis(50)));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_in_flight = Arc::new(AtomicUsize::new(0));
        let stamps = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for _ in 0..3 {
            let limiter = Arc::clone(&limiter);
            let in_flight = Arc::clone(&in_flight);
            let max_in_flight = Arc::clone(&max_in_flight);
            let stamps = Arc::clone(&stamps);
            handles.push(tokio::spawn(async move {
                let permit = limiter.acquire().await;
                let acquired_at = Instant::now();
                stamps.lock().await.push(acquired_at);

                let active = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_in_flight.fetch_max(active, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);

                drop(permit);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_in_flight.load(Ordering::SeqCst), 1);

        let mut stamps = stamps.lock().await.clone();
        stamps.sort();
        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(50));
        }
    }

    #[tokio::test]
    async fn permit_blocks_second_acquire_until_dropped() {
        let limiter = SlotLimiter::new(Duration::from_millis(1));
        let permit = limiter.acquire().await;

        let second = tokio::time::timeout(Duration::from_millis(20), limiter.acquire()).await;
        assert!(second.is_err(), "slot should stay taken while permit lives");

        drop(permit);
        let second = tokio::time::timeout(Duration::from_millis(100), limiter.acquire()).await;
        assert!(second.is_ok());
    }

    #[test]
    fn transcription_limiter_is_process_global() {
        assert!(std::ptr::eq(
            transcription_limiter(),
            transcription_limiter()
        ));
    }
}
