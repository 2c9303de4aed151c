//! Debounced invocation wrapper for keystroke-driven conversion.
//!
//! [`Debouncer`] is the only component of this crate with a scheduling
//! concern.  The transliteration engine itself stays synchronous and
//! schedule-agnostic; the debouncer merely delays *when* a caller-supplied
//! closure runs and guarantees "last call wins": each [`Debouncer::call`]
//! cancels any not-yet-fired prior invocation before scheduling a new one,
//! so at most one invocation is ever pending per wrapper instance.
//!
//! Cancellation is whole-task only.  The scheduled closure is short (an
//! engine call plus whatever the UI does with the result), so there is no
//! notion of partial cancellation mid-execution.

use std::time::Duration;

use tokio::task::JoinHandle;

// ---------------------------------------------------------------------------
// Debouncer
// ---------------------------------------------------------------------------

/// Cancel-and-reschedule wrapper around a delayed closure.
///
/// Must be used from within a tokio runtime ([`Debouncer::call`] spawns the
/// pending task onto the current runtime).
///
/// # Example
/// ```rust,no_run
/// use std::time::Duration;
/// use banglish::realtime::Debouncer;
///
/// #[tokio::main]
/// async fn main() {
///     let mut debouncer = Debouncer::new(Duration::from_millis(300));
///     // Each keystroke reschedules; only the last call's closure fires.
///     debouncer.call(|| {
///         let _ = banglish::translit::convert("ami bhalo achi");
///     });
/// }
/// ```
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer that fires `delay` after the most recent call.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `f` to run after the configured delay, cancelling any prior
    /// invocation that has not fired yet.
    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }

    /// Cancel the outstanding invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns `true` while a scheduled invocation has not yet fired.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    /// A dropped debouncer takes its pending invocation with it.
    fn drop(&mut self) {
        self.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
