#![forbid(unsafe_code)]

//! Thread-backed periodic timer.
//!
//! A [`PeriodicTimer`] runs a tick callback on a dedicated worker thread at
//! a fixed period until it is stopped, dropped, or the callback asks to
//! break. Stopping is signalled through a condition variable, so a stop
//! request interrupts the wait immediately instead of sleeping out the
//! remainder of the period.
//!
//! # Lifecycle
//!
//! - [`PeriodicTimer::start`] is idempotent: starting a running timer keeps
//!   the existing worker and ignores the new callback.
//! - [`PeriodicTimer::stop`] signals the worker and joins it, so no tick
//!   runs after `stop` returns. Called from the worker itself it signals
//!   without joining.
//! - Dropping a running timer stops it.

use std::ops::ControlFlow;
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// Waiting side of a stop request, held by the worker.
#[derive(Clone)]
struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: Arc::clone(&inner),
        };
        (signal, StopTrigger { inner })
    }

    /// Wait for either the stop request or `duration`.
    ///
    /// Returns `true` if stopped, `false` on timeout. Spurious wakeups are
    /// absorbed by re-waiting for the remaining time.
    fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        if *stopped {
            return true;
        }

        let start = Instant::now();
        let mut remaining = duration;
        loop {
            let (guard, result) = cvar
                .wait_timeout(stopped, remaining)
                .unwrap_or_else(PoisonError::into_inner);
            stopped = guard;
            if *stopped {
                return true;
            }
            if result.timed_out() {
                return false;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}

/// Requesting side of a stop request, held by the timer.
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        *stopped = true;
        cvar.notify_all();
    }
}

struct Worker {
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl Worker {
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            if handle.thread().id() == thread::current().id() {
                // Stopped from inside a tick: the loop exits on its own.
                return;
            }
            let _ = handle.join();
        }
    }
}

/// Fixed-period ticker running on its own thread.
#[derive(Default)]
pub struct PeriodicTimer {
    worker: Option<Worker>,
    period: Duration,
}

impl std::fmt::Debug for PeriodicTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodicTimer")
            .field("running", &self.is_running())
            .field("period", &self.period)
            .finish()
    }
}

impl PeriodicTimer {
    /// Create a stopped timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a worker is currently attached.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .and_then(|w| w.thread.as_ref())
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Period of the most recent start, or zero if never started.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking every `period`.
    ///
    /// The first tick fires one period after the call. `on_tick` returning
    /// [`ControlFlow::Break`] ends the worker. No-op if already running.
    pub fn start<F>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        if self.is_running() {
            return;
        }
        // Reap a worker that broke out on its own.
        if let Some(stale) = self.worker.take() {
            stale.stop();
        }

        let (signal, trigger) = StopSignal::new();
        let thread = thread::Builder::new()
            .name("lcdmenu-timer".into())
            .spawn(move || {
                let mut ticks: u64 = 0;
                loop {
                    if signal.wait_timeout(period) {
                        tracing::trace!(ticks, "timer worker stopped");
                        break;
                    }
                    ticks += 1;
                    if on_tick().is_break() {
                        tracing::trace!(ticks, "timer callback ended worker");
                        break;
                    }
                }
            });

        match thread {
            Ok(handle) => {
                tracing::debug!(?period, "timer started");
                self.period = period;
                self.worker = Some(Worker {
                    trigger,
                    thread: Some(handle),
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to spawn timer thread");
            }
        }
    }

    /// Stop ticking and wait for the worker to exit. No-op if stopped.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            tracing::debug!(period = ?self.period, "timer stopped");
            worker.stop();
        }
    }
}

impl Drop for PeriodicTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
