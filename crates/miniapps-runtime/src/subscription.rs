#![forbid(unsafe_code)]

//! Subscription system for continuous event sources.
//!
//! Subscriptions provide a declarative way to receive recurring messages
//! from outside the input stream, such as the clock's one-second tick.
//!
//! 1. `Model::subscriptions()` returns the set of active subscriptions
//! 2. After each `update()`, the runtime compares active vs previous sets
//! 3. New subscriptions are started, removed ones are stopped
//! 4. Subscription messages are routed through `Model::update()`
//!
//! Because the runtime deduplicates by [`SubId`], a subscription that stays
//! declared across updates keeps its single background thread: toggling a
//! ticker off and on again can never leave two timers running.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

/// A unique identifier for a subscription.
pub type SubId = u64;

/// A subscription produces messages from a recurring external source.
///
/// Subscriptions run on background threads and send messages through the
/// provided channel until stopped or disconnected.
pub trait Subscription<M: Send + 'static>: Send {
    /// Unique identifier for deduplication.
    ///
    /// Subscriptions with the same ID are considered identical; the runtime
    /// avoids restarting unchanged subscriptions.
    fn id(&self) -> SubId;

    /// Run the subscription, sending messages through the channel.
    ///
    /// Called on a background thread. Implementations loop until the
    /// receiver is dropped or the stop signal fires.
    fn run(self: Box<Self>, sender: mpsc::Sender<M>, stop: StopSignal);
}

/// Signal for stopping a subscription.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    /// Create a new stop signal pair (signal, trigger).
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        let trigger = StopTrigger { inner };
        (signal, trigger)
    }

    /// Check if the stop signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        lock.lock().map(|g| *g).unwrap_or(true)
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if the timeout elapsed. Blocks on
    /// a condition variable; spurious wakeups are absorbed by re-checking
    /// the remaining time.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let Ok(mut stopped) = lock.lock() else {
            return true;
        };
        if *stopped {
            return true;
        }

        let start = std::time::Instant::now();
        let mut remaining = duration;

        loop {
            let Ok((guard, result)) = cvar.wait_timeout(stopped, remaining) else {
                return true;
            };
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

/// Trigger to stop a subscription from the runtime side.
pub(crate) struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    /// Signal the subscription to stop.
    pub(crate) fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        if let Ok(mut stopped) = lock.lock() {
            *stopped = true;
            cvar.notify_all();
        }
    }
}

/// A periodic subscription that emits a message at a fixed interval.
pub struct Every<M> {
    id: SubId,
    interval: Duration,
    make: Box<dyn Fn() -> M + Send>,
}

impl<M> Every<M> {
    /// Create a periodic subscription.
    ///
    /// `make` is invoked once per elapsed interval to build the message.
    pub fn new(id: SubId, interval: Duration, make: impl Fn() -> M + Send + 'static) -> Self {
        Self {
            id,
            interval,
            make: Box::new(make),
        }
    }
}

impl<M: Send + 'static> Subscription<M> for Every<M> {
    fn id(&self) -> SubId {
        self.id
    }

    fn run(self: Box<Self>, sender: mpsc::Sender<M>, stop: StopSignal) {
        loop {
            if stop.wait_timeout(self.interval) {
                break;
            }
            if sender.send((self.make)()).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_emits_until_stopped() {
        let (tx, rx) = mpsc::channel();
        let (signal, trigger) = StopSignal::new();
        let sub: Box<dyn Subscription<u32>> =
            Box::new(Every::new(1, Duration::from_millis(5), || 7));
        let handle = std::thread::spawn(move || sub.run(tx, signal));

        // At least one tick arrives.
        let first = rx.recv_timeout(Duration::from_secs(2)).expect("tick");
        assert_eq!(first, 7);

        trigger.stop();
        handle.join().expect("subscription thread exits");

        // After the thread exits the channel drains and disconnects.
        while rx.try_recv().is_ok() {}
        assert!(matches!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected)));
    }

    #[test]
    fn stop_signal_short_circuits_wait() {
        let (signal, trigger) = StopSignal::new();
        trigger.stop();
        assert!(signal.is_stopped());
        assert!(signal.wait_timeout(Duration::from_secs(5)));
    }

    #[test]
    fn wait_times_out_when_not_stopped() {
        let (signal, _trigger) = StopSignal::new();
        assert!(!signal.wait_timeout(Duration::from_millis(1)));
    }
}
