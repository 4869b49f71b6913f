//! Background interrupt watcher for masked reads.
//!
//! While a masked read blocks on the foreground thread, one watcher thread
//! waits for an interrupt notification. A three-state guard decides who owns
//! terminal cleanup: the watcher moves it from `READING` to `ABORTED` and
//! restores the terminal before terminating the process; the foreground
//! moves it from `READING` to `FINISHED` once the read returns. The loser of
//! that race touches nothing.

use crate::util::terminal::Terminal;
use std::io;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

const READING: u8 = 0;
const FINISHED: u8 = 1;
const ABORTED: u8 = 2;

/// Delivers process-level interrupt notifications to a watcher thread.
pub trait InterruptSource: Send + Sync {
    /// Foreground-side registration state.
    type Subscription;

    /// Moved onto the watcher thread.
    type Waiter: InterruptWaiter;

    /// Start routing interrupts. Called on the foreground thread before the
    /// watcher is spawned.
    fn subscribe(&self) -> io::Result<(Self::Subscription, Self::Waiter)>;

    /// Wake a watcher blocked in [`InterruptWaiter::wait`].
    fn wake(&self, subscription: &Self::Subscription) -> io::Result<()>;

    /// Stop routing interrupts. Called on the foreground thread after the
    /// watcher has been joined.
    fn unsubscribe(&self, subscription: Self::Subscription);
}

pub trait InterruptWaiter: Send + 'static {
    /// Block until a notification (interrupt or wake-up) arrives.
    fn wait(&mut self) -> io::Result<()>;
}

/// A running watcher. Dropping it stops the thread and deregisters.
pub struct InterruptWatcher<'a, S: InterruptSource> {
    source: &'a S,
    state: Arc<AtomicU8>,
    subscription: Option<S::Subscription>,
    handle: Option<JoinHandle<()>>,
}

impl<'a, S: InterruptSource> InterruptWatcher<'a, S> {
    pub fn spawn<T: Terminal>(source: &'a S, terminal: Arc<T>, mode: T::Mode) -> io::Result<Self> {
        let (subscription, mut waiter) = source.subscribe()?;
        let state = Arc::new(AtomicU8::new(READING));
        let guard = Arc::clone(&state);

        let spawned = thread::Builder::new()
            .name("interrupt-watcher".into())
            .spawn(move || {
                if waiter.wait().is_err() {
                    return;
                }
                if guard
                    .compare_exchange(READING, ABORTED, Ordering::SeqCst, Ordering::SeqCst)
                    .is_err()
                {
                    return;
                }
                debug!("interrupt during masked read, restoring terminal");
                if let Err(err) = terminal.restore(&mode) {
                    warn!(error = %err, "failed to restore terminal after interrupt");
                }
                terminal.newline();
                terminal.terminate();
            });

        match spawned {
            Ok(handle) => Ok(Self {
                source,
                state,
                subscription: Some(subscription),
                handle: Some(handle),
            }),
            Err(err) => {
                source.unsubscribe(subscription);
                Err(err)
            }
        }
    }

    /// Claim terminal cleanup for the foreground. Returns false when the
    /// watcher already owns it.
    pub fn claim(&self) -> bool {
        self.state
            .compare_exchange(READING, FINISHED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Stop watching and deregister. No interrupt is acted on afterwards.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        let _ = self.claim();

        let aborted = self.state.load(Ordering::SeqCst) == ABORTED;
        let woken = match (&self.subscription, aborted) {
            (Some(sub), false) => match self.source.wake(sub) {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "failed to wake interrupt watcher");
                    false
                }
            },
            _ => true,
        };

        // A watcher that cannot be woken stays parked; the guard keeps it inert.
        if woken && handle.join().is_err() {
            warn!("interrupt watcher panicked");
        }
        if let Some(sub) = self.subscription.take() {
            self.source.unsubscribe(sub);
        }
        debug!("interrupt watcher stopped");
    }
}

impl<S: InterruptSource> Drop for InterruptWatcher<'_, S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
