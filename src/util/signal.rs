//! Interrupt notification sources for the masked-read watcher.

use crate::core::interrupt::{InterruptSource, InterruptWaiter};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

#[cfg(unix)]
pub use sigint::SigintSource;

/// Interrupt source used by the stdio prompter on this platform.
#[cfg(unix)]
pub type PlatformInterrupts = SigintSource;

/// Interrupt source used by the stdio prompter on this platform.
///
/// Nothing feeds it: no console control handler is registered, so
/// Ctrl+Break and closing the console window are not intercepted. Ctrl+C
/// still reaches the reader as a raw byte and is handled there.
#[cfg(not(unix))]
pub type PlatformInterrupts = ChannelSource;

#[cfg(unix)]
mod sigint {
    use super::*;
    use signal_hook::consts::SIGINT;
    use signal_hook::iterator::{Handle, Signals};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Routes process-directed `SIGINT` to the watcher, whichever thread
    /// the kernel picks to receive it.
    ///
    /// While no prompt is subscribed, `SIGINT` keeps its default action
    /// (terminate) through a conditional-default registration that is only
    /// disarmed while at least one subscription is live.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct SigintSource;

    pub struct SigintWaiter {
        signals: Signals,
    }

    struct IdleDefault {
        active: usize,
        armed: Option<Arc<AtomicBool>>,
    }

    static IDLE_DEFAULT: Mutex<IdleDefault> = Mutex::new(IdleDefault {
        active: 0,
        armed: None,
    });

    fn disarm_default() -> io::Result<()> {
        let mut idle = IDLE_DEFAULT.lock().unwrap_or_else(|p| p.into_inner());
        let armed = match &idle.armed {
            Some(armed) => Arc::clone(armed),
            None => {
                let armed = Arc::new(AtomicBool::new(false));
                signal_hook::flag::register_conditional_default(SIGINT, Arc::clone(&armed))?;
                idle.armed = Some(Arc::clone(&armed));
                armed
            }
        };
        armed.store(false, Ordering::SeqCst);
        idle.active += 1;
        Ok(())
    }

    fn rearm_default() {
        let mut idle = IDLE_DEFAULT.lock().unwrap_or_else(|p| p.into_inner());
        idle.active = idle.active.saturating_sub(1);
        if idle.active == 0 {
            if let Some(armed) = &idle.armed {
                armed.store(true, Ordering::SeqCst);
            }
        }
    }

    impl InterruptWaiter for SigintWaiter {
        fn wait(&mut self) -> io::Result<()> {
            match self.signals.forever().next() {
                Some(_) => Ok(()),
                None => Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "interrupt registration closed",
                )),
            }
        }
    }

    impl InterruptSource for SigintSource {
        type Subscription = Handle;
        type Waiter = SigintWaiter;

        fn subscribe(&self) -> io::Result<(Handle, SigintWaiter)> {
            disarm_default()?;
            match Signals::new([SIGINT]) {
                Ok(signals) => Ok((signals.handle(), SigintWaiter { signals })),
                Err(err) => {
                    rearm_default();
                    Err(err)
                }
            }
        }

        fn wake(&self, handle: &Handle) -> io::Result<()> {
            handle.close();
            Ok(())
        }

        fn unsubscribe(&self, handle: Handle) {
            handle.close();
            rearm_default();
        }
    }
}

/// In-process interrupt source.
///
/// [`ChannelSource::interrupt`] delivers a notification to the active
/// subscription, if any.
#[derive(Debug, Default)]
pub struct ChannelSource {
    current: Mutex<Option<Sender<()>>>,
}

pub struct ChannelWaiter(Receiver<()>);

impl ChannelSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when nothing is subscribed.
    pub fn interrupt(&self) -> bool {
        let current = self.current.lock().unwrap_or_else(|p| p.into_inner());
        match current.as_ref() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.current
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }
}

impl InterruptWaiter for ChannelWaiter {
    fn wait(&mut self) -> io::Result<()> {
        self.0
            .recv()
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "interrupt channel closed"))
    }
}

impl InterruptSource for ChannelSource {
    type Subscription = Sender<()>;
    type Waiter = ChannelWaiter;

    fn subscribe(&self) -> io::Result<(Sender<()>, ChannelWaiter)> {
        let (tx, rx) = mpsc::channel();
        *self.current.lock().unwrap_or_else(|p| p.into_inner()) = Some(tx.clone());
        Ok((tx, ChannelWaiter(rx)))
    }

    fn wake(&self, tx: &Sender<()>) -> io::Result<()> {
        // A closed channel means the watcher already returned.
        let _ = tx.send(());
        Ok(())
    }

    fn unsubscribe(&self, tx: Sender<()>) {
        self.current.lock().unwrap_or_else(|p| p.into_inner()).take();
        drop(tx);
    }
}

/// Serializes tests that raise a real `SIGINT`: every live subscription in
/// the process sees it.
#[cfg(all(test, unix))]
pub(crate) fn sigint_test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|p| p.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_interrupt_without_subscriber() {
        let source = ChannelSource::new();
        assert!(!source.interrupt());
        assert!(!source.is_subscribed());
    }

    #[test]
    fn test_channel_delivers_to_waiter() {
        let source = ChannelSource::new();
        let (sub, mut waiter) = source.subscribe().unwrap();
        assert!(source.interrupt());
        waiter.wait().unwrap();
        source.unsubscribe(sub);
        assert!(!source.is_subscribed());
        assert!(waiter.wait().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_sigint_wake_releases_waiter() {
        let _lock = sigint_test_lock();
        let source = SigintSource;
        let (handle, mut waiter) = source.subscribe().unwrap();
        let watcher = std::thread::spawn(move || {
            assert!(waiter.wait().is_err());
        });
        source.wake(&handle).unwrap();
        watcher.join().unwrap();
        source.unsubscribe(handle);
    }

    #[cfg(unix)]
    #[test]
    fn test_sigint_from_any_thread_reaches_waiter() {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let _lock = sigint_test_lock();
        let source = SigintSource;
        let (handle, mut waiter) = source.subscribe().unwrap();
        let watcher = std::thread::spawn(move || waiter.wait().is_ok());

        // Process-directed: the kernel may pick any thread, including this one.
        kill(Pid::this(), Signal::SIGINT).unwrap();
        assert!(watcher.join().unwrap());
        source.unsubscribe(handle);
    }
}
