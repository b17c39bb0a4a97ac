//! Deferred tick scheduling.
//!
//! The controller arms at most one timer at a time. Each arming carries a
//! fresh [`TickTicket`]; the controller only honors the ticket it armed last,
//! so a tick that was already on its way when `pause` or `reset` ran is
//! recognised as stale and dropped.

use std::time::Duration;

/// Identity of one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickTicket(u64);

impl TickTicket {
    pub(crate) fn first() -> Self {
        Self(0)
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// A one-shot timer that hands a ticket back to the controller after a delay.
pub trait TickTimer {
    /// Deliver `ticket` once `delay` has elapsed, replacing anything armed.
    fn arm(&mut self, ticket: TickTicket, delay: Duration);

    /// Drop the armed ticket, if any, so it is never delivered.
    fn disarm(&mut self);
}

impl<T: TickTimer + ?Sized> TickTimer for &mut T {
    fn arm(&mut self, ticket: TickTicket, delay: Duration) {
        (**self).arm(ticket, delay)
    }

    fn disarm(&mut self) {
        (**self).disarm()
    }
}

/// Timer that fires only when asked to.
///
/// Lets callers (tests, step-by-step drivers) decide exactly when ticks run.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    armed: Option<(TickTicket, Duration)>,
    arm_count: usize,
    disarm_count: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The armed ticket and its delay.
    pub fn armed(&self) -> Option<(TickTicket, Duration)> {
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Take the armed ticket as if its delay had elapsed.
    pub fn fire(&mut self) -> Option<TickTicket> {
        self.armed.take().map(|(ticket, _)| ticket)
    }

    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    pub fn disarm_count(&self) -> usize {
        self.disarm_count
    }
}

impl TickTimer for ManualTimer {
    fn arm(&mut self, ticket: TickTicket, delay: Duration) {
        self.armed = Some((ticket, delay));
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = None;
        self.disarm_count += 1;
    }
}

#[cfg(feature = "runtime")]
pub use tokio_timer::TokioTimer;

#[cfg(feature = "runtime")]
mod tokio_timer {
    use std::time::Duration;

    use tokio::sync::mpsc;
    use tokio::task::JoinHandle;
    use tracing::trace;

    use super::{TickTicket, TickTimer};

    /// Timer backed by a tokio task per armed tick.
    ///
    /// Fired tickets arrive on the receiver returned by [`TokioTimer::new`].
    /// Must be armed from inside a tokio runtime.
    #[derive(Debug)]
    pub struct TokioTimer {
        tx: mpsc::UnboundedSender<TickTicket>,
        task: Option<JoinHandle<()>>,
    }

    impl TokioTimer {
        pub fn new() -> (Self, mpsc::UnboundedReceiver<TickTicket>) {
            let (tx, rx) = mpsc::unbounded_channel();
            (Self { tx, task: None }, rx)
        }
    }

    impl TickTimer for TokioTimer {
        fn arm(&mut self, ticket: TickTicket, delay: Duration) {
            self.disarm();
            let tx = self.tx.clone();
            self.task = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                trace!(ticket = ticket.id(), "tick_fired");
                // Receiver gone means the player stopped; nothing to do.
                let _ = tx.send(ticket);
            }));
        }

        fn disarm(&mut self) {
            if let Some(task) = self.task.take() {
                task.abort();
            }
        }
    }

    impl Drop for TokioTimer {
        fn drop(&mut self) {
            self.disarm();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_holds_one_ticket() {
        let mut timer = ManualTimer::new();
        let first = TickTicket::first();
        timer.arm(first, Duration::from_millis(50));
        timer.arm(first.next(), Duration::from_millis(50));
        assert_eq!(timer.fire(), Some(first.next()));
        assert_eq!(timer.fire(), None);
        assert_eq!(timer.arm_count(), 2);
    }

    #[test]
    fn test_disarm_drops_ticket() {
        let mut timer = ManualTimer::new();
        timer.arm(TickTicket::first(), Duration::ZERO);
        timer.disarm();
        assert!(!timer.is_armed());
        assert_eq!(timer.fire(), None);
    }

    #[cfg(feature = "runtime")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_delivers_after_delay() {
        let (mut timer, mut rx) = TokioTimer::new();
        timer.arm(TickTicket::first(), Duration::from_millis(50));
        let started = tokio::time::Instant::now();
        let ticket = rx.recv().await.unwrap();
        assert_eq!(ticket, TickTicket::first());
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[cfg(feature = "runtime")]
    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_disarm_cancels() {
        let (mut timer, mut rx) = TokioTimer::new();
        timer.arm(TickTicket::first(), Duration::from_millis(50));
        timer.disarm();
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
    }
}
