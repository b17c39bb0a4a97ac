//! Tick timer driven by the egui frame loop.
//!
//! egui has no callbacks-after-delay; instead the app asks for a repaint at
//! the deadline and polls the timer at the start of every frame.

use std::time::{Duration, Instant};

use eca_automaton::{TickTicket, TickTimer};

#[derive(Debug, Default)]
pub struct FrameTimer {
    due: Option<(TickTicket, Instant)>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the armed ticket if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<TickTicket> {
        match self.due {
            Some((ticket, at)) if at <= now => {
                self.due = None;
                Some(ticket)
            }
            _ => None,
        }
    }

    /// Time left until the armed ticket is due; `None` when nothing is armed.
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.due.map(|(_, at)| at.saturating_duration_since(now))
    }
}

impl TickTimer for FrameTimer {
    fn arm(&mut self, ticket: TickTicket, delay: Duration) {
        self.due = Some((ticket, Instant::now() + delay));
    }

    fn disarm(&mut self) {
        self.due = None;
    }
}
