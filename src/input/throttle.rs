//! Per-slot throttling of move events.
//!
//! The window is checked against a monotonic clock reading passed with every
//! event; nothing is scheduled. Presses, releases and double clicks always
//! pass, and a coalesced move is flushed right before them so a gesture never
//! ends on a stale position.

use super::events::MouseEvent;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct Throttle {
    interval: Duration,
    leading: bool,
    /// Start of the current window
    window_start: Option<Instant>,
    /// Latest move coalesced inside the window
    pending: Option<MouseEvent>,
}

impl Throttle {
    pub(crate) fn new(throttle_ms: u64, leading: bool) -> Self {
        Self {
            interval: Duration::from_millis(throttle_ms),
            leading,
            window_start: None,
            pending: None,
        }
    }

    /// Events to deliver now, in order, for an incoming `event`.
    pub(crate) fn accept(&mut self, event: &MouseEvent, now: Instant) -> Vec<MouseEvent> {
        if self.interval.is_zero() {
            return vec![*event];
        }

        if !event.is_move() {
            let mut out = Vec::with_capacity(2);
            if let Some(pending) = self.pending.take() {
                out.push(pending);
            }
            out.push(*event);
            // Each gesture starts a fresh burst
            self.window_start = None;
            return out;
        }

        match self.window_start {
            Some(start) if now.saturating_duration_since(start) < self.interval => {
                self.pending = Some(*event);
                Vec::new()
            }
            Some(_) if self.pending.take().is_some() => {
                // Window boundary: the newest move supersedes the coalesced one
                self.window_start = Some(now);
                vec![*event]
            }
            _ => self.open_window(event, now),
        }
    }

    fn open_window(&mut self, event: &MouseEvent, now: Instant) -> Vec<MouseEvent> {
        self.window_start = Some(now);
        if self.leading {
            vec![*event]
        } else {
            self.pending = Some(*event);
            Vec::new()
        }
    }

    #[cfg(test)]
    pub(crate) fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
