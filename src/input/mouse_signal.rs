//! Mouse-move dispatcher.
//!
//! `MouseMoveSignal` broadcasts every mouse event to its slots in
//! registration order. A slot is either a plain handler, called once per
//! event, or a gesture slot: a press creates a fresh [`Gesture`] instance
//! which is then advanced with each event until it reports
//! [`GestureStep::Done`] or the release arrives.
//!
//! ## Gesture lifecycle
//!
//! ```text
//! (no instance) --press--> factory(press), advance(press)
//! active        --event--> advance(event)
//! active        --Done / release / error--> dropped
//! active        --press / timeout / abandon_gestures--> abandon(), dropped
//! ```
//!
//! Errors are isolated per slot: a failing slot loses its gesture, the error
//! is logged and the remaining slots still receive the event. `emit` returns
//! the first error once every slot ran.

use super::events::{Modifiers, MouseButton, MouseEvent};
use super::signal::SlotId;
use super::throttle::Throttle;
use crate::constants::SLOW_DISPATCH_MS;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::Point;
use crate::perf::{OperationStats, measure};
use crate::profile_scope;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Result of advancing a gesture by one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStep {
    /// Wait for the next event
    Continue,
    /// The gesture is complete
    Done,
}

/// A handler that processes one gesture across several event deliveries.
pub trait Gesture: Send {
    /// Handle the next event of the gesture. The first call receives the
    /// press that created the instance.
    fn advance(&mut self, event: &MouseEvent) -> CanvasResult<GestureStep>;

    /// Called when the gesture is dropped before completing.
    fn abandon(&mut self) {}
}

/// Per-slot delivery options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions {
    /// Minimum milliseconds between processed moves (0 = no throttling)
    pub throttle_ms: u64,
    /// Process the first move of a burst immediately
    pub leading: bool,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            throttle_ms: 0,
            leading: true,
        }
    }
}

impl SlotOptions {
    pub fn throttled(throttle_ms: u64) -> Self {
        Self {
            throttle_ms,
            ..Default::default()
        }
    }

    pub fn with_leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }
}

type PlainHandler = Box<dyn FnMut(&MouseEvent) -> CanvasResult<()> + Send>;
type GestureFactory = Box<dyn FnMut(&MouseEvent) -> Box<dyn Gesture> + Send>;

struct ActiveGesture {
    gesture: Box<dyn Gesture>,
    last_event_at: Instant,
}

enum SlotKind {
    Plain(PlainHandler),
    Gesture {
        factory: GestureFactory,
        active: Option<ActiveGesture>,
    },
}

struct Slot {
    id: SlotId,
    kind: SlotKind,
    throttle: Throttle,
}

impl Slot {
    fn deliver(
        &mut self,
        event: &MouseEvent,
        now: Instant,
        timeout: Option<Duration>,
    ) -> CanvasResult<()> {
        if let Some(timeout) = timeout {
            self.expire(now, timeout);
        }
        // Coalesced moves still count as gesture activity
        if let SlotKind::Gesture {
            active: Some(current),
            ..
        } = &mut self.kind
        {
            current.last_event_at = now;
        }

        let mut first_error = None;
        for ev in self.throttle.accept(event, now) {
            if let Err(e) = self.dispatch(&ev, now) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn dispatch(&mut self, event: &MouseEvent, now: Instant) -> CanvasResult<()> {
        let (factory, active) = match &mut self.kind {
            SlotKind::Plain(handler) => return handler(event),
            SlotKind::Gesture { factory, active } => (factory, active),
        };

        if event.is_press() {
            if let Some(mut stale) = active.take() {
                debug!(slot = %self.id, "Press during active gesture, restarting");
                stale.gesture.abandon();
            }
            *active = Some(ActiveGesture {
                gesture: factory(event),
                last_event_at: now,
            });
        }

        // Hover moves outside a gesture are not delivered to gesture slots
        let Some(current) = active.as_mut() else {
            return Ok(());
        };
        current.last_event_at = now;

        match current.gesture.advance(event) {
            Ok(GestureStep::Continue) if !event.is_release() => Ok(()),
            Ok(_) => {
                *active = None;
                Ok(())
            }
            Err(e) => {
                if let Some(mut failed) = active.take() {
                    failed.gesture.abandon();
                }
                Err(e)
            }
        }
    }

    fn expire(&mut self, now: Instant, timeout: Duration) {
        if let SlotKind::Gesture { active, .. } = &mut self.kind {
            let stale = active
                .as_ref()
                .is_some_and(|a| now.saturating_duration_since(a.last_event_at) > timeout);
            if stale {
                if let Some(mut gesture) = active.take() {
                    debug!(slot = %self.id, ?timeout, "Gesture timed out, abandoning");
                    gesture.gesture.abandon();
                }
            }
        }
    }

    fn abandon(&mut self) {
        if let SlotKind::Gesture { active, .. } = &mut self.kind {
            if let Some(mut gesture) = active.take() {
                gesture.gesture.abandon();
            }
        }
    }

    fn has_active_gesture(&self) -> bool {
        matches!(&self.kind, SlotKind::Gesture { active: Some(_), .. })
    }
}

/// Broadcasts mouse events to plain and gesture slots.
pub struct MouseMoveSignal {
    slots: Mutex<Vec<(SlotId, Arc<Mutex<Slot>>)>>,
    gesture_timeout: Mutex<Option<Duration>>,
    slow_dispatch_ms: f64,
    stats: Mutex<OperationStats>,
}

impl Default for MouseMoveSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseMoveSignal {
    pub fn new() -> Self {
        Self::with_limits(None, SLOW_DISPATCH_MS)
    }

    pub(crate) fn with_limits(gesture_timeout: Option<Duration>, slow_dispatch_ms: f64) -> Self {
        Self {
            slots: Mutex::new(Vec::new()),
            gesture_timeout: Mutex::new(gesture_timeout),
            slow_dispatch_ms,
            stats: Mutex::new(OperationStats::default()),
        }
    }

    /// Connect a plain handler, called once per event.
    pub fn connect<F>(&self, handler: F, options: SlotOptions) -> SlotId
    where
        F: FnMut(&MouseEvent) -> CanvasResult<()> + Send + 'static,
    {
        self.push_slot(SlotKind::Plain(Box::new(handler)), options)
    }

    /// Connect a gesture slot. `factory` builds a fresh gesture on every
    /// press; the instance then receives the press and all later events.
    pub fn connect_gesture<F, G>(&self, mut factory: F, options: SlotOptions) -> SlotId
    where
        F: FnMut(&MouseEvent) -> G + Send + 'static,
        G: Gesture + 'static,
    {
        let factory: GestureFactory =
            Box::new(move |ev: &MouseEvent| Box::new(factory(ev)) as Box<dyn Gesture>);
        self.push_slot(
            SlotKind::Gesture {
                factory,
                active: None,
            },
            options,
        )
    }

    fn push_slot(&self, kind: SlotKind, options: SlotOptions) -> SlotId {
        let id = SlotId::next();
        let slot = Slot {
            id,
            kind,
            throttle: Throttle::new(options.throttle_ms, options.leading),
        };
        self.slots.lock().push((id, Arc::new(Mutex::new(slot))));
        trace!(slot = %id, ?options, "Slot connected");
        id
    }

    /// Disconnect `slot`, or every slot when `None`.
    pub fn disconnect(&self, slot: Option<SlotId>, missing_ok: bool) -> CanvasResult<()> {
        let mut slots = self.slots.lock();
        match slot {
            None => {
                slots.clear();
                Ok(())
            }
            Some(id) => match slots.iter().position(|(sid, _)| *sid == id) {
                Some(idx) => {
                    slots.remove(idx);
                    trace!(slot = %id, "Slot disconnected");
                    Ok(())
                }
                None if missing_ok => Ok(()),
                None => Err(CanvasError::SlotNotFound(id.as_u64())),
            },
        }
    }

    pub fn is_connected(&self, id: SlotId) -> bool {
        self.slots.lock().iter().any(|(sid, _)| *sid == id)
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    pub fn set_gesture_timeout(&self, timeout: Option<Duration>) {
        *self.gesture_timeout.lock() = timeout;
    }

    /// Deliver `event` to every slot.
    pub fn emit(&self, event: &MouseEvent) -> CanvasResult<()> {
        self.emit_at(event, Instant::now())
    }

    /// Deliver `event` using `now` as the clock reading for throttling and
    /// gesture timeouts.
    pub fn emit_at(&self, event: &MouseEvent, now: Instant) -> CanvasResult<()> {
        profile_scope!("mouse_moved::emit");
        let (result, elapsed_ms) = measure(|| self.deliver_all(event, now));
        self.stats.lock().record(elapsed_ms);
        if elapsed_ms > self.slow_dispatch_ms {
            warn!(
                elapsed_ms = format!("{:.2}", elapsed_ms),
                event = ?event.event_type,
                "Slow mouse event dispatch"
            );
        }
        result
    }

    fn deliver_all(&self, event: &MouseEvent, now: Instant) -> CanvasResult<()> {
        let timeout = *self.gesture_timeout.lock();
        let snapshot: Vec<_> = self
            .slots
            .lock()
            .iter()
            .map(|(id, slot)| (*id, Arc::clone(slot)))
            .collect();

        let mut first_error = None;
        for (id, slot) in snapshot {
            if !self.is_connected(id) {
                continue;
            }
            let Some(mut slot) = slot.try_lock() else {
                warn!(slot = %id, "Re-entrant mouse event skipped");
                continue;
            };
            if let Err(e) = slot.deliver(event, now, timeout) {
                warn!(slot = %id, error = %e, "Slot failed, continuing delivery");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Synthesize a full drag: press at the first position, a move to each
    /// following position, release at the last one.
    ///
    /// Every event is emitted even when a slot fails, so other slots always
    /// see the release. The first error is returned at the end.
    pub fn emulate_drag<I, P>(
        &self,
        positions: I,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> CanvasResult<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points: Vec<Point> = positions.into_iter().map(Into::into).collect();
        let (first, last) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(CanvasError::EmptyGesture),
        };

        let events = std::iter::once(MouseEvent::press(button, modifiers, first))
            .chain(
                points[1..]
                    .iter()
                    .map(|pos| MouseEvent::moved(button, modifiers, *pos)),
            )
            .chain(std::iter::once(MouseEvent::release(button, modifiers, last)));

        let mut first_error = None;
        for event in events {
            if let Err(e) = self.emit(&event) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Synthesize a press immediately followed by a release.
    pub fn emulate_click(
        &self,
        pos: impl Into<Point>,
        button: MouseButton,
        modifiers: Modifiers,
    ) -> CanvasResult<()> {
        self.emulate_drag([pos.into()], button, modifiers)
    }

    /// Drop every active gesture, letting each clean up first.
    pub fn abandon_gestures(&self) {
        let snapshot: Vec<_> = self.slots.lock().iter().map(|(_, s)| Arc::clone(s)).collect();
        for slot in snapshot {
            match slot.try_lock() {
                Some(mut slot) => slot.abandon(),
                None => warn!("Cannot abandon gesture of a running slot"),
            }
        }
    }

    /// Number of slots with a gesture in progress
    pub fn active_gestures(&self) -> usize {
        self.slots
            .lock()
            .iter()
            .filter(|(_, slot)| slot.try_lock().is_some_and(|s| s.has_active_gesture()))
            .count()
    }

    /// Timing statistics of recent `emit` calls
    pub fn dispatch_stats(&self) -> OperationStats {
        self.stats.lock().clone()
    }
}

impl fmt::Debug for MouseMoveSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseMoveSignal")
            .field("slots", &self.len())
            .field("gesture_timeout", &*self.gesture_timeout.lock())
            .finish()
    }
}
