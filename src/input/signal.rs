//! Minimal observer broadcaster.
//!
//! `Signal<T>` carries a tool's `changed` notification. Emission iterates a
//! snapshot of the connected slots, so callbacks may connect or disconnect
//! slots (including themselves) while an emission is in flight.

use crate::error::{CanvasError, CanvasResult};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Global counter for slot identities
static NEXT_SLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a connected slot. Disconnection matches on identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

impl SlotId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SLOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// Broadcasts a value to every connected callback, in registration order.
pub struct Signal<T> {
    name: &'static str,
    slots: Mutex<Vec<(SlotId, Arc<Mutex<Callback<T>>>)>>,
}

impl<T> Signal<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Connect a callback. The returned id is the handle for `disconnect`.
    pub fn connect<F>(&self, callback: F) -> SlotId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = SlotId::next();
        self.slots
            .lock()
            .push((id, Arc::new(Mutex::new(Box::new(callback)))));
        id
    }

    /// Disconnect `slot`, or every slot when `None`.
    ///
    /// Fails with `SlotNotFound` for an unknown slot unless `missing_ok`.
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
                    Ok(())
                }
                None if missing_ok => Ok(()),
                None => Err(CanvasError::SlotNotFound(id.as_u64())),
            },
        }
    }

    /// Deliver `value` to every connected slot.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<_> = self
            .slots
            .lock()
            .iter()
            .map(|(id, cb)| (*id, Arc::clone(cb)))
            .collect();

        for (id, callback) in snapshot {
            // Skip slots disconnected by an earlier callback of this emission
            if !self.is_connected(id) {
                continue;
            }
            match callback.try_lock() {
                Some(mut guard) => {
                    let callback = &mut *guard;
                    callback(value);
                }
                None => warn!(signal = self.name, slot = %id, "Re-entrant emission skipped"),
            }
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
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("slots", &self.len())
            .finish()
    }
}
