//! Mouse input handling for the canvas.
//!
//! ## Architecture
//!
//! Events flow from the host into a `MouseMoveSignal`, which fans them out to
//! plain slots (one call per event) and gesture slots (one `Gesture` instance
//! per press → release sequence). Selection tools are gesture slots.
//!
//! ## Modules
//!
//! - `events` - Mouse buttons, modifier sets and the event value type
//! - `signal` - Generic `Signal<T>` used for `changed` notifications
//! - `mouse_signal` - The mouse event dispatcher and the `Gesture` trait
//! - `throttle` - Per-slot move throttling

mod events;
mod mouse_signal;
mod signal;
mod throttle;

pub use events::{Modifiers, MouseButton, MouseEvent, MouseEventType};
pub use mouse_signal::{Gesture, GestureStep, MouseMoveSignal, SlotOptions};
pub use signal::{Signal, SlotId};
