//! Mouse event types.
//!
//! # Main Types
//!
//! - [`MouseButton`]: the button involved in an event.
//! - [`Modifiers`]: keyboard modifiers held during an event.
//! - [`MouseEventType`]: press, move, release or double click.
//! - [`MouseEvent`]: the value delivered to every slot of a `MouseMoveSignal`.

use crate::error::CanvasError;
use crate::geometry::Point;
use bitflags::bitflags;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Represents a mouse button that can be pressed or released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button (hover moves)
    #[default]
    None,
    Left,
    Middle,
    Right,
    Back,
    Forward,
}

impl Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::None => "none",
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::Back => "back",
            MouseButton::Forward => "forward",
        };
        f.write_str(name)
    }
}

impl FromStr for MouseButton {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Ok(MouseButton::None),
            "left" => Ok(MouseButton::Left),
            "middle" => Ok(MouseButton::Middle),
            "right" => Ok(MouseButton::Right),
            "back" => Ok(MouseButton::Back),
            "forward" => Ok(MouseButton::Forward),
            other => Err(CanvasError::InvalidButton(other.to_string())),
        }
    }
}

bitflags! {
    /// Set of held modifier keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

impl Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.contains(Modifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.contains(Modifiers::CTRL) {
            parts.push("Ctrl");
        }
        if self.contains(Modifiers::ALT) {
            parts.push("Alt");
        }
        if self.contains(Modifiers::META) {
            parts.push("Meta");
        }

        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

impl FromStr for Modifiers {
    type Err = CanvasError;

    /// Parses `"shift+ctrl"` style strings. Repeated keys collapse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mods = Modifiers::empty();
        for part in s.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            mods |= match part.to_ascii_lowercase().as_str() {
                "none" => Modifiers::empty(),
                "shift" => Modifiers::SHIFT,
                "ctrl" | "control" => Modifiers::CTRL,
                "alt" => Modifiers::ALT,
                "meta" | "cmd" | "super" => Modifiers::META,
                other => return Err(CanvasError::InvalidModifier(other.to_string())),
            };
        }
        Ok(mods)
    }
}

/// Kind of mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventType {
    Move,
    /// Button pressed
    Click,
    Release,
    DoubleClick,
}

/// A single mouse event in canvas coordinates.
///
/// `update` overwrites every field so that a suspended gesture holding the
/// event can observe the latest state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub pos: Point,
    pub event_type: MouseEventType,
}

impl MouseEvent {
    pub fn new(
        button: MouseButton,
        modifiers: Modifiers,
        pos: impl Into<Point>,
        event_type: MouseEventType,
    ) -> Self {
        Self {
            button,
            modifiers,
            pos: pos.into(),
            event_type,
        }
    }

    /// Button press at `pos`
    pub fn press(button: MouseButton, modifiers: Modifiers, pos: impl Into<Point>) -> Self {
        Self::new(button, modifiers, pos, MouseEventType::Click)
    }

    /// Move with `button` held
    pub fn moved(button: MouseButton, modifiers: Modifiers, pos: impl Into<Point>) -> Self {
        Self::new(button, modifiers, pos, MouseEventType::Move)
    }

    pub fn release(button: MouseButton, modifiers: Modifiers, pos: impl Into<Point>) -> Self {
        Self::new(button, modifiers, pos, MouseEventType::Release)
    }

    /// Overwrite all fields with those of `other`.
    pub fn update(&mut self, other: &MouseEvent) {
        self.button = other.button;
        self.modifiers = other.modifiers;
        self.pos = other.pos;
        self.event_type = other.event_type;
    }

    #[inline]
    pub fn is_press(&self) -> bool {
        self.event_type == MouseEventType::Click
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        self.event_type == MouseEventType::Move
    }

    #[inline]
    pub fn is_release(&self) -> bool {
        self.event_type == MouseEventType::Release
    }
}
