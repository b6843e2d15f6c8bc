//! Test helpers for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder for canvases with custom settings
//! - `Recorder` - Collects every payload a `Signal` emits
//! - `drag` / `click` - Left-button gestures without modifiers

use parking_lot::Mutex;
use std::sync::Arc;
use whitecanvas::{
    Canvas, CanvasResult, InteractionSettings, Modifiers, MouseButton, Point, Signal,
};

// ============================================================================
// TestCanvasBuilder
// ============================================================================

/// Builder for test canvases.
///
/// # Example
/// ```ignore
/// let canvas = TestCanvasBuilder::new()
///     .with_throttle(16)
///     .with_gesture_timeout(100)
///     .build();
/// ```
#[derive(Default)]
pub struct TestCanvasBuilder {
    settings: InteractionSettings,
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        whitecanvas::logging::init_for_tests();
        Self::default()
    }

    pub fn with_throttle(mut self, throttle_ms: u64) -> Self {
        self.settings.throttle_ms = throttle_ms;
        self
    }

    pub fn with_leading(mut self, leading: bool) -> Self {
        self.settings.leading = leading;
        self
    }

    pub fn with_gesture_timeout(mut self, timeout_ms: u64) -> Self {
        self.settings.gesture_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn build(self) -> Arc<Canvas> {
        Canvas::with_settings(self.settings)
    }
}

/// A canvas with default settings.
pub fn canvas() -> Arc<Canvas> {
    TestCanvasBuilder::new().build()
}

// ============================================================================
// Recorder
// ============================================================================

/// Collects the payloads of a signal.
pub struct Recorder<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn attach(signal: &Signal<T>) -> Self {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        signal.connect(move |v: &T| sink.lock().push(v.clone()));
        Self { values }
    }

    pub fn count(&self) -> usize {
        self.values.lock().len()
    }

    pub fn values(&self) -> Vec<T> {
        self.values.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().last().cloned()
    }
}

// ============================================================================
// Gestures
// ============================================================================

/// Left-button drag through `positions`.
pub fn drag<P: Into<Point>>(
    canvas: &Canvas,
    positions: impl IntoIterator<Item = P>,
) -> CanvasResult<()> {
    canvas
        .mouse_moved()
        .emulate_drag(positions, MouseButton::Left, Modifiers::empty())
}

/// Left-button click at `pos`.
pub fn click(canvas: &Canvas, pos: impl Into<Point>) -> CanvasResult<()> {
    canvas
        .mouse_moved()
        .emulate_click(pos, MouseButton::Left, Modifiers::empty())
}
