//! Selection tool base: drives a drag gesture to completion.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (press with an accepted button and exactly the
//!                         required modifiers; overlay attached)
//! Dragging -> Dragging   (move; overlay reshaped, `changed` if tracking)
//! Dragging -> Idle       (release; `changed` emitted once. A release
//!                         without any move removes the overlay)
//! Dragging -> Idle       (abandoned: disabled, timed out, canvas dropped)
//! ```
//!
//! Presses that do not match the button/modifier filter are ignored without
//! any notification, so several tools can share one canvas.

use super::region::Region;
use crate::canvas::Canvas;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::Point;
use crate::input::{
    Gesture, GestureStep, Modifiers, MouseButton, MouseEvent, MouseEventType, Signal, SlotId,
};
use crate::layer::{Color, LayerHandle, LineStyle, OverlayLayer, OverlayShape, OverlayStyle};
use crate::profile_scope;
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tracing::{debug, trace, warn};

/// How a concrete tool reduces drag points to an overlay and a selection.
pub trait SelectionKind: Send + Sync + 'static {
    /// Geometry accumulated while dragging
    type Shape: Clone + fmt::Debug + Send + Sync;
    /// Value reported through `changed`
    type Selection: Region + Clone + fmt::Debug + Send + Sync + 'static;

    /// Name of the overlay layer
    const NAME: &'static str;

    /// Shape right after the press at `start`.
    fn begin(&self, start: Point) -> Self::Shape;

    /// Update `shape` for a move to `current`.
    fn drag(&self, shape: &mut Self::Shape, start: Point, current: Point);

    fn selection(&self, shape: &Self::Shape) -> Self::Selection;

    fn overlay(&self, shape: &Self::Shape) -> OverlayShape;
}

// ============================================================================
// Options
// ============================================================================

/// Which presses start a drag, and when `changed` fires.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOptions {
    /// Accepted buttons
    pub buttons: Vec<MouseButton>,
    /// Modifiers that must be held, exactly
    pub modifiers: Modifiers,
    /// Emit `changed` on every move, not only on release
    pub tracking: bool,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            buttons: vec![MouseButton::Left],
            modifiers: Modifiers::empty(),
            tracking: false,
        }
    }
}

impl SelectorOptions {
    pub fn buttons(mut self, buttons: impl IntoIterator<Item = MouseButton>) -> Self {
        self.buttons = buttons.into_iter().collect();
        self
    }

    /// Accepted buttons from a comma separated list such as `"left,right"`.
    pub fn button_names(mut self, names: &str) -> CanvasResult<Self> {
        self.buttons = names
            .split(',')
            .map(str::parse)
            .collect::<CanvasResult<Vec<MouseButton>>>()?;
        Ok(self)
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn tracking(mut self, tracking: bool) -> Self {
        self.tracking = tracking;
        self
    }

    fn validate(&self) -> CanvasResult<()> {
        if self.buttons.contains(&MouseButton::None) {
            return Err(CanvasError::InvalidButton(MouseButton::None.to_string()));
        }
        Ok(())
    }

    fn accepts(&self, event: &MouseEvent) -> bool {
        self.buttons.contains(&event.button) && event.modifiers == self.modifiers
    }
}

// ============================================================================
// State
// ============================================================================

/// Gesture state of a tool.
#[derive(Debug, Clone)]
pub enum ToolState<S> {
    /// No gesture; the overlay is absent or shows the committed selection
    Idle,
    Dragging {
        start: Point,
        /// At least one move since the press
        dragged: bool,
        shape: S,
    },
}

impl<S> Default for ToolState<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S> ToolState<S> {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

#[derive(Debug)]
struct ToolCore<S> {
    state: ToolState<S>,
    /// Shape of the last completed drag, while the overlay shows it
    committed: Option<S>,
}

struct ToolInner<K: SelectionKind> {
    kind: K,
    canvas: Weak<Canvas>,
    options: SelectorOptions,
    enabled: AtomicBool,
    core: Mutex<ToolCore<K::Shape>>,
    overlay: LayerHandle,
    changed: Signal<K::Selection>,
}

impl<K: SelectionKind> ToolInner<K> {
    fn canvas(&self) -> CanvasResult<Arc<Canvas>> {
        self.canvas.upgrade().ok_or_else(CanvasError::canvas_deleted)
    }

    fn set_overlay_shape(&self, shape: &K::Shape) {
        self.overlay.write().shape = self.kind.overlay(shape);
    }

    fn begin(&self, start: Point) -> CanvasResult<()> {
        let canvas = self.canvas()?;
        let shape = self.kind.begin(start);
        self.set_overlay_shape(&shape);
        canvas.add_layer(&self.overlay);

        self.core.lock().state = ToolState::Dragging {
            start,
            dragged: false,
            shape,
        };
        debug!(tool = K::NAME, %start, "Selection drag started");
        Ok(())
    }

    fn drag(&self, current: Point) -> GestureStep {
        profile_scope!("selection::drag");
        let tracked = {
            let mut core = self.core.lock();
            let ToolState::Dragging {
                start,
                dragged,
                shape,
            } = &mut core.state
            else {
                // Cleared or abandoned from outside
                return GestureStep::Done;
            };
            self.kind.drag(shape, *start, current);
            *dragged = true;
            self.set_overlay_shape(shape);
            trace!(tool = K::NAME, %current, "Selection drag updated");
            self.options.tracking.then(|| self.kind.selection(shape))
        };

        if let Some(selection) = tracked {
            self.changed.emit(&selection);
        }
        GestureStep::Continue
    }

    fn finish(&self) -> CanvasResult<()> {
        let (shape, dragged) = {
            let mut core = self.core.lock();
            match std::mem::take(&mut core.state) {
                ToolState::Dragging { shape, dragged, .. } => {
                    core.committed = dragged.then(|| shape.clone());
                    (shape, dragged)
                }
                ToolState::Idle => return Ok(()),
            }
        };

        if !dragged {
            // A click discards the selection
            let canvas = self.canvas()?;
            canvas.remove_layer(&self.overlay);
            self.overlay.write().shape = OverlayShape::Empty;
        }

        let selection = self.kind.selection(&shape);
        debug!(tool = K::NAME, dragged, ?selection, "Selection drag finished");
        self.changed.emit(&selection);
        Ok(())
    }

    /// Drop an unfinished drag, restoring the committed overlay if any.
    fn abort(&self) {
        let mut core = self.core.lock();
        if !core.state.is_dragging() {
            return;
        }
        core.state = ToolState::Idle;
        match &core.committed {
            Some(shape) => self.set_overlay_shape(shape),
            None => {
                self.overlay.write().shape = OverlayShape::Empty;
                if let Some(canvas) = self.canvas.upgrade() {
                    canvas.remove_layer(&self.overlay);
                }
            }
        }
        debug!(tool = K::NAME, "Selection drag abandoned");
    }
}

// ============================================================================
// Gesture
// ============================================================================

/// One press → release sequence handled on behalf of a tool.
struct SelectionGesture<K: SelectionKind> {
    tool: Weak<ToolInner<K>>,
    active: bool,
}

impl<K: SelectionKind> Gesture for SelectionGesture<K> {
    fn advance(&mut self, event: &MouseEvent) -> CanvasResult<GestureStep> {
        let Some(tool) = self.tool.upgrade() else {
            return Ok(GestureStep::Done);
        };

        match event.event_type {
            MouseEventType::Click => {
                if !tool.enabled.load(Ordering::Relaxed) || !tool.options.accepts(event) {
                    return Ok(GestureStep::Done);
                }
                tool.begin(event.pos)?;
                self.active = true;
                Ok(GestureStep::Continue)
            }
            MouseEventType::Move => {
                if !tool.enabled.load(Ordering::Relaxed) {
                    tool.abort();
                    self.active = false;
                    return Ok(GestureStep::Done);
                }
                let step = tool.drag(event.pos);
                self.active = step == GestureStep::Continue;
                Ok(step)
            }
            MouseEventType::Release => {
                self.active = false;
                tool.finish()?;
                Ok(GestureStep::Done)
            }
            MouseEventType::DoubleClick => Ok(GestureStep::Continue),
        }
    }

    fn abandon(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(tool) = self.tool.upgrade() {
            tool.abort();
        }
    }
}

// ============================================================================
// Tool
// ============================================================================

/// An interactive selection tool attached to a canvas.
///
/// The tool owns its overlay layer and holds the canvas weakly. Once the
/// canvas is dropped every public method returns `ReferenceDeleted`.
pub struct SelectionTool<K: SelectionKind> {
    inner: Arc<ToolInner<K>>,
    slot: SlotId,
}

impl<K: SelectionKind> SelectionTool<K> {
    pub fn new(canvas: &Arc<Canvas>, kind: K, options: SelectorOptions) -> CanvasResult<Self> {
        options.validate()?;

        let settings = canvas.settings();
        let inner = Arc::new(ToolInner {
            kind,
            canvas: Arc::downgrade(canvas),
            options,
            enabled: AtomicBool::new(true),
            core: Mutex::new(ToolCore {
                state: ToolState::Idle,
                committed: None,
            }),
            overlay: OverlayLayer::new(K::NAME, settings.overlay).into_handle(),
            changed: Signal::new("changed"),
        });

        let weak = Arc::downgrade(&inner);
        let slot = canvas.mouse_moved().connect_gesture(
            move |_press: &MouseEvent| SelectionGesture {
                tool: weak.clone(),
                active: false,
            },
            settings.slot_options(),
        );
        debug!(tool = K::NAME, slot = %slot, "Selection tool attached");

        Ok(Self { inner, slot })
    }

    /// Notification carrying the current selection value
    pub fn changed(&self) -> CanvasResult<&Signal<K::Selection>> {
        self.inner.canvas()?;
        Ok(&self.inner.changed)
    }

    pub fn enabled(&self) -> CanvasResult<bool> {
        self.inner.canvas()?;
        Ok(self.inner.enabled.load(Ordering::Relaxed))
    }

    /// Pause or resume event handling. Disabling during a drag abandons it.
    pub fn set_enabled(&self, enabled: bool) -> CanvasResult<()> {
        self.inner.canvas()?;
        self.inner.enabled.store(enabled, Ordering::Relaxed);
        if !enabled {
            self.inner.abort();
        }
        Ok(())
    }

    pub fn is_dragging(&self) -> CanvasResult<bool> {
        self.inner.canvas()?;
        Ok(self.inner.core.lock().state.is_dragging())
    }

    /// The committed selection, if the overlay currently shows one.
    pub fn selection(&self) -> CanvasResult<Option<K::Selection>> {
        self.inner.canvas()?;
        let core = self.inner.core.lock();
        Ok(core
            .committed
            .as_ref()
            .map(|shape| self.inner.kind.selection(shape)))
    }

    /// Remove the overlay and forget the selection. Safe to repeat.
    pub fn clear_selection(&self) -> CanvasResult<()> {
        let canvas = self.inner.canvas()?;
        {
            let mut core = self.inner.core.lock();
            core.state = ToolState::Idle;
            core.committed = None;
        }
        if canvas.remove_layer(&self.inner.overlay) {
            trace!(tool = K::NAME, "Selection cleared");
        }
        self.inner.overlay.write().shape = OverlayShape::Empty;
        Ok(())
    }

    /// The overlay layer owned by this tool
    pub fn overlay(&self) -> CanvasResult<LayerHandle> {
        self.inner.canvas()?;
        Ok(Arc::clone(&self.inner.overlay))
    }

    pub fn style(&self) -> CanvasResult<OverlayStyle> {
        self.inner.canvas()?;
        Ok(self.inner.overlay.read().style)
    }

    pub fn set_color(&self, color: Color) -> CanvasResult<()> {
        self.update_style(|style| style.color = color)
    }

    pub fn set_width(&self, width: f32) -> CanvasResult<()> {
        self.update_style(|style| style.width = width)
    }

    pub fn set_line_style(&self, line_style: LineStyle) -> CanvasResult<()> {
        self.update_style(|style| style.line_style = line_style)
    }

    pub fn set_alpha(&self, alpha: f32) -> CanvasResult<()> {
        self.update_style(|style| style.alpha = alpha.clamp(0.0, 1.0))
    }

    fn update_style(&self, f: impl FnOnce(&mut OverlayStyle)) -> CanvasResult<()> {
        self.inner.canvas()?;
        f(&mut self.inner.overlay.write().style);
        Ok(())
    }
}

impl<K: SelectionKind> Drop for SelectionTool<K> {
    fn drop(&mut self) {
        let Some(canvas) = self.inner.canvas.upgrade() else {
            return;
        };
        if let Err(e) = canvas.mouse_moved().disconnect(Some(self.slot), true) {
            warn!(tool = K::NAME, error = %e, "Failed to disconnect selection tool");
        }
        canvas.remove_layer(&self.inner.overlay);
    }
}

impl<K: SelectionKind> fmt::Debug for SelectionTool<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionTool")
            .field("kind", &K::NAME)
            .field("options", &self.inner.options)
            .field("slot", &self.slot)
            .finish()
    }
}
