//! Headless host canvas.
//!
//! The canvas owns an ordered list of overlay layers and the mouse-move
//! dispatcher. It knows nothing about selection tools; tools keep a `Weak`
//! reference back to it and fail with `ReferenceDeleted` once it is gone.

use crate::input::MouseMoveSignal;
use crate::layer::{LayerHandle, OverlayLayer};
use crate::settings::InteractionSettings;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

pub struct Canvas {
    layers: RwLock<Vec<LayerHandle>>,
    mouse_moved: MouseMoveSignal,
    settings: InteractionSettings,
}

impl Canvas {
    pub fn new() -> Arc<Self> {
        Self::with_settings(InteractionSettings::default())
    }

    pub fn with_settings(settings: InteractionSettings) -> Arc<Self> {
        Arc::new(Self {
            layers: RwLock::new(Vec::new()),
            mouse_moved: MouseMoveSignal::with_limits(
                settings.gesture_timeout(),
                settings.slow_dispatch_ms,
            ),
            settings,
        })
    }

    /// Dispatcher for every mouse event on this canvas
    pub fn mouse_moved(&self) -> &MouseMoveSignal {
        &self.mouse_moved
    }

    pub fn settings(&self) -> &InteractionSettings {
        &self.settings
    }

    /// Append a layer. Adding a layer that is already present is a no-op.
    pub fn add_layer(&self, layer: &LayerHandle) {
        let mut layers = self.layers.write();
        if layers.iter().any(|l| Arc::ptr_eq(l, layer)) {
            return;
        }
        trace!(layer = layer.read().name(), "Layer added");
        layers.push(Arc::clone(layer));
    }

    /// Remove a layer, returning whether it was present.
    pub fn remove_layer(&self, layer: &LayerHandle) -> bool {
        let mut layers = self.layers.write();
        match layers.iter().position(|l| Arc::ptr_eq(l, layer)) {
            Some(idx) => {
                layers.remove(idx);
                trace!(layer = layer.read().name(), "Layer removed");
                true
            }
            None => false,
        }
    }

    pub fn contains_layer(&self, layer: &LayerHandle) -> bool {
        self.layers.read().iter().any(|l| Arc::ptr_eq(l, layer))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.read().len()
    }

    /// Snapshot of the layers, bottom to top
    pub fn layers(&self) -> Vec<LayerHandle> {
        self.layers.read().clone()
    }

    /// Copy of every visible layer's current state
    pub fn visible_layers(&self) -> Vec<OverlayLayer> {
        self.layers
            .read()
            .iter()
            .map(|l| l.read().clone())
            .filter(|l| l.visible)
            .collect()
    }
}

impl Drop for Canvas {
    fn drop(&mut self) {
        debug!(layers = self.layer_count(), "Canvas dropped, abandoning gestures");
        self.mouse_moved.abandon_gestures();
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("layers", &self.layer_count())
            .field("mouse_moved", &self.mouse_moved)
            .finish()
    }
}
