//! Mouse gesture dispatch and interactive region selection for whitecanvas.
//!
//! A [`Canvas`] broadcasts mouse events through its [`MouseMoveSignal`].
//! Selection tools (`line_selector`, `rect_selector`, `xspan_selector`,
//! `yspan_selector`, `lasso_selector`) connect to it as gesture slots, draw
//! an overlay while the user drags and report the selected region through
//! their `changed` signal.
//!
//! ```ignore
//! let canvas = Canvas::new();
//! let tool = xspan_selector(&canvas, SelectorOptions::default())?;
//! tool.changed()?.connect(|span| println!("{:?}", span));
//! canvas.mouse_moved().emulate_drag([(0.0, 0.0), (1.0, 3.0)], MouseButton::Left, Modifiers::empty())?;
//! ```

pub mod canvas;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layer;
pub mod logging;
pub mod perf;
pub mod selection;
pub mod settings;
pub mod spatial_index;

pub use canvas::Canvas;
pub use error::{CanvasError, CanvasResult};
pub use geometry::{Bounds, Point};
pub use input::{
    Gesture, GestureStep, Modifiers, MouseButton, MouseEvent, MouseEventType, MouseMoveSignal,
    Signal, SlotId, SlotOptions,
};
pub use layer::{Color, LayerHandle, LineStyle, OverlayLayer, OverlayShape, OverlayStyle};
pub use selection::{
    LineSelection, PolygonSelection, RectSelection, Region, SelectionKind, SelectionTool,
    SelectorOptions, XSpanSelection, YSpanSelection, lasso_selector, line_selector,
    rect_selector, xspan_selector, yspan_selector,
};
pub use settings::InteractionSettings;
pub use spatial_index::PointIndex;
