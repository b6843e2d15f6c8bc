//! Interactive region selection.
//!
//! A selection tool listens to a canvas's `MouseMoveSignal`, draws an
//! overlay while the user drags, and reports the resulting region through
//! its `changed` signal.
//!
//! ## Modules
//!
//! - `region` - Selection values and containment predicates
//! - `tool` - The drag state machine shared by every tool
//! - `kinds` - Line, rectangle, span and lasso tools and their factories

mod kinds;
mod region;
mod tool;

pub use kinds::{
    LassoKind, LassoSelector, LineKind, LineSelector, RectKind, RectSelector, XSpanKind,
    XSpanSelector, YSpanKind, YSpanSelector, lasso_selector, line_selector, rect_selector,
    xspan_selector, yspan_selector,
};
pub use region::{
    LineSelection, PolygonSelection, RectSelection, Region, XSpanSelection, YSpanSelection,
};
pub use tool::{SelectionKind, SelectionTool, SelectorOptions, ToolState};
