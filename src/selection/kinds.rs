//! Concrete selection tools and their factories.
//!
//! Reduction rules:
//! - line: the literal (start, current) pair
//! - rect: the box with corners (start, current), sorted when read
//! - x/y span: only the matching coordinate of start and current
//! - lasso: every move appends a vertex; the polygon closes implicitly

use super::region::{LineSelection, PolygonSelection, RectSelection, XSpanSelection, YSpanSelection};
use super::tool::{SelectionKind, SelectionTool, SelectorOptions};
use crate::canvas::Canvas;
use crate::error::CanvasResult;
use crate::geometry::Point;
use crate::layer::OverlayShape;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct LineKind;

impl SelectionKind for LineKind {
    type Shape = LineSelection;
    type Selection = LineSelection;

    const NAME: &'static str = "line_selection";

    fn begin(&self, start: Point) -> LineSelection {
        LineSelection { start, end: start }
    }

    fn drag(&self, shape: &mut LineSelection, _start: Point, current: Point) {
        shape.end = current;
    }

    fn selection(&self, shape: &LineSelection) -> LineSelection {
        *shape
    }

    fn overlay(&self, shape: &LineSelection) -> OverlayShape {
        OverlayShape::Line {
            start: shape.start,
            end: shape.end,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RectKind;

impl SelectionKind for RectKind {
    /// Raw (press, current) corners
    type Shape = (Point, Point);
    type Selection = RectSelection;

    const NAME: &'static str = "rect_selection";

    fn begin(&self, start: Point) -> (Point, Point) {
        (start, start)
    }

    fn drag(&self, shape: &mut (Point, Point), start: Point, current: Point) {
        *shape = (start, current);
    }

    fn selection(&self, &(a, b): &(Point, Point)) -> RectSelection {
        RectSelection::from_corners(a, b)
    }

    fn overlay(&self, &(corner, opposite): &(Point, Point)) -> OverlayShape {
        OverlayShape::Rect { corner, opposite }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XSpanKind;

impl SelectionKind for XSpanKind {
    type Shape = (f64, f64);
    type Selection = XSpanSelection;

    const NAME: &'static str = "xspan_selection";

    fn begin(&self, start: Point) -> (f64, f64) {
        (start.x, start.x)
    }

    fn drag(&self, shape: &mut (f64, f64), start: Point, current: Point) {
        *shape = (start.x, current.x);
    }

    fn selection(&self, &(a, b): &(f64, f64)) -> XSpanSelection {
        XSpanSelection::new(a, b)
    }

    fn overlay(&self, &(start, end): &(f64, f64)) -> OverlayShape {
        OverlayShape::XSpan { start, end }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YSpanKind;

impl SelectionKind for YSpanKind {
    type Shape = (f64, f64);
    type Selection = YSpanSelection;

    const NAME: &'static str = "yspan_selection";

    fn begin(&self, start: Point) -> (f64, f64) {
        (start.y, start.y)
    }

    fn drag(&self, shape: &mut (f64, f64), start: Point, current: Point) {
        *shape = (start.y, current.y);
    }

    fn selection(&self, &(a, b): &(f64, f64)) -> YSpanSelection {
        YSpanSelection::new(a, b)
    }

    fn overlay(&self, &(start, end): &(f64, f64)) -> OverlayShape {
        OverlayShape::YSpan { start, end }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LassoKind;

impl SelectionKind for LassoKind {
    type Shape = Vec<Point>;
    type Selection = PolygonSelection;

    const NAME: &'static str = "lasso_selection";

    fn begin(&self, start: Point) -> Vec<Point> {
        vec![start]
    }

    fn drag(&self, shape: &mut Vec<Point>, _start: Point, current: Point) {
        shape.push(current);
    }

    fn selection(&self, shape: &Vec<Point>) -> PolygonSelection {
        PolygonSelection {
            vertices: shape.clone(),
        }
    }

    fn overlay(&self, shape: &Vec<Point>) -> OverlayShape {
        OverlayShape::Polygon {
            vertices: shape.clone(),
        }
    }
}

pub type LineSelector = SelectionTool<LineKind>;
pub type RectSelector = SelectionTool<RectKind>;
pub type XSpanSelector = SelectionTool<XSpanKind>;
pub type YSpanSelector = SelectionTool<YSpanKind>;
pub type LassoSelector = SelectionTool<LassoKind>;

/// Line selector: reports the (press, last move) pair.
pub fn line_selector(canvas: &Arc<Canvas>, options: SelectorOptions) -> CanvasResult<LineSelector> {
    SelectionTool::new(canvas, LineKind, options)
}

pub fn rect_selector(canvas: &Arc<Canvas>, options: SelectorOptions) -> CanvasResult<RectSelector> {
    SelectionTool::new(canvas, RectKind, options)
}

/// Horizontal span selector; the y coordinate of the drag is ignored.
pub fn xspan_selector(canvas: &Arc<Canvas>, options: SelectorOptions) -> CanvasResult<XSpanSelector> {
    SelectionTool::new(canvas, XSpanKind, options)
}

/// Vertical span selector; the x coordinate of the drag is ignored.
pub fn yspan_selector(canvas: &Arc<Canvas>, options: SelectorOptions) -> CanvasResult<YSpanSelector> {
    SelectionTool::new(canvas, YSpanKind, options)
}

pub fn lasso_selector(canvas: &Arc<Canvas>, options: SelectorOptions) -> CanvasResult<LassoSelector> {
    SelectionTool::new(canvas, LassoKind, options)
}
