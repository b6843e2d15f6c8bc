//! Containment predicates of every selection value, through the public API.
//!
//! Polygon edge and vertex cases live next to the ray-casting code in
//! `selection::region`.

use whitecanvas::{
    Bounds, LineSelection, Point, PolygonSelection, RectSelection, Region, XSpanSelection,
    YSpanSelection,
};

fn unit_square() -> PolygonSelection {
    PolygonSelection::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

fn lasso() -> PolygonSelection {
    PolygonSelection::new([
        (0.0, 0.0),
        (0.0, 1.0),
        (2.0, 1.0),
        (2.0, 2.0),
        (1.0, 2.0),
        (1.0, 0.0),
    ])
}

// ============================================================================
// Spans
// ============================================================================

#[test]
fn test_xspan_inclusive_and_axis_free() {
    let span = XSpanSelection::new(0.0, 1.0);
    for y in [-1e6, -3.0, 0.0, 0.5, 42.0] {
        assert!(span.contains_xy(0.5, y));
        assert!(span.contains_xy(0.0, y));
        assert!(span.contains_xy(1.0, y));
        assert!(!span.contains_xy(1.5, y));
        assert!(!span.contains_xy(-0.001, y));
    }
}

#[test]
fn test_yspan_inclusive_and_axis_free() {
    let span = YSpanSelection::new(0.0, 1.0);
    for x in [-1e6, -3.0, 0.0, 0.5, 42.0] {
        assert!(span.contains_xy(x, 0.5));
        assert!(span.contains_xy(x, 1.0));
        assert!(!span.contains_xy(x, 1.5));
    }
}

#[test]
fn test_span_sorted_on_construction() {
    let span = XSpanSelection::new(3.0, -1.0);
    assert_eq!(span.start, -1.0);
    assert_eq!(span.end, 3.0);
    assert_eq!(span.width(), 4.0);
    assert_eq!(<(f64, f64)>::from(span), (-1.0, 3.0));
}

#[test]
fn test_zero_width_span_contains_its_value() {
    let span = YSpanSelection::new(2.0, 2.0);
    assert!(span.contains_value(2.0));
    assert!(!span.contains_value(2.0 + 1e-12));
}

// ============================================================================
// Rectangle
// ============================================================================

#[test]
fn test_rect_contains() {
    let rect = RectSelection::from_corners((0.0, 0.0), (1.0, 1.0));
    assert!(rect.contains_point((0.5, 0.5)));
    assert!(!rect.contains_point((1.5, 1.5)));
    assert_eq!(
        rect.contains_points([(0.2, 0.8), (1.3, 0.8)]),
        vec![true, false]
    );
}

#[test]
fn test_rect_edges_inclusive() {
    let rect = RectSelection::new(0.0, 2.0, 0.0, 1.0);
    for p in [(0.0, 0.0), (2.0, 1.0), (1.0, 0.0), (0.0, 0.5)] {
        assert!(rect.contains_point(p), "edge point {:?} should be inside", p);
    }
}

#[test]
fn test_rect_sorts_corners() {
    let rect = RectSelection::from_corners((2.0, 5.0), (-1.0, 1.0));
    assert_eq!(rect, RectSelection::new(-1.0, 2.0, 1.0, 5.0));
    assert!(rect.left <= rect.right && rect.bottom <= rect.top);
    assert_eq!(rect.center(), Point::new(0.5, 3.0));
    assert_eq!(
        rect.bounds(),
        Some(Bounds {
            min: Point::new(-1.0, 1.0),
            max: Point::new(2.0, 5.0),
        })
    );
}

// ============================================================================
// Line
// ============================================================================

#[test]
fn test_degenerate_line_is_a_point() {
    let line = LineSelection::new((1.0, 1.0), (1.0, 1.0));
    assert!(line.contains_point((1.0, 1.0)));
    assert!(!line.contains_point((1.0, 1.1)));
}

// ============================================================================
// Polygon
// ============================================================================

#[test]
fn test_lasso_contains() {
    let poly = lasso();
    assert!(poly.contains_point((0.5, 0.5)));
    assert!(!poly.contains_point((1.5, 0.5)));
    assert_eq!(
        poly.contains_points([(1.5, 1.4), (0.2, 1.8)]),
        vec![true, false]
    );
}

#[test]
fn test_polygon_area() {
    assert!((unit_square().area() - 1.0).abs() < 1e-12);
    // The lasso crosses itself; its two lobes cancel in the signed sum
    assert_eq!(lasso().area(), 0.0);
}

fn assert_vectorized_agrees<R: Region>(region: &R, points: &[(f64, f64)]) {
    let scalar: Vec<bool> = points.iter().map(|&p| region.contains_point(p)).collect();
    assert_eq!(region.contains_points(points.iter().copied()), scalar);
}

#[test]
fn test_vectorized_agrees_with_scalar() {
    let samples: Vec<(f64, f64)> = (0..25)
        .flat_map(|i| (0..25).map(move |j| (i as f64 * 0.1 - 0.2, j as f64 * 0.1 - 0.2)))
        .collect();

    assert_vectorized_agrees(&lasso(), &samples);
    assert_vectorized_agrees(&unit_square(), &samples);
    assert_vectorized_agrees(&RectSelection::new(0.3, 1.1, 0.0, 0.7), &samples);
    assert_vectorized_agrees(&XSpanSelection::new(0.5, 1.5), &samples);
    assert_vectorized_agrees(&YSpanSelection::new(0.5, 1.5), &samples);
    assert_vectorized_agrees(&LineSelection::new((0.0, 0.0), (2.0, 2.0)), &samples);
}
