//! Unit tests for PointIndex.

use whitecanvas::{
    Bounds, LineSelection, Point, PointIndex, PolygonSelection, RectSelection, Region,
    XSpanSelection, YSpanSelection,
};

fn grid(n: usize) -> PointIndex {
    PointIndex::from_points((0..n * n).map(|i| ((i % n) as f64, (i / n) as f64)))
}

#[test]
fn test_select_matches_linear_scan() {
    let index = grid(10);
    let poly = PolygonSelection::new([(0.5, 0.5), (0.5, 6.5), (6.5, 6.5), (3.0, 2.0), (6.5, 0.5)]);

    let expected: Vec<usize> = (0..100)
        .filter(|&i| poly.contains_point(((i % 10) as f64, (i / 10) as f64)))
        .collect();
    assert!(!expected.is_empty());
    assert_eq!(index.select(&poly), expected);
}

#[test]
fn test_select_spans_ignore_free_axis() {
    let index = grid(5);
    assert_eq!(index.select(&XSpanSelection::new(3.5, 10.0)), vec![4, 9, 14, 19, 24]);
    assert_eq!(index.select(&YSpanSelection::new(-1.0, 0.0)), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_select_line() {
    let index = grid(4);
    let diagonal = LineSelection::new((0.0, 0.0), (3.0, 3.0));
    assert_eq!(index.select(&diagonal), vec![0, 5, 10, 15]);
}

#[test]
fn test_select_with_trait_object() {
    let index = grid(3);
    let region: Box<dyn Region> = Box::new(RectSelection::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(index.select(region.as_ref()), vec![0, 1, 3, 4]);
}

#[test]
fn test_degenerate_polygon_selects_nothing() {
    let index = grid(3);
    assert!(index.select(&PolygonSelection::new([(0.0, 0.0), (2.0, 2.0)])).is_empty());
}

#[test]
fn test_query_rect_and_clear() {
    let mut index = grid(3);
    let found = index.query_rect(Bounds::from_corners(Point::new(1.0, 1.0), Point::new(5.0, 5.0)));
    assert_eq!(found, vec![4, 5, 7, 8]);

    index.clear();
    assert!(index.is_empty());
    assert!(index.query_rect(Bounds::from_corners(Point::new(0.0, 0.0), Point::new(5.0, 5.0))).is_empty());
}
