//! Snapshot tests using the insta crate.
//!
//! Selection values and overlay geometry are serialized to JSON so hosts can
//! persist or forward them. These snapshots pin that format.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use whitecanvas::{
    LineSelection, OverlayShape, OverlayStyle, Point, PolygonSelection, RectSelection,
    XSpanSelection,
};

// ============================================================================
// Selection values
// ============================================================================

#[test]
fn snapshot_rect_selection() {
    let rect = RectSelection::from_corners((1.0, 0.0), (0.0, 2.0));
    insta::assert_json_snapshot!(rect, @r###"
    {
      "left": 0.0,
      "right": 1.0,
      "bottom": 0.0,
      "top": 2.0
    }
    "###);
}

#[test]
fn snapshot_xspan_selection() {
    insta::assert_json_snapshot!(XSpanSelection::new(1.5, -0.5), @r###"
    {
      "start": -0.5,
      "end": 1.5
    }
    "###);
}

#[test]
fn snapshot_line_selection() {
    let line = LineSelection::new((0.0, 0.0), (3.0, 4.0));
    insta::assert_json_snapshot!(line, @r###"
    {
      "start": {
        "x": 0.0,
        "y": 0.0
      },
      "end": {
        "x": 3.0,
        "y": 4.0
      }
    }
    "###);
}

#[test]
fn snapshot_polygon_selection() {
    let poly = PolygonSelection::new([(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
    insta::assert_json_snapshot!(poly, @r###"
    {
      "vertices": [
        {
          "x": 0.0,
          "y": 0.0
        },
        {
          "x": 0.0,
          "y": 1.0
        },
        {
          "x": 1.0,
          "y": 0.0
        }
      ]
    }
    "###);
}

// ============================================================================
// Overlay
// ============================================================================

#[test]
fn snapshot_overlay_rect_keeps_raw_corners() {
    let shape = OverlayShape::Rect {
        corner: Point::new(2.0, 2.0),
        opposite: Point::new(0.0, 1.0),
    };
    insta::assert_json_snapshot!(shape, @r###"
    {
      "kind": "rect",
      "corner": {
        "x": 2.0,
        "y": 2.0
      },
      "opposite": {
        "x": 0.0,
        "y": 1.0
      }
    }
    "###);
}

#[test]
fn snapshot_overlay_empty() {
    insta::assert_json_snapshot!(OverlayShape::Empty, @r###"
    {
      "kind": "empty"
    }
    "###);
}

#[test]
fn snapshot_default_overlay_style() {
    insta::assert_json_snapshot!(OverlayStyle::default(), @r###"
    {
      "color": "#808080",
      "width": 1.0,
      "line_style": "solid",
      "alpha": 1.0
    }
    "###);
}
