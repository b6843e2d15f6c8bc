//! Overlay layers drawn on a canvas to show a selection.
//!
//! A selection tool owns exactly one `OverlayLayer` and shares it with the
//! canvas through a `LayerHandle` while the overlay is attached.

use crate::constants::{DEFAULT_OVERLAY_ALPHA, DEFAULT_OVERLAY_WIDTH};
use crate::error::CanvasError;
use crate::geometry::{Bounds, Point};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

// ============================================================================
// Color
// ============================================================================

/// RGBA color with components in `0.0..=1.0`.
///
/// Serialized as a hex string (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);
    pub const GRAY: Color = Color::rgb8(128, 128, 128);
    pub const RED: Color = Color::rgb8(255, 0, 0);
    pub const GREEN: Color = Color::rgb8(0, 128, 0);
    pub const BLUE: Color = Color::rgb8(0, 0, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse `#rrggbb`, `#rrggbbaa` or a basic color name.
    pub fn parse(s: &str) -> Result<Self, CanvasError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| CanvasError::InvalidColor(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "gray" | "grey" => Ok(Self::GRAY),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            "transparent" => Ok(Self::TRANSPARENT),
            _ => Err(CanvasError::InvalidColor(s.to_string())),
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CanvasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Line Style
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl FromStr for LineStyle {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-" | "solid" => Ok(LineStyle::Solid),
            "--" | "dashed" | "dash" => Ok(LineStyle::Dashed),
            ":" | "dotted" | "dot" => Ok(LineStyle::Dotted),
            "-." | "dash_dot" | "dashdot" => Ok(LineStyle::DashDot),
            other => Err(CanvasError::InvalidLineStyle(other.to_string())),
        }
    }
}

// ============================================================================
// Overlay Style and Shape
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub color: Color,
    pub width: f32,
    pub line_style: LineStyle,
    pub alpha: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            width: DEFAULT_OVERLAY_WIDTH,
            line_style: LineStyle::Solid,
            alpha: DEFAULT_OVERLAY_ALPHA,
        }
    }
}

/// Geometry pushed to an overlay layer while dragging.
///
/// `Rect` keeps the raw drag corners; sorting into left/right/bottom/top
/// happens only when a selection value is read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayShape {
    #[default]
    Empty,
    Line { start: Point, end: Point },
    Rect { corner: Point, opposite: Point },
    XSpan { start: f64, end: f64 },
    YSpan { start: f64, end: f64 },
    Polygon { vertices: Vec<Point> },
}

impl OverlayShape {
    /// Envelope of the drawn geometry. Spans are unbounded on their free axis.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            OverlayShape::Empty => None,
            OverlayShape::Line { start, end } => Some(Bounds::from_corners(*start, *end)),
            OverlayShape::Rect { corner, opposite } => Some(Bounds::from_corners(*corner, *opposite)),
            OverlayShape::XSpan { start, end } => Some(Bounds::from_corners(
                Point::new(*start, f64::MIN),
                Point::new(*end, f64::MAX),
            )),
            OverlayShape::YSpan { start, end } => Some(Bounds::from_corners(
                Point::new(f64::MIN, *start),
                Point::new(f64::MAX, *end),
            )),
            OverlayShape::Polygon { vertices } => Bounds::enclosing(vertices.iter().copied()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OverlayShape::Empty)
    }
}

// ============================================================================
// Overlay Layer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LayerId(u64);

impl LayerId {
    fn next() -> Self {
        Self(NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared handle to an overlay layer.
pub type LayerHandle = Arc<RwLock<OverlayLayer>>;

#[derive(Debug, Clone)]
pub struct OverlayLayer {
    id: LayerId,
    name: String,
    pub shape: OverlayShape,
    pub style: OverlayStyle,
    pub visible: bool,
}

impl OverlayLayer {
    pub fn new(name: impl Into<String>, style: OverlayStyle) -> Self {
        Self {
            id: LayerId::next(),
            name: name.into(),
            shape: OverlayShape::Empty,
            style,
            visible: true,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_handle(self) -> LayerHandle {
        Arc::new(RwLock::new(self))
    }
}
