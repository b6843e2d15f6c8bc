//! Crate-wide constants.
//!
//! Centralizes default values for dispatch, overlays and settings so that
//! `settings::InteractionSettings::default()` and the tools agree.

// ============================================================================
// Dispatch
// ============================================================================

/// Default throttle window for gesture slots (0 = every event is delivered)
pub const DEFAULT_THROTTLE_MS: u64 = 0;

/// Dispatch time above which a warning is logged
pub const SLOW_DISPATCH_MS: f64 = 8.0;

/// Number of samples kept for dispatch statistics
pub const DISPATCH_SAMPLE_COUNT: usize = 100;

// ============================================================================
// Overlay Defaults
// ============================================================================

/// Default overlay edge width
pub const DEFAULT_OVERLAY_WIDTH: f32 = 1.0;

/// Default overlay alpha
pub const DEFAULT_OVERLAY_ALPHA: f32 = 1.0;

// ============================================================================
// Geometry
// ============================================================================

/// Distance under which a point counts as lying on a line selection
pub const LINE_HIT_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Settings
// ============================================================================

/// Directory under the user config dir holding whitecanvas settings
pub const SETTINGS_DIR_NAME: &str = "whitecanvas";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "interaction.json";
