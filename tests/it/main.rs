//! Single test binary entry point.
//!
//! All tests are linked into one binary to keep link time down.
//!
//! Structure:
//! - helpers: Canvas fixtures and notification recorders
//! - integration: Full drag workflows through `MouseMoveSignal`
//! - unit: Single-component unit tests

mod helpers;
