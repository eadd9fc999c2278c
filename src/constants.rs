//! Sizing, stepping, and styling constants for the wheel.

/// Width of the track ring
pub const TRACK_THICKNESS: f64 = 24.0;

/// Default wheel side length
#[cfg(feature = "view")]
pub const WHEEL_SIZE: f32 = 192.0;

/// Smallest wheel side length
#[cfg(feature = "view")]
pub const MIN_WHEEL_SIZE: f32 = 100.0;

/// PageUp/PageDown move by this fraction of the range
pub const PAGE_STEP_DIVISIONS: f64 = 24.0;

/// Thumb radius relative to half the track thickness
#[cfg(feature = "view")]
pub const THUMB_SCALE: f64 = 0.75;

/// Thumb grows by this factor while dragging
#[cfg(feature = "view")]
pub const DRAGGING_THUMB_SCALE: f64 = 1.3;

/// Feather width in raster pixels for anti-aliasing the ring edges
#[cfg(feature = "view")]
pub const FEATHER: f64 = 1.5;
