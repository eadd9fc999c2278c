//! # floem-wheel
//!
//! A circular channel slider ("color wheel") for [Floem](https://github.com/lapce/floem).
//!
//! The interaction core is host independent: [`ColorWheelState`] holds the
//! color and drag flag, [`WheelController`] turns pointer and keyboard input
//! into stepped, wrapped channel values. With the default `view` feature,
//! [`color_wheel`] wires both into a Floem view bound to a signal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_wheel::{color_wheel, ColorWheelConfig, WheelColor};
//!
//! let color = RwSignal::new(WheelColor::default());
//! let config = ColorWheelConfig::new().step(5.0);
//! // Use `color_wheel(color, config)` in your Floem view tree.
//! ```
//!
//! Without a rendering surface, drive the controller directly:
//!
//! ```rust
//! use floem_wheel::{ColorWheelConfig, WheelHost, WheelKey, WheelRect};
//!
//! struct Host;
//! impl WheelHost for Host {
//!     fn bounding_rect(&self) -> WheelRect {
//!         WheelRect::new(0.0, 0.0, 200.0, 200.0)
//!     }
//!     fn focus_input(&mut self) {}
//!     fn is_input_focused(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let (mut state, controller) = ColorWheelConfig::new().into_parts();
//! controller.key_down(&mut state, &Host, WheelKey::ArrowLeft).unwrap();
//! assert_eq!(state.channel_value(), 359.0);
//! ```

mod channel;
mod color;
#[cfg(feature = "view")]
mod color_wheel;
mod config;
mod constants;
mod controller;
mod error;
mod geometry;
mod math;
mod state;

pub use channel::{ChannelRange, ColorChannel};
pub use color::{ColorSpace, WheelColor};
#[cfg(feature = "view")]
pub use color_wheel::{color_wheel, ColorWheel};
pub use config::{ColorWheelConfig, WheelValue};
pub use constants::{PAGE_STEP_DIVISIONS, TRACK_THICKNESS};
pub use controller::{
    DragSurface, EventOutcome, SliderInputProps, ThumbProps, WheelController, WheelEvent,
    WheelHost, WheelKey, WheelRenderProps,
};
pub use error::ColorError;
pub use geometry::{
    angle_from_point, angle_from_value, hit_test, thumb_offset, value_from_angle, HitRegion,
    WheelPoint, WheelRect,
};
pub use state::{ChangeHandler, ColorWheelState};
