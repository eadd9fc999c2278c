//! Errors raised while parsing or editing colors.

use crate::channel::ColorChannel;

/// Failure to build, parse, or edit a [`WheelColor`](crate::WheelColor).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("cannot parse color from {0:?}")]
    Parse(String),

    #[error("{channel} value {value} is outside {min}..={max}")]
    OutOfRange {
        channel: ColorChannel,
        value: f64,
        min: f64,
        max: f64,
    },
}
