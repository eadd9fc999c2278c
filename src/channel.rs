//! Color channels the wheel can drive, with their natural ranges.

use std::fmt;
use std::str::FromStr;

use crate::color::ColorSpace;
use crate::error::ColorError;

/// A single named scalar component of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Hue,
    Saturation,
    Brightness,
    Lightness,
    Red,
    Green,
    Blue,
    Alpha,
}

/// Natural bounds and quantum of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ColorChannel {
    pub const ALL: [ColorChannel; 8] = [
        ColorChannel::Hue,
        ColorChannel::Saturation,
        ColorChannel::Brightness,
        ColorChannel::Lightness,
        ColorChannel::Red,
        ColorChannel::Green,
        ColorChannel::Blue,
        ColorChannel::Alpha,
    ];

    /// Range in the channel's own units: degrees for hue, percent for
    /// saturation/brightness/lightness, 0–255 for RGB, 0–1 for alpha.
    pub fn range(self) -> ChannelRange {
        match self {
            ColorChannel::Hue => ChannelRange {
                min: 0.0,
                max: 360.0,
                step: 1.0,
            },
            ColorChannel::Saturation | ColorChannel::Brightness | ColorChannel::Lightness => {
                ChannelRange {
                    min: 0.0,
                    max: 100.0,
                    step: 1.0,
                }
            }
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => ChannelRange {
                min: 0.0,
                max: 255.0,
                step: 1.0,
            },
            ColorChannel::Alpha => ChannelRange {
                min: 0.0,
                max: 1.0,
                step: 0.01,
            },
        }
    }

    /// Human readable name, used as the accessible label of the slider input.
    pub fn name(self) -> &'static str {
        match self {
            ColorChannel::Hue => "Hue",
            ColorChannel::Saturation => "Saturation",
            ColorChannel::Brightness => "Brightness",
            ColorChannel::Lightness => "Lightness",
            ColorChannel::Red => "Red",
            ColorChannel::Green => "Green",
            ColorChannel::Blue => "Blue",
            ColorChannel::Alpha => "Alpha",
        }
    }

    /// Color space a color is converted to when it lacks this channel.
    /// Alpha exists in every space; RGB is returned for completeness.
    pub(crate) fn native_space(self) -> ColorSpace {
        match self {
            ColorChannel::Hue | ColorChannel::Saturation | ColorChannel::Brightness => {
                ColorSpace::Hsb
            }
            ColorChannel::Lightness => ColorSpace::Hsl,
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue | ColorChannel::Alpha => {
                ColorSpace::Rgb
            }
        }
    }

    /// Format a value for assistive text, e.g. `"90°"` or `"40%"`.
    pub fn format_value(self, value: f64) -> String {
        match self {
            ColorChannel::Hue => format!("{}°", round2(value)),
            ColorChannel::Saturation | ColorChannel::Brightness | ColorChannel::Lightness => {
                format!("{}%", round2(value))
            }
            ColorChannel::Red | ColorChannel::Green | ColorChannel::Blue => {
                format!("{}", value.round())
            }
            ColorChannel::Alpha => format!("{}%", round2(value * 100.0)),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorChannel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorChannel::ALL
            .into_iter()
            .find(|ch| ch.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorError::Parse(s.to_string()))
    }
}
