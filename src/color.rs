//! WheelColor type, the color value the wheel edits one channel of.
//!
//! A color is stored in the space it was created in. Channels are kept in
//! their natural units (hue in degrees, saturation/brightness/lightness in
//! percent, RGB in 0–255, alpha in 0–1). Reading or writing a channel the
//! space lacks converts to the channel's native space first.

use std::fmt;
use std::str::FromStr;

use crate::channel::{round2, ColorChannel};
use crate::error::ColorError;
use crate::math;

/// Alpha this close to 1 prints and formats as opaque.
const OPAQUE_EPSILON: f64 = 0.001;

/// Color spaces a [`WheelColor`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    Hsb,
    Hsl,
}

/// A color tagged with its color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelColor {
    Rgb {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
    Hsb {
        hue: f64,
        saturation: f64,
        brightness: f64,
        alpha: f64,
    },
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    },
}

impl Default for WheelColor {
    /// Fully saturated red in HSL, the wheel's starting color.
    fn default() -> Self {
        WheelColor::Hsl {
            hue: 0.0,
            saturation: 100.0,
            lightness: 50.0,
            alpha: 1.0,
        }
    }
}

fn check(channel: ColorChannel, value: f64) -> Result<f64, ColorError> {
    let range = channel.range();
    if value.is_finite() && (range.min..=range.max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange {
            channel,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

impl WheelColor {
    /// Opaque RGB color from 0–255 components.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(WheelColor::Rgb {
            red: check(ColorChannel::Red, red)?,
            green: check(ColorChannel::Green, green)?,
            blue: check(ColorChannel::Blue, blue)?,
            alpha: check(ColorChannel::Alpha, alpha)?,
        })
    }

    /// HSB color: hue in degrees, saturation and brightness in percent.
    pub fn hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(WheelColor::Hsb {
            hue: check(ColorChannel::Hue, hue)?,
            saturation: check(ColorChannel::Saturation, saturation)?,
            brightness: check(ColorChannel::Brightness, brightness)?,
            alpha: check(ColorChannel::Alpha, alpha)?,
        })
    }

    /// HSL color: hue in degrees, saturation and lightness in percent.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Result<Self, ColorError> {
        Ok(WheelColor::Hsl {
            hue: check(ColorChannel::Hue, hue)?,
            saturation: check(ColorChannel::Saturation, saturation)?,
            lightness: check(ColorChannel::Lightness, lightness)?,
            alpha: check(ColorChannel::Alpha, alpha)?,
        })
    }

    pub fn space(&self) -> ColorSpace {
        match self {
            WheelColor::Rgb { .. } => ColorSpace::Rgb,
            WheelColor::Hsb { .. } => ColorSpace::Hsb,
            WheelColor::Hsl { .. } => ColorSpace::Hsl,
        }
    }

    pub fn is_opaque(&self) -> bool {
        (self.alpha() - 1.0).abs() < OPAQUE_EPSILON
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            WheelColor::Rgb { alpha, .. }
            | WheelColor::Hsb { alpha, .. }
            | WheelColor::Hsl { alpha, .. } => alpha,
        }
    }

    /// Whether `channel` is stored directly, without conversion.
    pub fn has_channel(&self, channel: ColorChannel) -> bool {
        self.direct_channel(channel).is_some()
    }

    fn direct_channel(&self, channel: ColorChannel) -> Option<f64> {
        match (*self, channel) {
            (_, ColorChannel::Alpha) => Some(self.alpha()),
            (WheelColor::Rgb { red, .. }, ColorChannel::Red) => Some(red),
            (WheelColor::Rgb { green, .. }, ColorChannel::Green) => Some(green),
            (WheelColor::Rgb { blue, .. }, ColorChannel::Blue) => Some(blue),
            (
                WheelColor::Hsb { hue, .. } | WheelColor::Hsl { hue, .. },
                ColorChannel::Hue,
            ) => Some(hue),
            (
                WheelColor::Hsb { saturation, .. } | WheelColor::Hsl { saturation, .. },
                ColorChannel::Saturation,
            ) => Some(saturation),
            (WheelColor::Hsb { brightness, .. }, ColorChannel::Brightness) => Some(brightness),
            (WheelColor::Hsl { lightness, .. }, ColorChannel::Lightness) => Some(lightness),
            _ => None,
        }
    }

    /// Read a channel, converting to the channel's native space if needed.
    pub fn channel_value(&self, channel: ColorChannel) -> f64 {
        self.direct_channel(channel).unwrap_or_else(|| {
            self.to_space(channel.native_space())
                .direct_channel(channel)
                .unwrap_or_default()
        })
    }

    /// Copy of this color with only `channel` replaced.
    ///
    /// A color that lacks the channel is converted to the channel's native
    /// space first, so the result may be in a different space.
    pub fn with_channel_value(&self, channel: ColorChannel, value: f64) -> Result<Self, ColorError> {
        let value = check(channel, value)?;
        let mut color = if self.has_channel(channel) {
            *self
        } else {
            self.to_space(channel.native_space())
        };
        match (&mut color, channel) {
            (
                WheelColor::Rgb { alpha, .. }
                | WheelColor::Hsb { alpha, .. }
                | WheelColor::Hsl { alpha, .. },
                ColorChannel::Alpha,
            ) => *alpha = value,
            (WheelColor::Rgb { red, .. }, ColorChannel::Red) => *red = value,
            (WheelColor::Rgb { green, .. }, ColorChannel::Green) => *green = value,
            (WheelColor::Rgb { blue, .. }, ColorChannel::Blue) => *blue = value,
            (
                WheelColor::Hsb { hue, .. } | WheelColor::Hsl { hue, .. },
                ColorChannel::Hue,
            ) => *hue = value,
            (
                WheelColor::Hsb { saturation, .. } | WheelColor::Hsl { saturation, .. },
                ColorChannel::Saturation,
            ) => *saturation = value,
            (WheelColor::Hsb { brightness, .. }, ColorChannel::Brightness) => *brightness = value,
            (WheelColor::Hsl { lightness, .. }, ColorChannel::Lightness) => *lightness = value,
            _ => {}
        }
        Ok(color)
    }

    /// Convert to another space. Hue is carried over unchanged between HSB and HSL.
    pub fn to_space(&self, space: ColorSpace) -> Self {
        let alpha = self.alpha();
        match (*self, space) {
            (
                WheelColor::Rgb {
                    red, green, blue, ..
                },
                ColorSpace::Hsb | ColorSpace::Hsl,
            ) => {
                let (h, s, v) = math::rgb_to_hsb(red / 255.0, green / 255.0, blue / 255.0);
                WheelColor::Hsb {
                    hue: h * 360.0,
                    saturation: s * 100.0,
                    brightness: v * 100.0,
                    alpha,
                }
                .to_space(space)
            }
            (
                WheelColor::Hsb {
                    hue,
                    saturation,
                    brightness,
                    ..
                },
                ColorSpace::Rgb,
            ) => {
                let (r, g, b) = math::hsb_to_rgb(hue / 360.0, saturation / 100.0, brightness / 100.0);
                WheelColor::Rgb {
                    red: r * 255.0,
                    green: g * 255.0,
                    blue: b * 255.0,
                    alpha,
                }
            }
            (
                WheelColor::Hsb {
                    hue,
                    saturation,
                    brightness,
                    ..
                },
                ColorSpace::Hsl,
            ) => {
                let (_, s, l) = math::hsb_to_hsl(hue / 360.0, saturation / 100.0, brightness / 100.0);
                WheelColor::Hsl {
                    hue,
                    saturation: s * 100.0,
                    lightness: l * 100.0,
                    alpha,
                }
            }
            (
                WheelColor::Hsl {
                    hue,
                    saturation,
                    lightness,
                    ..
                },
                ColorSpace::Hsb | ColorSpace::Rgb,
            ) => {
                let (_, s, v) = math::hsl_to_hsb(hue / 360.0, saturation / 100.0, lightness / 100.0);
                WheelColor::Hsb {
                    hue,
                    saturation: s * 100.0,
                    brightness: v * 100.0,
                    alpha,
                }
                .to_space(space)
            }
            _ => *self,
        }
    }

    /// 0–255 RGB tuple.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        match self.to_space(ColorSpace::Rgb) {
            WheelColor::Rgb {
                red, green, blue, ..
            } => (
                red.round().clamp(0.0, 255.0) as u8,
                green.round().clamp(0.0, 255.0) as u8,
                blue.round().clamp(0.0, 255.0) as u8,
            ),
            _ => (0, 0, 0),
        }
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let stripped = hex.trim().trim_start_matches('#');
        let invalid = || ColorError::Parse(hex.to_string());
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map(f64::from).map_err(|_| invalid());
        match stripped.len() {
            3 => {
                let r = byte(&stripped[0..1])?;
                let g = byte(&stripped[1..2])?;
                let b = byte(&stripped[2..3])?;
                Self::rgb(r * 17.0, g * 17.0, b * 17.0)
            }
            6 | 8 => {
                let r = byte(&stripped[0..2])?;
                let g = byte(&stripped[2..4])?;
                let b = byte(&stripped[4..6])?;
                let a = if stripped.len() == 8 {
                    byte(&stripped[6..8])? / 255.0
                } else {
                    1.0
                };
                Self::rgba(r, g, b, a)
            }
            _ => Err(invalid()),
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when opaque, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            let a = (self.alpha() * 255.0).round() as u8;
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

/// Parse one functional-notation argument; `%` and `deg` suffixes are accepted.
fn number(part: &str) -> Option<(f64, bool)> {
    let part = part.trim();
    if let Some(pct) = part.strip_suffix('%') {
        return pct.trim().parse().ok().map(|v| (v, true));
    }
    let part = part.strip_suffix("deg").unwrap_or(part);
    part.trim().parse().ok().map(|v| (v, false))
}

impl FromStr for WheelColor {
    type Err = ColorError;

    /// Accepts hex and `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsb()`, `hsba()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ColorError::Parse(s.to_string());

        let Some((name, rest)) = text.split_once('(') else {
            return Self::from_hex(text);
        };
        let args = rest.strip_suffix(')').ok_or_else(invalid)?;
        let parts = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(number)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        let alpha = match parts.get(3) {
            None if parts.len() == 3 => 1.0,
            Some(&(a, true)) if parts.len() == 4 => a / 100.0,
            Some(&(a, false)) if parts.len() == 4 => a,
            _ => return Err(invalid()),
        };
        let (x, y, z) = (parts[0], parts[1], parts[2]);

        match name.trim().to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => {
                let byte = |(v, pct): (f64, bool)| if pct { v * 255.0 / 100.0 } else { v };
                Self::rgba(byte(x), byte(y), byte(z), alpha)
            }
            space @ ("hsb" | "hsba" | "hsl" | "hsla") => {
                // Hue is a plain number or degrees; the other two are percentages.
                if x.1 || !y.1 || !z.1 {
                    return Err(invalid());
                }
                if space.starts_with("hsb") {
                    Self::hsb(x.0, y.0, z.0, alpha)
                } else {
                    Self::hsl(x.0, y.0, z.0, alpha)
                }
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for WheelColor {
    /// Functional notation, e.g. `hsl(120, 100%, 50%)` or `rgba(255, 0, 0, 0.5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, a, b, c, pct) = match *self {
            WheelColor::Rgb {
                red, green, blue, ..
            } => ("rgb", red, green, blue, ""),
            WheelColor::Hsb {
                hue,
                saturation,
                brightness,
                ..
            } => ("hsb", hue, saturation, brightness, "%"),
            WheelColor::Hsl {
                hue,
                saturation,
                lightness,
                ..
            } => ("hsl", hue, saturation, lightness, "%"),
        };
        let (a, b, c) = (round2(a), round2(b), round2(c));
        if self.is_opaque() {
            write!(f, "{name}({a}, {b}{pct}, {c}{pct})")
        } else {
            let alpha = round2(self.alpha());
            write!(f, "{name}a({a}, {b}{pct}, {c}{pct}, {alpha})")
        }
    }
}
