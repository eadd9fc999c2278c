//! Construction-time options for a color wheel.

use crate::channel::ColorChannel;
use crate::color::WheelColor;
use crate::constants;
use crate::controller::{DragSurface, WheelController};
use crate::math;
use crate::state::{ChangeHandler, ColorWheelState};

/// Initial value: a full color, or just the tracked channel of the default color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelValue {
    Color(WheelColor),
    Channel(f64),
}

impl From<WheelColor> for WheelValue {
    fn from(color: WheelColor) -> Self {
        WheelValue::Color(color)
    }
}

impl From<f64> for WheelValue {
    fn from(value: f64) -> Self {
        WheelValue::Channel(value)
    }
}

/// Builder for a [`ColorWheelState`] and its [`WheelController`].
pub struct ColorWheelConfig {
    channel: ColorChannel,
    value: Option<WheelValue>,
    default_value: Option<WheelValue>,
    min_value: Option<f64>,
    max_value: Option<f64>,
    step: Option<f64>,
    page_step: Option<f64>,
    is_disabled: bool,
    thickness: f64,
    drag_surface: DragSurface,
    on_change: Option<ChangeHandler>,
    on_change_end: Option<ChangeHandler>,
}

impl Default for ColorWheelConfig {
    fn default() -> Self {
        Self {
            channel: ColorChannel::Hue,
            value: None,
            default_value: None,
            min_value: None,
            max_value: None,
            step: None,
            page_step: None,
            is_disabled: false,
            thickness: constants::TRACK_THICKNESS,
            drag_surface: DragSurface::Container,
            on_change: None,
            on_change_end: None,
        }
    }
}

impl ColorWheelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Channel driven by the wheel, default: hue.
    pub fn channel(mut self, channel: ColorChannel) -> Self {
        self.channel = channel;
        self
    }

    /// Controlled value. The state reports changes but keeps this value until
    /// the owner calls [`ColorWheelState::sync_value`].
    pub fn value(mut self, value: impl Into<WheelValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Initial value of an uncontrolled wheel, default: `hsl(0, 100%, 50%)`.
    pub fn default_value(mut self, value: impl Into<WheelValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Lower bound, default: the channel's natural minimum.
    pub fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Upper bound, default: the channel's natural maximum.
    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Step, default: the channel's natural step (1, or 0.01 for alpha).
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Step for PageUp/PageDown, default: a 24th of the range, at least one step.
    pub fn page_step(mut self, page_step: f64) -> Self {
        self.page_step = Some(page_step);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    /// Width of the track ring, default: [`constants::TRACK_THICKNESS`].
    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn drag_surface(mut self, surface: DragSurface) -> Self {
        self.drag_surface = surface;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&WheelColor) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn on_change_end(mut self, handler: impl Fn(&WheelColor) + 'static) -> Self {
        self.on_change_end = Some(Box::new(handler));
        self
    }

    /// Run `handler` after any handler already registered with `on_change`.
    #[cfg(feature = "view")]
    pub(crate) fn chain_on_change(mut self, handler: impl Fn(&WheelColor) + 'static) -> Self {
        let first = self.on_change.take();
        self.on_change = Some(Box::new(move |color| {
            if let Some(cb) = &first {
                cb(color);
            }
            handler(color);
        }));
        self
    }

    fn resolve(&self, value: WheelValue) -> WheelColor {
        match value {
            WheelValue::Color(color) => color,
            WheelValue::Channel(v) => WheelColor::default()
                .with_channel_value(self.channel, v)
                .unwrap_or_else(|err| {
                    log::warn!("ignoring initial {} value: {err}", self.channel);
                    WheelColor::default()
                }),
        }
    }

    /// Validate the options and build the state and its controller.
    pub fn into_parts(mut self) -> (ColorWheelState, WheelController) {
        let natural = self.channel.range();

        let (mut min, mut max) = (
            self.min_value.unwrap_or(natural.min),
            self.max_value.unwrap_or(natural.max),
        );
        if !(min.is_finite() && max.is_finite() && min < max) {
            log::warn!(
                "invalid {} range {min}..{max}, using {}..{}",
                self.channel,
                natural.min,
                natural.max
            );
            (min, max) = (natural.min, natural.max);
        }
        let (clamped_min, clamped_max) = (min.max(natural.min), max.min(natural.max));
        if (clamped_min, clamped_max) != (min, max) {
            log::warn!(
                "{} range {min}..{max} exceeds {}..{}, clamping",
                self.channel,
                natural.min,
                natural.max
            );
            (min, max) = if clamped_min < clamped_max {
                (clamped_min, clamped_max)
            } else {
                (natural.min, natural.max)
            };
        }

        let step = match self.step {
            Some(step) if step.is_finite() && step > 0.0 => step,
            Some(step) => {
                log::warn!("invalid step {step}, using {}", natural.step);
                natural.step
            }
            None => natural.step,
        };

        let default_page = math::snap_to_step((max - min) / constants::PAGE_STEP_DIVISIONS, 0.0, step);
        let page_step = match self.page_step {
            Some(page) if page.is_finite() && page > 0.0 => page,
            _ => default_page.max(step),
        };

        let thickness = if self.thickness.is_finite() && self.thickness >= 0.0 {
            self.thickness
        } else {
            log::warn!("invalid track thickness {}, using default", self.thickness);
            constants::TRACK_THICKNESS
        };

        let controlled = self.value.is_some();
        let initial = self
            .value
            .or(self.default_value)
            .map(|v| self.resolve(v))
            .unwrap_or_default();

        let mut state = ColorWheelState::new(self.channel, initial)
            .with_range(min, max)
            .controlled(controlled);
        state.set_on_change(self.on_change.take());
        state.set_on_change_end(self.on_change_end.take());

        let controller = WheelController::new(step, page_step, self.is_disabled)
            .with_thickness(thickness)
            .with_drag_surface(self.drag_surface);

        log::debug!(
            "color wheel over {} in {min}..{max}, step {step}, page step {page_step}",
            self.channel
        );
        (state, controller)
    }
}
