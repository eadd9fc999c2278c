//! State container for a color wheel: the current color, the tracked
//! channel's range, the drag flag and change notifications.

use std::fmt;

use crate::channel::ColorChannel;
use crate::color::WheelColor;
use crate::error::ColorError;
use crate::math;

/// Callback invoked with the full color after a change.
pub type ChangeHandler = Box<dyn Fn(&WheelColor)>;

/// Single source of truth for the wheel's value.
///
/// Uncontrolled states own their value. Controlled states only report
/// changes through `on_change`; the owner pushes the accepted value back with
/// [`sync_value`](Self::sync_value).
pub struct ColorWheelState {
    value: WheelColor,
    controlled: bool,
    channel: ColorChannel,
    min_value: f64,
    max_value: f64,
    dragging: bool,
    on_change: Option<ChangeHandler>,
    on_change_end: Option<ChangeHandler>,
}

impl fmt::Debug for ColorWheelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorWheelState")
            .field("value", &self.value)
            .field("controlled", &self.controlled)
            .field("channel", &self.channel)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}

impl ColorWheelState {
    /// Uncontrolled state over `channel`, using the channel's natural range.
    pub fn new(channel: ColorChannel, value: WheelColor) -> Self {
        let range = channel.range();
        Self {
            value,
            controlled: false,
            channel,
            min_value: range.min,
            max_value: range.max,
            dragging: false,
            on_change: None,
            on_change_end: None,
        }
    }

    /// Narrow the range. Callers are expected to pass `min < max`.
    pub fn with_range(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn controlled(mut self, controlled: bool) -> Self {
        self.controlled = controlled;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&WheelColor) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub(crate) fn set_on_change(&mut self, handler: Option<ChangeHandler>) {
        self.on_change = handler;
    }

    /// Called once when a drag ends, with the value at that moment.
    pub fn on_change_end(mut self, handler: impl Fn(&WheelColor) + 'static) -> Self {
        self.on_change_end = Some(Box::new(handler));
        self
    }

    pub(crate) fn set_on_change_end(&mut self, handler: Option<ChangeHandler>) {
        self.on_change_end = handler;
    }

    pub fn value(&self) -> WheelColor {
        self.value
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Commit a new color. Notifies `on_change` only when it differs from the
    /// current value.
    pub fn set_value(&mut self, value: WheelColor) {
        if value == self.value {
            return;
        }
        if !self.controlled {
            self.value = value;
        }
        if let Some(cb) = &self.on_change {
            cb(&value);
        }
    }

    /// Parse `text` (hex or functional notation) and commit it.
    pub fn set_value_str(&mut self, text: &str) -> Result<(), ColorError> {
        let value = text.parse()?;
        self.set_value(value);
        Ok(())
    }

    /// Replace the value without notifying, e.g. when a controlled owner
    /// accepts a change or an external source updates the color.
    pub fn sync_value(&mut self, value: WheelColor) {
        self.value = value;
    }

    pub fn channel(&self) -> ColorChannel {
        self.channel
    }

    pub fn channel_value(&self) -> f64 {
        self.value.channel_value(self.channel)
    }

    /// Replace only the tracked channel. Values outside `[min, max]` are rejected.
    pub fn set_channel_value(&mut self, value: f64) -> Result<(), ColorError> {
        if !value.is_finite() || value < self.min_value || value > self.max_value {
            return Err(ColorError::OutOfRange {
                channel: self.channel,
                value,
                min: self.min_value,
                max: self.max_value,
            });
        }
        let next = self.value.with_channel_value(self.channel, value)?;
        self.set_value(next);
        Ok(())
    }

    pub fn channel_value_percent(&self) -> f64 {
        math::to_percent(self.channel_value(), self.min_value, self.max_value)
    }

    pub fn set_channel_value_percent(&mut self, percent: f64) -> Result<(), ColorError> {
        self.set_channel_value(math::from_percent(percent, self.min_value, self.max_value))
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        let ended = self.dragging && !dragging;
        self.dragging = dragging;
        if ended {
            if let Some(cb) = &self.on_change_end {
                cb(&self.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn hue_state() -> (ColorWheelState, Rc<RefCell<Vec<WheelColor>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let state = ColorWheelState::new(ColorChannel::Hue, WheelColor::default())
            .on_change(move |c| sink.borrow_mut().push(*c));
        (state, seen)
    }

    #[test]
    fn channel_write_notifies_with_full_color() {
        let (mut state, seen) = hue_state();
        state.set_channel_value(120.0).unwrap();
        assert_eq!(state.channel_value(), 120.0);
        assert_eq!(
            *seen.borrow(),
            vec![WheelColor::hsl(120.0, 100.0, 50.0, 1.0).unwrap()]
        );
    }

    #[test]
    fn unchanged_value_is_not_reported() {
        let (mut state, seen) = hue_state();
        state.set_channel_value(0.0).unwrap();
        state.set_value(WheelColor::default());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn out_of_range_channel_values_are_rejected() {
        let (mut state, seen) = hue_state();
        let mut narrow = ColorWheelState::new(ColorChannel::Hue, WheelColor::default())
            .with_range(0.0, 180.0);
        assert!(state.set_channel_value(400.0).is_err());
        assert!(state.set_channel_value(f64::NAN).is_err());
        assert!(narrow.set_channel_value(200.0).is_err());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn percent_round_trip() {
        let (mut state, _) = hue_state();
        state.set_channel_value(90.0).unwrap();
        assert_eq!(state.channel_value_percent(), 0.25);
        state.set_channel_value_percent(0.5).unwrap();
        assert_eq!(state.channel_value(), 180.0);
    }

    #[test]
    fn string_values() {
        let (mut state, seen) = hue_state();
        state.set_value_str("#00FF00").unwrap();
        assert_eq!(state.value().to_rgb8(), (0, 255, 0));
        assert!((state.channel_value() - 120.0).abs() < 1e-9);
        assert!(state.set_value_str("not a color").is_err());
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn controlled_state_reports_without_storing() {
        let (state, seen) = hue_state();
        let mut state = state.controlled(true);
        state.set_channel_value(45.0).unwrap();
        assert_eq!(state.channel_value(), 0.0);
        assert_eq!(seen.borrow().len(), 1);

        state.sync_value(seen.borrow()[0]);
        assert_eq!(state.channel_value(), 45.0);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn change_end_fires_once_when_drag_stops() {
        let ends = Rc::new(RefCell::new(0));
        let counter = ends.clone();
        let mut state = ColorWheelState::new(ColorChannel::Hue, WheelColor::default())
            .on_change_end(move |_| *counter.borrow_mut() += 1);
        state.set_dragging(false);
        state.set_dragging(true);
        state.set_dragging(true);
        state.set_dragging(false);
        state.set_dragging(false);
        assert_eq!(*ends.borrow(), 1);
    }
}
