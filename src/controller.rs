//! Pointer and keyboard interaction for the wheel.
//!
//! [`WheelController`] turns host events into channel values and commits them
//! to a [`ColorWheelState`]. It keeps only configuration: whether a drag is in
//! progress lives in the state, and focus lives in the host.
//!
//! ```text
//!            press (not disabled)
//!   Idle ─────────────────────────▶ Dragging ──┐ move: commit distinct
//!    ▲                                  │  ◀───┘       snapped values
//!    └──────────── release / cancel ────┘
//! ```

use crate::channel::ColorChannel;
use crate::color::WheelColor;
use crate::constants;
use crate::error::ColorError;
use crate::geometry::{self, HitRegion, WheelPoint, WheelRect};
use crate::math;
use crate::state::ColorWheelState;

/// Values closer than this are the same step.
const VALUE_EPSILON: f64 = 1e-9;

/// Capabilities the controller needs from whatever renders the wheel.
pub trait WheelHost {
    /// Bounding rectangle of the drag surface, in the coordinate space of
    /// the pointer events delivered to the controller.
    fn bounding_rect(&self) -> WheelRect;

    /// Move focus to the slider input.
    fn focus_input(&mut self);

    fn is_input_focused(&self) -> bool;
}

/// Keys the wheel reacts to. Hosts map everything else to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Other,
}

/// Input delivered by the host. Touch input arrives as pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent {
    PointerDown(WheelPoint),
    PointerMove(WheelPoint),
    PointerUp(WheelPoint),
    PointerCancel,
    KeyDown(WheelKey),
}

/// Whether the controller consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
}

/// Which presses may start a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSurface {
    /// Any press the host delivers, anywhere on the bounding square.
    #[default]
    Container,
    /// Only presses on the thumb or the track ring.
    Ring,
}

/// Props for the focusable range input behind the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderInputProps {
    pub role: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    pub value_text: String,
    pub disabled: bool,
    /// `None` removes the input from the tab sequence.
    pub tab_index: Option<i32>,
}

/// Derived thumb placement, recomputed for every paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbProps {
    /// Offset of the thumb center from the wheel center.
    pub offset: WheelPoint,
    pub dragging: bool,
    pub color: WheelColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelRenderProps {
    pub input: SliderInputProps,
    pub thumb: ThumbProps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelController {
    step: f64,
    page_step: f64,
    is_disabled: bool,
    thickness: f64,
    drag_surface: DragSurface,
}

impl WheelController {
    pub fn new(step: f64, page_step: f64, is_disabled: bool) -> Self {
        Self {
            step,
            page_step,
            is_disabled,
            thickness: constants::TRACK_THICKNESS,
            drag_surface: DragSurface::default(),
        }
    }

    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_drag_surface(mut self, surface: DragSurface) -> Self {
        self.drag_surface = surface;
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn page_step(&self) -> f64 {
        self.page_step
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn handle_event(
        &self,
        state: &mut ColorWheelState,
        host: &mut impl WheelHost,
        event: WheelEvent,
    ) -> Result<EventOutcome, ColorError> {
        match event {
            WheelEvent::PointerDown(point) => self.press(state, host, point),
            WheelEvent::PointerMove(point) => self.drag_to(state, &*host, point),
            WheelEvent::PointerUp(_) | WheelEvent::PointerCancel => Ok(self.release(state)),
            WheelEvent::KeyDown(key) => self.key_down(state, &*host, key),
        }
    }

    /// Start a drag. Commits the pressed value only if it differs from the
    /// current one, so grabbing the thumb in place emits nothing.
    pub fn press(
        &self,
        state: &mut ColorWheelState,
        host: &mut impl WheelHost,
        point: WheelPoint,
    ) -> Result<EventOutcome, ColorError> {
        if self.is_disabled {
            log::trace!("color wheel disabled, ignoring press at {point:?}");
            return Ok(EventOutcome::Ignored);
        }
        let rect = host.bounding_rect();
        let region = geometry::hit_test(rect, self.thickness, self.thumb_center(state, rect), point);
        let accepted = match self.drag_surface {
            DragSurface::Container => true,
            DragSurface::Ring => matches!(region, HitRegion::Thumb | HitRegion::Track),
        };
        if !accepted {
            log::trace!("press on {region:?} outside the ring, ignoring");
            return Ok(EventOutcome::Ignored);
        }

        let value = self.value_at_point(state, rect, point);
        self.commit(state, value)?;
        log::debug!("color wheel drag start on {region:?}");
        state.set_dragging(true);
        host.focus_input();
        Ok(EventOutcome::Handled)
    }

    /// Follow the pointer while dragging, committing each distinct step once.
    pub fn drag_to(
        &self,
        state: &mut ColorWheelState,
        host: &impl WheelHost,
        point: WheelPoint,
    ) -> Result<EventOutcome, ColorError> {
        if self.is_disabled || !state.is_dragging() {
            return Ok(EventOutcome::Ignored);
        }
        let value = self.value_at_point(state, host.bounding_rect(), point);
        self.commit(state, value)?;
        Ok(EventOutcome::Handled)
    }

    /// End a drag. The last move already committed the final value.
    pub fn release(&self, state: &mut ColorWheelState) -> EventOutcome {
        if self.is_disabled || !state.is_dragging() {
            return EventOutcome::Ignored;
        }
        log::debug!("color wheel drag end at {}", state.channel_value());
        state.set_dragging(false);
        EventOutcome::Handled
    }

    pub fn key_down(
        &self,
        state: &mut ColorWheelState,
        host: &impl WheelHost,
        key: WheelKey,
    ) -> Result<EventOutcome, ColorError> {
        if self.is_disabled || !host.is_input_focused() {
            return Ok(EventOutcome::Ignored);
        }
        let delta = match key {
            WheelKey::ArrowRight | WheelKey::ArrowUp => self.step,
            WheelKey::ArrowLeft | WheelKey::ArrowDown => -self.step,
            WheelKey::PageUp => self.page_step,
            WheelKey::PageDown => -self.page_step,
            WheelKey::Other => return Ok(EventOutcome::Ignored),
        };
        let next = math::snap_and_wrap(
            state.channel_value() + delta,
            state.min_value(),
            state.max_value(),
            self.step,
        );
        self.commit(state, next)?;
        Ok(EventOutcome::Handled)
    }

    /// Step-snapped, wrapped value under `point`.
    ///
    /// An empty rectangle has no usable center and maps to the reference
    /// direction, i.e. `min_value`.
    pub fn value_at_point(&self, state: &ColorWheelState, rect: WheelRect, point: WheelPoint) -> f64 {
        let (min, max) = (state.min_value(), state.max_value());
        let angle = if rect.is_empty() {
            0.0
        } else {
            geometry::angle_from_point(rect.center(), point)
        };
        math::snap_and_wrap(geometry::value_from_angle(angle, min, max), min, max, self.step)
    }

    /// Thumb center in the rectangle's coordinate space.
    pub fn thumb_center(&self, state: &ColorWheelState, rect: WheelRect) -> WheelPoint {
        let center = rect.center();
        let offset = self.thumb_offset(state, rect);
        WheelPoint::new(center.x + offset.x, center.y + offset.y)
    }

    fn thumb_offset(&self, state: &ColorWheelState, rect: WheelRect) -> WheelPoint {
        geometry::thumb_offset(
            state.channel_value(),
            rect.thumb_radius(self.thickness),
            state.min_value(),
            state.max_value(),
        )
    }

    /// Props for the current paint.
    pub fn render_props(&self, state: &ColorWheelState, rect: WheelRect) -> WheelRenderProps {
        let channel: ColorChannel = state.channel();
        let value = state.channel_value();
        WheelRenderProps {
            input: SliderInputProps {
                role: "slider",
                label: channel.name(),
                min: state.min_value(),
                max: state.max_value(),
                step: self.step,
                value,
                value_text: channel.format_value(value),
                disabled: self.is_disabled,
                tab_index: if self.is_disabled { None } else { Some(0) },
            },
            thumb: ThumbProps {
                offset: self.thumb_offset(state, rect),
                dragging: state.is_dragging(),
                color: state.value(),
            },
        }
    }

    fn commit(&self, state: &mut ColorWheelState, value: f64) -> Result<bool, ColorError> {
        if (value - state.channel_value()).abs() <= VALUE_EPSILON {
            return Ok(false);
        }
        state.set_channel_value(value)?;
        Ok(true)
    }
}
