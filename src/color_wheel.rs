//! Floem view for the channel wheel.
//!
//! Paints the channel ring as a rasterized image and the thumb on top, and
//! forwards pointer, key and focus events to a [`WheelController`]. The ring
//! is re-rasterized only when its size, base color or disabled flag change.

use std::sync::Arc;

use floem::keyboard::{Key, NamedKey};
use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::channel::ColorChannel;
use crate::color::WheelColor;
use crate::config::ColorWheelConfig;
use crate::constants;
use crate::controller::{EventOutcome, WheelController, WheelEvent, WheelHost, WheelKey};
use crate::geometry::{self, WheelPoint, WheelRect};
use crate::state::ColorWheelState;

const DISABLED_RING: (u8, u8, u8) = (200, 200, 200);
const FOCUS_RING: Color = Color::rgb8(38, 128, 235);

/// Rasterize the track ring to an RGBA8 buffer of `side` × `side` pixels.
///
/// `inner` is the inner radius as a fraction of the outer radius. Both edges
/// fade over [`constants::FEATHER`] pixels; the fade only affects alpha.
fn rasterize_ring(side: u32, inner: f64, color_at: impl Fn(f64) -> (u8, u8, u8)) -> Vec<u8> {
    let c = side as f64 / 2.0;
    let outer_r = c;
    let inner_r = c * inner;

    let mut buf = vec![0u8; (side * side * 4) as usize];

    for py in 0..side {
        let dy = py as f64 + 0.5 - c;
        let row_offset = (py * side * 4) as usize;

        for px in 0..side {
            let dx = px as f64 + 0.5 - c;
            let dist = dx.hypot(dy);

            let alpha = ((outer_r - dist) / constants::FEATHER)
                .clamp(0.0, 1.0)
                .min(((dist - inner_r) / constants::FEATHER).clamp(0.0, 1.0));
            if alpha <= 0.0 {
                continue;
            }

            let angle = geometry::angle_from_point(
                WheelPoint::new(c, c),
                WheelPoint::new(px as f64 + 0.5, py as f64 + 0.5),
            );
            let (r, g, b) = color_at(angle);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }

    buf
}

enum WheelUpdate {
    Value(WheelColor),
}

/// Adapts the view to the controller's host capabilities for one event.
struct ViewHost {
    id: ViewId,
    rect: WheelRect,
    focused: bool,
}

impl WheelHost for ViewHost {
    fn bounding_rect(&self) -> WheelRect {
        self.rect
    }

    fn focus_input(&mut self) {
        if !self.focused {
            self.id.request_focus();
        }
        self.focused = true;
    }

    fn is_input_focused(&self) -> bool {
        self.focused
    }
}

pub struct ColorWheel {
    id: ViewId,
    state: ColorWheelState,
    controller: WheelController,
    focused: bool,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached ring image.
    ring_img: Option<peniko::Image>,
    ring_hash: Vec<u8>,
    ring_key: Option<(u32, String, bool)>,
}

/// Creates a color wheel bound to `color`.
///
/// The signal is the source of truth: it seeds the wheel's value (overriding
/// any `default_value` in `config`), user edits are written back to it, and
/// external changes are reflected without firing `on_change` again.
pub fn color_wheel(color: RwSignal<WheelColor>, config: ColorWheelConfig) -> ColorWheel {
    let id = ViewId::new();

    let (state, controller) = config
        .default_value(color.get_untracked())
        .chain_on_change(move |c| color.set(*c))
        .into_parts();

    create_effect(move |_| {
        let c = color.get();
        id.update_state(WheelUpdate::Value(c));
    });

    let disabled = controller.is_disabled();
    let wheel = ColorWheel {
        id,
        state,
        controller,
        focused: false,
        size: Default::default(),
        ring_img: None,
        ring_hash: Vec::new(),
        ring_key: None,
    }
    .style(move |s| {
        let cursor = if disabled {
            floem::style::CursorStyle::Default
        } else {
            floem::style::CursorStyle::Pointer
        };
        s.width(constants::WHEEL_SIZE)
            .aspect_ratio(1.0)
            .min_height(constants::MIN_WHEEL_SIZE)
            .cursor(cursor)
    });

    if disabled {
        wheel
    } else {
        wheel.keyboard_navigable()
    }
}

/// Color the ring is painted from. A hue ring always shows fully saturated
/// hues; other channels vary around the current color with the tracked
/// channel pinned to `min`, so dragging along the ring keeps the same base.
fn ring_base(channel: ColorChannel, value: WheelColor, min: f64) -> WheelColor {
    match channel {
        ColorChannel::Hue => WheelColor::default(),
        _ => value.with_channel_value(channel, min).unwrap_or(value),
    }
}

fn wheel_key(key: &Key) -> WheelKey {
    match key {
        Key::Named(NamedKey::ArrowUp) => WheelKey::ArrowUp,
        Key::Named(NamedKey::ArrowDown) => WheelKey::ArrowDown,
        Key::Named(NamedKey::ArrowLeft) => WheelKey::ArrowLeft,
        Key::Named(NamedKey::ArrowRight) => WheelKey::ArrowRight,
        Key::Named(NamedKey::PageUp) => WheelKey::PageUp,
        Key::Named(NamedKey::PageDown) => WheelKey::PageDown,
        _ => WheelKey::Other,
    }
}

impl ColorWheel {
    /// Read-only view of the wheel's state.
    pub fn state(&self) -> &ColorWheelState {
        &self.state
    }

    /// The square rect centered within the widget, used for the wheel.
    fn wheel_rect(&self) -> Rect {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let r = w.min(h) / 2.0;
        let (cx, cy) = (w / 2.0, h / 2.0);
        Rect::new(cx - r, cy - r, cx + r, cy + r)
    }

    fn wheel_bounds(&self) -> WheelRect {
        let rect = self.wheel_rect();
        WheelRect::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    fn host(&self) -> ViewHost {
        ViewHost {
            id: self.id,
            rect: self.wheel_bounds(),
            focused: self.focused,
        }
    }

    fn ring_base(&self) -> WheelColor {
        ring_base(self.state.channel(), self.state.value(), self.state.min_value())
    }

    fn ensure_ring_image(&mut self, scale: f64) {
        let bounds = self.wheel_bounds();
        let side = (bounds.side() * scale.max(1.0)).round() as u32;
        if side == 0 {
            return;
        }

        let base = self.ring_base();
        let disabled = self.controller.is_disabled();
        let key = (side, base.to_hex(), disabled);
        if self.ring_key.as_ref() == Some(&key) {
            return;
        }

        let outer = bounds.outer_radius();
        let inner = if outer > 0.0 {
            bounds.inner_radius(self.controller.thickness()) / outer
        } else {
            0.0
        };
        let channel = self.state.channel();
        let (min, max) = (self.state.min_value(), self.state.max_value());
        let pixels = rasterize_ring(side, inner, |angle| {
            if disabled {
                return DISABLED_RING;
            }
            let value = geometry::value_from_angle(angle, min, max);
            base.with_channel_value(channel, value)
                .unwrap_or(base)
                .to_rgb8()
        });
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, side, side);

        self.ring_hash = blob.id().to_le_bytes().to_vec();
        self.ring_img = Some(img);
        self.ring_key = Some(key);
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::Value(c) => self.state.sync_value(c),
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let to_point = |p: Point| WheelPoint::new(p.x, p.y);
        let wheel_event = match event {
            Event::PointerDown(e) => WheelEvent::PointerDown(to_point(e.pos)),
            Event::PointerMove(e) => WheelEvent::PointerMove(to_point(e.pos)),
            Event::PointerUp(e) => WheelEvent::PointerUp(to_point(e.pos)),
            Event::KeyDown(e) => WheelEvent::KeyDown(wheel_key(&e.key.logical_key)),
            Event::FocusGained => {
                self.focused = true;
                self.id.request_layout();
                return EventPropagation::Continue;
            }
            Event::FocusLost => {
                self.focused = false;
                self.id.clear_active();
                self.id.request_layout();
                WheelEvent::PointerCancel
            }
            _ => return EventPropagation::Continue,
        };

        let mut host = self.host();
        let outcome = self
            .controller
            .handle_event(&mut self.state, &mut host, wheel_event);
        self.focused = host.focused;

        match outcome {
            Ok(EventOutcome::Handled) => {
                if matches!(wheel_event, WheelEvent::PointerDown(_)) {
                    cx.update_active(self.id());
                }
                self.id.request_layout();
                EventPropagation::Stop
            }
            Ok(EventOutcome::Ignored) => EventPropagation::Continue,
            Err(err) => {
                log::warn!("color wheel rejected update: {err}");
                EventPropagation::Continue
            }
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let wheel_rect = self.wheel_rect();
        if wheel_rect.width() == 0.0 {
            return;
        }

        self.ensure_ring_image(cx.scale());
        if let Some(ref img) = self.ring_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.ring_hash,
                },
                wheel_rect,
            );
        }

        let props = self.controller.render_props(&self.state, self.wheel_bounds());
        let center = wheel_rect.center();
        let thumb_pt = Point::new(center.x + props.thumb.offset.x, center.y + props.thumb.offset.y);
        let mut radius = self.controller.thickness() / 2.0 * constants::THUMB_SCALE;
        if props.thumb.dragging {
            radius *= constants::DRAGGING_THUMB_SCALE;
        }

        let fill = if props.input.disabled {
            Color::rgb8(DISABLED_RING.0, DISABLED_RING.1, DISABLED_RING.2)
        } else {
            let (r, g, b) = props.thumb.color.to_rgb8();
            Color::rgb8(r, g, b)
        };
        cx.fill(&Circle::new(thumb_pt, radius), fill, 0.0);
        cx.stroke(
            &Circle::new(thumb_pt, radius + 1.0),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(&Circle::new(thumb_pt, radius), Color::WHITE, &Stroke::new(2.0));

        if self.focused && !props.thumb.dragging {
            cx.stroke(&Circle::new(thumb_pt, radius + 3.0), FOCUS_RING, &Stroke::new(2.0));
        }
    }
}
