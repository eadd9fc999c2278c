//! Pointer, drag and keyboard behavior of the wheel, driven through a
//! test host that records focus requests.

use std::cell::RefCell;
use std::rc::Rc;

use floem_wheel::{
    ColorChannel, ColorWheelConfig, ColorWheelState, EventOutcome, WheelColor, WheelController,
    WheelEvent, WheelHost, WheelKey, WheelPoint, WheelRect,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

/// 200×200 wheel at the origin; with the default 24px track the thumb sits
/// 88px from the center at (100, 100).
const SIZE: f64 = 200.0;
const THUMB_EAST: WheelPoint = WheelPoint { x: 188.0, y: 100.0 };
const SOUTH: WheelPoint = WheelPoint { x: 100.0, y: 188.0 };
const WEST: WheelPoint = WheelPoint { x: 12.0, y: 100.0 };

struct TestHost {
    rect: WheelRect,
    focused: bool,
    focus_requests: usize,
}

impl TestHost {
    fn new() -> Self {
        Self {
            rect: WheelRect::new(0.0, 0.0, SIZE, SIZE),
            focused: false,
            focus_requests: 0,
        }
    }

    fn focused() -> Self {
        Self {
            focused: true,
            ..Self::new()
        }
    }
}

impl WheelHost for TestHost {
    fn bounding_rect(&self) -> WheelRect {
        self.rect
    }

    fn focus_input(&mut self) {
        self.focus_requests += 1;
        self.focused = true;
    }

    fn is_input_focused(&self) -> bool {
        self.focused
    }
}

/// One wheel under test plus the notifications it emitted.
struct Fixture {
    state: ColorWheelState,
    controller: WheelController,
    host: TestHost,
    changes: Rc<RefCell<Vec<WheelColor>>>,
    change_ends: Rc<RefCell<Vec<WheelColor>>>,
}

impl Fixture {
    fn new(config: ColorWheelConfig) -> Self {
        Self::with_host(config, TestHost::new())
    }

    fn with_host(config: ColorWheelConfig, host: TestHost) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let change_ends = Rc::new(RefCell::new(Vec::new()));
        let (sink, end_sink) = (changes.clone(), change_ends.clone());
        let (state, controller) = config
            .on_change(move |c| sink.borrow_mut().push(*c))
            .on_change_end(move |c| end_sink.borrow_mut().push(*c))
            .into_parts();
        Self {
            state,
            controller,
            host,
            changes,
            change_ends,
        }
    }

    fn send(&mut self, event: WheelEvent) -> EventOutcome {
        self.controller
            .handle_event(&mut self.state, &mut self.host, event)
            .unwrap()
    }

    fn press(&mut self, point: WheelPoint) -> EventOutcome {
        self.send(WheelEvent::PointerDown(point))
    }

    fn drag(&mut self, point: WheelPoint) -> EventOutcome {
        self.send(WheelEvent::PointerMove(point))
    }

    fn release(&mut self, point: WheelPoint) -> EventOutcome {
        self.send(WheelEvent::PointerUp(point))
    }

    fn key(&mut self, key: WheelKey) -> EventOutcome {
        self.send(WheelEvent::KeyDown(key))
    }

    fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }

    fn changed_values(&self) -> Vec<f64> {
        let channel = self.state.channel();
        self.changes
            .borrow()
            .iter()
            .map(|c| c.channel_value(channel))
            .collect()
    }

    fn value(&self) -> f64 {
        self.state.channel_value()
    }
}

fn hue_wheel() -> Fixture {
    Fixture::new(ColorWheelConfig::new())
}

#[test]
fn grabbing_the_thumb_in_place_commits_nothing() {
    let mut wheel = hue_wheel();
    assert_eq!(wheel.press(THUMB_EAST), EventOutcome::Handled);
    assert_eq!(wheel.change_count(), 0);
    assert!(wheel.state.is_dragging());
    assert_eq!(wheel.host.focus_requests, 1);
}

#[test]
fn dragging_from_the_thumb_to_the_south_commits_ninety() {
    let mut wheel = hue_wheel();
    wheel.press(THUMB_EAST);
    wheel.drag(SOUTH);
    assert_eq!(wheel.changed_values(), vec![90.0]);
    assert_eq!(wheel.value(), 90.0);

    wheel.drag(WEST);
    assert_eq!(wheel.changed_values(), vec![90.0, 180.0]);
}

#[test]
fn pressing_the_track_commits_immediately() {
    let mut wheel = hue_wheel();
    wheel.press(WEST);
    assert_eq!(wheel.changed_values(), vec![180.0]);
    assert!(wheel.state.is_dragging());
}

#[test]
fn committed_colors_keep_the_other_channels() {
    let start = WheelColor::hsl(0.0, 40.0, 30.0, 0.5).unwrap();
    let mut wheel = Fixture::new(ColorWheelConfig::new().default_value(start));
    wheel.press(SOUTH);
    assert_eq!(
        *wheel.changes.borrow(),
        vec![WheelColor::hsl(90.0, 40.0, 30.0, 0.5).unwrap()]
    );
}

#[test]
fn sub_step_moves_are_not_reported_twice() {
    let mut wheel = hue_wheel();
    wheel.press(THUMB_EAST);
    wheel.drag(SOUTH);
    // About 0.07° past south, still snaps to 90.
    wheel.drag(WheelPoint::new(99.9, 188.0));
    wheel.drag(WheelPoint::new(100.0, 150.0));
    assert_eq!(wheel.change_count(), 1);
}

#[test]
fn release_emits_no_change_and_ends_the_drag() {
    let mut wheel = hue_wheel();
    wheel.press(THUMB_EAST);
    wheel.drag(SOUTH);
    let before = wheel.change_count();

    assert_eq!(wheel.release(SOUTH), EventOutcome::Handled);
    assert_eq!(wheel.change_count(), before);
    assert!(!wheel.state.is_dragging());
    assert_eq!(wheel.change_ends.borrow().len(), 1);
    assert_eq!(wheel.change_ends.borrow()[0].channel_value(ColorChannel::Hue), 90.0);
}

#[test]
fn release_outside_the_wheel_still_ends_the_drag() {
    let mut wheel = hue_wheel();
    wheel.press(WEST);
    wheel.drag(WheelPoint::new(-500.0, 100.0));
    wheel.release(WheelPoint::new(-500.0, 900.0));
    assert!(!wheel.state.is_dragging());
    assert_eq!(wheel.value(), 180.0);
}

#[test]
fn moves_after_release_are_ignored() {
    let mut wheel = hue_wheel();
    wheel.press(THUMB_EAST);
    wheel.release(THUMB_EAST);
    assert_eq!(wheel.drag(SOUTH), EventOutcome::Ignored);
    assert_eq!(wheel.change_count(), 0);
}

#[test]
fn cancel_ends_the_drag() {
    let mut wheel = hue_wheel();
    wheel.press(WEST);
    assert_eq!(wheel.send(WheelEvent::PointerCancel), EventOutcome::Handled);
    assert!(!wheel.state.is_dragging());
}

#[test]
fn drag_flag_spans_press_to_release() {
    let mut wheel = hue_wheel();
    assert!(!wheel.state.is_dragging());
    wheel.press(THUMB_EAST);
    for point in [SOUTH, WEST, THUMB_EAST] {
        wheel.drag(point);
        assert!(wheel.state.is_dragging());
    }
    wheel.release(THUMB_EAST);
    assert!(!wheel.state.is_dragging());
}

#[test_case(WheelKey::ArrowRight, 1.0; "right increases")]
#[test_case(WheelKey::ArrowUp, 1.0; "up increases")]
#[test_case(WheelKey::ArrowLeft, 359.0; "left wraps")]
#[test_case(WheelKey::ArrowDown, 359.0; "down wraps")]
#[test_case(WheelKey::PageUp, 15.0; "page up")]
#[test_case(WheelKey::PageDown, 345.0; "page down wraps")]
fn keyboard_from_zero(key: WheelKey, expected: f64) {
    let mut wheel = Fixture::with_host(ColorWheelConfig::new(), TestHost::focused());
    assert_eq!(wheel.key(key), EventOutcome::Handled);
    assert_eq!(wheel.changed_values(), vec![expected]);
    assert!(!wheel.state.is_dragging());
}

#[test]
fn keyboard_needs_focus() {
    let mut wheel = hue_wheel();
    assert_eq!(wheel.key(WheelKey::ArrowRight), EventOutcome::Ignored);
    assert_eq!(wheel.change_count(), 0);
}

#[test]
fn large_steps_traverse_the_circle() {
    let mut wheel = Fixture::with_host(ColorWheelConfig::new().step(45.0), TestHost::focused());
    wheel.key(WheelKey::ArrowRight);
    assert_eq!(wheel.value(), 45.0);

    wheel.key(WheelKey::ArrowLeft);
    wheel.key(WheelKey::ArrowLeft);
    assert_eq!(wheel.value(), 315.0);

    wheel.key(WheelKey::ArrowRight);
    assert_eq!(wheel.value(), 0.0);

    let mut seen = Vec::new();
    for _ in 0..8 {
        wheel.key(WheelKey::ArrowRight);
        seen.push(wheel.value());
    }
    assert_eq!(
        seen,
        vec![45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0, 0.0]
    );
}

#[test]
fn increase_then_decrease_returns_to_start() {
    let mut wheel = Fixture::with_host(ColorWheelConfig::new(), TestHost::focused());
    for start in [0.0, 1.0, 179.0, 359.0] {
        wheel.state.set_channel_value(start).unwrap();
        wheel.key(WheelKey::ArrowRight);
        wheel.key(WheelKey::ArrowLeft);
        assert_eq!(wheel.value(), start);
    }
}

#[test]
fn keys_do_not_start_a_drag_mid_keyboard_use() {
    let mut wheel = Fixture::with_host(ColorWheelConfig::new(), TestHost::focused());
    for _ in 0..3 {
        wheel.key(WheelKey::ArrowUp);
        assert!(!wheel.state.is_dragging());
    }
    assert!(wheel.change_ends.borrow().is_empty());
}

#[test]
fn disabled_wheel_ignores_everything() {
    let mut wheel = Fixture::with_host(ColorWheelConfig::new().disabled(true), TestHost::focused());
    wheel.host.focused = false;

    assert_eq!(wheel.press(WEST), EventOutcome::Ignored);
    assert_eq!(wheel.drag(SOUTH), EventOutcome::Ignored);
    assert_eq!(wheel.release(SOUTH), EventOutcome::Ignored);
    wheel.host.focused = true;
    assert_eq!(wheel.key(WheelKey::ArrowRight), EventOutcome::Ignored);

    assert_eq!(wheel.change_count(), 0);
    assert!(!wheel.state.is_dragging());
    assert_eq!(wheel.host.focus_requests, 0);
    assert_eq!(wheel.value(), 0.0);

    let props = wheel.controller.render_props(&wheel.state, wheel.host.rect);
    assert!(props.input.disabled);
    assert_eq!(props.input.tab_index, None);
}

#[test]
fn empty_geometry_falls_back_to_the_reference_direction() {
    let host = TestHost {
        rect: WheelRect::new(50.0, 50.0, 0.0, 0.0),
        ..TestHost::new()
    };
    let mut wheel = Fixture::with_host(ColorWheelConfig::new().default_value(90.0), host);
    wheel.press(SOUTH);
    assert_eq!(wheel.changed_values(), vec![0.0]);
}

#[test]
fn offset_wheels_use_page_coordinates() {
    let host = TestHost {
        rect: WheelRect::new(300.0, 40.0, SIZE, SIZE),
        ..TestHost::new()
    };
    let mut wheel = Fixture::with_host(ColorWheelConfig::new(), host);
    wheel.press(WheelPoint::new(400.0, 228.0));
    assert_eq!(wheel.changed_values(), vec![90.0]);
}

#[test]
fn saturation_wheel_maps_the_circle_onto_its_range() {
    let mut wheel = Fixture::new(ColorWheelConfig::new().channel(ColorChannel::Saturation));
    wheel.press(SOUTH);
    assert_eq!(wheel.changed_values(), vec![25.0]);
    wheel.drag(WEST);
    assert_eq!(wheel.changed_values(), vec![25.0, 50.0]);
}

#[test]
fn custom_range_wraps_at_its_own_bounds() {
    let mut wheel = Fixture::with_host(
        ColorWheelConfig::new().min_value(0.0).max_value(180.0).step(10.0),
        TestHost::focused(),
    );
    wheel.key(WheelKey::ArrowDown);
    assert_eq!(wheel.value(), 170.0);
    wheel.press(WEST);
    assert_eq!(wheel.value(), 90.0);
}

#[test]
fn controlled_wheel_reports_but_waits_for_the_owner() {
    let mut wheel = Fixture::new(ColorWheelConfig::new().value(WheelColor::default()));
    wheel.press(WEST);
    assert_eq!(wheel.changed_values(), vec![180.0]);
    assert_eq!(wheel.value(), 0.0);

    let accepted = wheel.changes.borrow()[0];
    wheel.state.sync_value(accepted);
    wheel.drag(WEST);
    assert_eq!(wheel.change_count(), 1);
    assert_eq!(wheel.value(), 180.0);
}

#[test]
fn thumb_follows_the_value() {
    let mut wheel = hue_wheel();
    wheel.press(WEST);
    let props = wheel.controller.render_props(&wheel.state, wheel.host.rect);
    assert!((props.thumb.offset.x + 88.0).abs() < 1e-9);
    assert!(props.thumb.offset.y.abs() < 1e-9);
    assert!(props.thumb.dragging);
    assert_eq!(props.input.value_text, "180°");
    assert_eq!(props.input.label, "Hue");
    assert_eq!(props.input.role, "slider");
}
