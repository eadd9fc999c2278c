//! Standalone demo: opens a window with a hue wheel and a swatch.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel::{color_wheel, ColorWheelConfig, WheelColor};

fn main() {
    let color = RwSignal::new(WheelColor::default());
    let config = ColorWheelConfig::new()
        .step(5.0)
        .on_change_end(|c| println!("picked {c}"));

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    color_wheel(color, config),
                    label(move || color.get().to_string()),
                    empty().style(move |s| {
                        let (r, g, b) = color.get().to_rgb8();
                        s.size(32.0, 32.0).background(Color::rgb8(r, g, b))
                    }),
                ))
                .style(|s| s.gap(8.0).padding(8.0).items_center())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 300.0))
                    .title("floem-wheel"),
            ),
        )
        .run();
}
