//! Color math and channel arithmetic.
//!
//! Color conversions work on normalized f64 in 0.0–1.0. The value helpers work
//! in channel units and are shared by the state, the controller and the view.

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let channel = |n: f64| {
        let k = (n + h * 6.0).rem_euclid(6.0);
        v - v * s * k.min(4.0 - k).clamp(0.0, 1.0)
    };
    (channel(5.0), channel(3.0), channel(1.0))
}

/// RGB → HSB/HSV. All values 0.0–1.0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let delta = max - r.min(g).min(b);

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, max)
}

/// HSL → HSB. All values 0.0–1.0.
pub(crate) fn hsl_to_hsb(h: f64, s_hsl: f64, l: f64) -> (f64, f64, f64) {
    let v = l + s_hsl * l.min(1.0 - l);
    let s_hsb = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    (h, s_hsb, v)
}

/// HSB → HSL. All values 0.0–1.0.
pub(crate) fn hsb_to_hsl(h: f64, s_hsb: f64, v: f64) -> (f64, f64, f64) {
    let l = v * (1.0 - s_hsb / 2.0);
    let s_hsl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (h, s_hsl, l)
}

/// Cyclic wrap of `value` into `[min, max)`.
///
/// Non-finite input and degenerate ranges land on `min`.
pub(crate) fn wrap(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if !value.is_finite() || !range.is_finite() || range <= 0.0 {
        return min;
    }
    let wrapped = min + (value - min).rem_euclid(range);
    // rem_euclid may round up to `range` for tiny negative offsets.
    if wrapped >= max { min } else { wrapped }
}

/// Snap `value` to the nearest multiple of `step` above `min`.
pub(crate) fn snap_to_step(value: f64, min: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    let steps = ((value - min) / step).round();
    round_to_precision(min + steps * step, step_decimals(step))
}

/// `wrap(snap_to_step(value))`, the only form in which values are committed.
pub(crate) fn snap_and_wrap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    wrap(snap_to_step(value, min, step), min, max)
}

/// Position of `value` in `[min, max]` as 0.0–1.0.
pub(crate) fn to_percent(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return 0.0;
    }
    ((value - min) / range).clamp(0.0, 1.0)
}

/// Inverse of [`to_percent`]; `percent` is clamped to 0.0–1.0.
pub(crate) fn from_percent(percent: f64, min: f64, max: f64) -> f64 {
    let p = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 1.0) };
    min + p * (max - min)
}

/// Number of decimals needed to represent `step` exactly (capped at 10).
fn step_decimals(step: f64) -> i32 {
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

fn round_to_precision(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
