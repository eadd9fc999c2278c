//! Wheel geometry: points, the bounding square, and angle/value mapping.
//!
//! Angles are in degrees, 0° points east and angles grow clockwise on screen
//! (y axis pointing down), matching `atan2(dy, dx)` in screen space.

/// A point in the host's coordinate space (page or view local).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelPoint {
    pub x: f64,
    pub y: f64,
}

impl WheelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the drag surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WheelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> WheelPoint {
        WheelPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Side length of the square region used for the wheel.
    pub fn side(&self) -> f64 {
        self.width.min(self.height).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.side() <= 0.0
    }

    pub fn contains(&self, point: WheelPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn outer_radius(&self) -> f64 {
        self.side() / 2.0
    }

    /// Inner radius of the track ring for a given track thickness.
    pub fn inner_radius(&self, thickness: f64) -> f64 {
        (self.outer_radius() - thickness).max(0.0)
    }

    /// Radius at which the thumb center sits: the middle of the track.
    pub fn thumb_radius(&self, thickness: f64) -> f64 {
        (self.outer_radius() + self.inner_radius(thickness)) / 2.0
    }
}

/// Angle in `[0, 360)` of the vector from `center` to `point`.
///
/// A point at the exact center has no direction and maps to 0°.
pub fn angle_from_point(center: WheelPoint, point: WheelPoint) -> f64 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    if (dx == 0.0 && dy == 0.0) || !dx.is_finite() || !dy.is_finite() {
        return 0.0;
    }
    let degrees = dy.atan2(dx).to_degrees();
    let normalized = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    if normalized >= 360.0 { 0.0 } else { normalized }
}

/// Map an angle to a channel value in `[min, max)`, before snapping.
pub fn value_from_angle(angle: f64, min: f64, max: f64) -> f64 {
    min + angle / 360.0 * (max - min)
}

/// Map a channel value back to its angle on the wheel.
pub fn angle_from_value(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range <= 0.0 {
        return 0.0;
    }
    (value - min) / range * 360.0
}

/// Offset of the thumb center from the wheel center for `value`.
pub fn thumb_offset(value: f64, radius: f64, min: f64, max: f64) -> WheelPoint {
    let angle = angle_from_value(value, min, max).to_radians();
    WheelPoint::new(angle.cos() * radius, angle.sin() * radius)
}

/// What a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Thumb,
    Track,
    Container,
    Outside,
}

/// Classify `point` against the thumb, the track ring and the bounding square.
///
/// `thumb` is the thumb center in the same coordinate space as `point`.
pub fn hit_test(rect: WheelRect, thickness: f64, thumb: WheelPoint, point: WheelPoint) -> HitRegion {
    if rect.is_empty() || !rect.contains(point) {
        return HitRegion::Outside;
    }
    let center = rect.center();
    let dist = (point.x - center.x).hypot(point.y - center.y);
    let thumb_dist = (point.x - thumb.x).hypot(point.y - thumb.y);
    if thumb_dist <= thickness / 2.0 {
        HitRegion::Thumb
    } else if dist >= rect.inner_radius(thickness) && dist <= rect.outer_radius() {
        HitRegion::Track
    } else {
        HitRegion::Container
    }
}
