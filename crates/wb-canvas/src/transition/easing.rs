//! Easing curve for camera transitions

/// `1 - (1 - t)^3`: fast start, gentle landing
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let rest = 1.0 - t;
    1.0 - rest * rest * rest
}
