//! Interpolation between scalar values and hue angles.
//!
//! Progress values are not clamped, so passing `t` outside of [0, 1]
//! extrapolates.

use num_traits::Float;

use crate::{color::Component, math::normalize_hue};

/// Linearly interpolate from `a` to `b` using `t` as the progress between
/// them.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Return a function that linearly interpolates from `a` to `b`.
pub fn linear_tween<T: Float>(a: T, b: T) -> impl Fn(T) -> T {
    move |t| lerp(a, b, t)
}

/// Return a function that interpolates between two hue angles in degrees
/// along the shorter arc of the circle. Results are in [0, 360).
pub fn radial_tween(a: Component, b: Component) -> impl Fn(Component) -> Component {
    let delta = (b - a).to_radians();
    let delta = delta.sin().atan2(delta.cos()).to_degrees();

    move |t| normalize_hue(a + t * delta)
}
