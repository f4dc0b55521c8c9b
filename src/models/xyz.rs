//! Model a color in the CIE-XYZ color space with a D65 white point.

use crate::color::Component;

/// Luminance below which lightness is linear in Y, `(6/29)^3`.
#[allow(clippy::excessive_precision)]
pub const EPSILON: Component = 0.0088564516;

/// Slope of the linear segment of lightness, `(29/3)^3`.
#[allow(clippy::excessive_precision)]
pub const KAPPA: Component = 903.2962962;

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz;
}

hueshift_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

/// Convert relative luminance to CIE lightness.
pub fn y_to_lightness(y: Component) -> Component {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0 * y.cbrt() - 16.0
    }
}

/// Convert CIE lightness to relative luminance.
pub fn lightness_to_y(lightness: Component) -> Component {
    if lightness <= 8.0 {
        lightness / KAPPA
    } else {
        let v = (lightness + 16.0) / 116.0;
        v * v * v
    }
}
