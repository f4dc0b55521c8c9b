//! Model a color in the sRGB color space.

use crate::{
    color::Component,
    math::{transform, transform_from_rows, Transform},
    models::xyz::{ToXyz, Xyz},
};

pub mod encoding {
    //! Tags that mark whether RGB components carry the sRGB transfer curve.

    /// This trait is used to identity tags that specify gamma encoding.
    pub trait Encoding {}

    /// Components are gamma encoded, ready for display.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct GammaEncoded;
    impl Encoding for GammaEncoded {}

    /// Components are proportional to light intensity.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct LinearLight;
    impl Encoding for LinearLight {}
}

use encoding::{Encoding, GammaEncoded, LinearLight};

/// Rows of the matrix converting CIE-XYZ (D65) to linear sRGB.
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_LINEAR_SRGB: [[Component; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];

/// Rows of the matrix converting linear sRGB to CIE-XYZ (D65).
#[allow(clippy::excessive_precision)]
pub(crate) const LINEAR_SRGB_TO_XYZ: [[Component; 3]; 3] = [
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
];

hueshift_macros::gen_model! {
    /// A color specified in the sRGB color space.
    pub struct Rgb<E: Encoding> {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

impl<E: Encoding> Rgb<E> {
    /// Returns true if every channel is inside [0, 1].
    #[allow(clippy::manual_range_contains)]
    pub fn in_gamut(&self) -> bool {
        let in_range = |v: Component| v >= 0.0 && v <= 1.0;
        in_range(self.red) && in_range(self.green) && in_range(self.blue)
    }
}

/// Model for a color in the sRGB color space with gamma encoding.
pub type Srgb = Rgb<GammaEncoded>;

/// Model for a color in the sRGB color space with no gamma encoding.
pub type SrgbLinear = Rgb<LinearLight>;

impl Srgb {
    /// Create a color from 8-bit channel values.
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
        )
    }

    /// Convert this model from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> SrgbLinear {
        self.to_components()
            .map(|value| {
                if value > 0.04045 {
                    ((value + 0.055) / 1.055).powf(2.4)
                } else {
                    value / 12.92
                }
            })
            .into()
    }
}

impl SrgbLinear {
    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components()
            .map(|value| {
                if value <= 0.0031308 {
                    12.92 * value
                } else {
                    1.055 * value.powf(1.0 / 2.4) - 0.055
                }
            })
            .into()
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        const FROM_XYZ: Transform = transform_from_rows(&XYZ_TO_LINEAR_SRGB);

        transform(&FROM_XYZ, value.to_components()).into()
    }
}

impl ToXyz for SrgbLinear {
    fn to_xyz(&self) -> Xyz {
        const TO_XYZ: Transform = transform_from_rows(&LINEAR_SRGB_TO_XYZ);

        transform(&TO_XYZ, self.to_components()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_round_trip() {
        for value in [0.0, 0.001, 0.2, 0.5, 0.9, 1.0] {
            let srgb = Srgb::new(value, value, value);
            let back = srgb.to_linear_light().to_gamma_encoded();
            assert_component_eq!(back.red, value);
        }
    }

    #[test]
    fn gamma_uses_linear_segment_near_black() {
        let linear = Srgb::new(0.02, 0.04, 0.0).to_linear_light();
        assert_component_eq!(linear.red, 0.02 / 12.92);
        assert_component_eq!(linear.green, 0.04 / 12.92);
        assert_component_eq!(linear.blue, 0.0);
    }

    #[test]
    fn white_maps_to_d65_white_point() {
        let xyz = Srgb::new(1.0, 1.0, 1.0).to_linear_light().to_xyz();
        assert_component_eq!(xyz.x, 0.95045592705165, 1.0e-9);
        assert_component_eq!(xyz.y, 1.0, 1.0e-9);
        assert_component_eq!(xyz.z, 1.089057750759871, 1.0e-9);
    }

    #[test]
    fn xyz_round_trip() {
        let original = SrgbLinear::new(0.25, 0.5, 0.75);
        let back = SrgbLinear::from(original.to_xyz());
        assert_component_eq!(back.red, 0.25, 1.0e-9);
        assert_component_eq!(back.green, 0.5, 1.0e-9);
        assert_component_eq!(back.blue, 0.75, 1.0e-9);
    }

    #[test]
    fn gamut_check() {
        assert!(Srgb::new(0.0, 0.5, 1.0).in_gamut());
        assert!(!Srgb::new(-0.01, 0.5, 1.0).in_gamut());
        assert!(!Srgb::new(0.0, 0.5, 1.01).in_gamut());
        assert!(!Srgb::new(Component::NAN, 0.5, 1.0).in_gamut());
    }

    #[test]
    fn from_bytes_scales_to_unit_range() {
        let c = Srgb::from_bytes(0, 51, 255);
        assert_component_eq!(c.red, 0.0);
        assert_component_eq!(c.green, 0.2);
        assert_component_eq!(c.blue, 1.0);
    }
}
