//! Models for the CIE-LUV color space in its rectangular form and its
//! cylindrical polar form, CIE-LCh(uv).

use crate::{
    color::Component,
    math::normalize_hue,
    models::xyz::{lightness_to_y, y_to_lightness, ToXyz, Xyz},
};

/// Chromaticity coordinate u' of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub const REF_U: Component = 0.19783000664283;

/// Chromaticity coordinate v' of the D65 reference white.
#[allow(clippy::excessive_precision)]
pub const REF_V: Component = 0.46831999493879;

/// Chroma below which a color is treated as achromatic and its hue pinned to
/// zero.
const ACHROMATIC_THRESHOLD: Component = 1.0e-8;

hueshift_macros::gen_model! {
    /// A color specified in the CIE-LUV color space.
    pub struct Luv {
        /// The lightness component.
        pub lightness: Component,
        /// The u component.
        pub u: Component,
        /// The v component.
        pub v: Component,
    }
}

impl Luv {
    /// Convert this rectangular model into its cylindrical polar form.
    pub fn to_polar(&self) -> Lch {
        let chroma = (self.u * self.u + self.v * self.v).sqrt();
        let hue = if chroma < ACHROMATIC_THRESHOLD {
            0.0
        } else {
            normalize_hue(self.v.atan2(self.u).to_degrees())
        };

        Lch::new(self.lightness, chroma, hue)
    }
}

impl From<Xyz> for Luv {
    fn from(value: Xyz) -> Self {
        let Xyz { x, y, z } = value;

        let divider = x + 15.0 * y + 3.0 * z;
        let (var_u, var_v) = if divider == 0.0 {
            (0.0, 0.0)
        } else {
            (4.0 * x / divider, 9.0 * y / divider)
        };

        let lightness = y_to_lightness(y);
        // Black has no chromaticity.
        if lightness == 0.0 {
            return Luv::new(0.0, 0.0, 0.0);
        }

        Luv::new(
            lightness,
            13.0 * lightness * (var_u - REF_U),
            13.0 * lightness * (var_v - REF_V),
        )
    }
}

impl ToXyz for Luv {
    fn to_xyz(&self) -> Xyz {
        if self.lightness == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }

        let var_u = self.u / (13.0 * self.lightness) + REF_U;
        let var_v = self.v / (13.0 * self.lightness) + REF_V;

        let y = lightness_to_y(self.lightness);
        let x = -(9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
        let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);

        Xyz::new(x, y, z)
    }
}

hueshift_macros::gen_model! {
    /// A color specified in CIE-LCh(uv), the polar form of CIE-LUV.
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component, in degrees.
        pub hue: Component,
    }
}

impl Lch {
    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form.
    pub fn to_rectangular(&self) -> Luv {
        let hue = self.hue.to_radians();
        let u = self.chroma * hue.cos();
        let v = self.chroma * hue.sin();

        Luv::new(self.lightness, u, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Srgb;

    #[test]
    fn black_is_pinned_to_the_origin() {
        let luv = Luv::from(Xyz::new(0.0, 0.0, 0.0));
        assert_eq!(luv, Luv::new(0.0, 0.0, 0.0));

        let xyz = Luv::new(0.0, 12.0, -3.0).to_xyz();
        assert_eq!(xyz, Xyz::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn achromatic_colors_have_zero_hue() {
        let lch = Luv::new(50.0, 1.0e-9, -1.0e-9).to_polar();
        assert_eq!(lch.hue, 0.0);

        let white = Luv::from(Srgb::new(1.0, 1.0, 1.0).to_linear_light().to_xyz()).to_polar();
        assert_component_eq!(white.lightness, 100.0, 1.0e-9);
        assert_eq!(white.hue, 0.0);
    }

    #[test]
    fn hue_is_in_range() {
        let lch = Luv::new(50.0, 10.0, -10.0).to_polar();
        assert_component_eq!(lch.hue, 315.0);
        assert_component_eq!(lch.chroma, 200.0_f64.sqrt());
    }

    #[test]
    fn red_matches_reference_values() {
        let lch = Luv::from(Srgb::new(1.0, 0.0, 0.0).to_linear_light().to_xyz()).to_polar();
        assert_component_eq!(lch.lightness, 53.23711559542933, 1.0e-8);
        assert_component_eq!(lch.chroma, 179.0380969236203, 1.0e-8);
        assert_component_eq!(lch.hue, 12.177050630061776, 1.0e-8);
    }

    #[test]
    fn xyz_round_trip() {
        let xyz = Xyz::new(0.2, 0.3, 0.4);
        let back = Luv::from(xyz).to_xyz();
        assert_component_eq!(back.x, 0.2);
        assert_component_eq!(back.y, 0.3);
        assert_component_eq!(back.z, 0.4);
    }

    #[test]
    fn polar_round_trip() {
        let luv = Luv::new(60.0, -20.0, 35.0);
        let back = luv.to_polar().to_rectangular();
        assert_component_eq!(back.lightness, 60.0);
        assert_component_eq!(back.u, -20.0);
        assert_component_eq!(back.v, 35.0);
    }
}
