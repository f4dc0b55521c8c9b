//! Model a color with the HSLuv notation, a perceptually uniform alternative
//! to HSL built on CIE-LCh(uv).

use crate::{
    color::Component,
    gamut::max_chroma,
    math::normalize_hue,
    models::{
        luv::{Lch, Luv},
        rgb::{Srgb, SrgbLinear},
        xyz::ToXyz,
    },
};

/// Lightness above which a color is treated as pure white.
const WHITE_LIGHTNESS: Component = 99.9999999;

/// Lightness below which a color is treated as pure black.
const BLACK_LIGHTNESS: Component = 1.0e-8;

hueshift_macros::gen_model! {
    /// A color specified with the HSLuv notation.
    pub struct Hsluv {
        /// The hue component of the color, in degrees.
        pub hue: Component,
        /// The saturation of the color as a percentage of the maximum chroma
        /// available at its lightness and hue.
        pub saturation: Component,
        /// The lightness component of the color.
        pub lightness: Component,
    }
}

impl Hsluv {
    /// Convert this color to CIE-LCh(uv).
    pub fn to_lch(&self) -> Lch {
        let hue = normalize_hue(self.hue);

        if self.lightness > WHITE_LIGHTNESS {
            return Lch::new(100.0, 0.0, hue);
        }
        if self.lightness < BLACK_LIGHTNESS {
            return Lch::new(0.0, 0.0, hue);
        }

        let max = max_chroma(self.lightness, hue);
        Lch::new(self.lightness, max / 100.0 * self.saturation, hue)
    }

    /// Convert this color to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        self.to_lch().to_srgb()
    }
}

impl Lch {
    /// Convert this color to the HSLuv notation.
    pub fn to_hsluv(&self) -> Hsluv {
        let hue = normalize_hue(self.hue);

        if self.lightness > WHITE_LIGHTNESS {
            return Hsluv::new(hue, 0.0, 100.0);
        }
        if self.lightness < BLACK_LIGHTNESS {
            return Hsluv::new(hue, 0.0, 0.0);
        }

        let max = max_chroma(self.lightness, hue);
        Hsluv::new(hue, self.chroma / max * 100.0, self.lightness)
    }

    /// Convert this color to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        SrgbLinear::from(self.to_rectangular().to_xyz()).to_gamma_encoded()
    }
}

impl Srgb {
    /// Convert this color to CIE-LCh(uv).
    pub fn to_lch(&self) -> Lch {
        Luv::from(self.to_linear_light().to_xyz()).to_polar()
    }

    /// Convert this color to the HSLuv notation.
    pub fn to_hsluv(&self) -> Hsluv {
        self.to_lch().to_hsluv()
    }
}
