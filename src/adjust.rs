//! Perceptual adjustments of colors in the HSLuv notation.
//!
//! Amounts passed to [`Hsluv::lighten`] and friends are interpolation
//! progress towards the extreme, not percentage deltas: an amount of `1.0`
//! lands exactly on the extreme and `0.0` leaves the color unchanged.

use crate::{
    color::Component,
    error::Result,
    hex::{hex_to_hsluv, hsluv_to_hex},
    interpolate::{linear_tween, radial_tween},
    math::normalize_hue,
    models::Hsluv,
};

/// The ratio used by [`Hsluv::mix`] and [`mix_hex`].
pub const DEFAULT_BLEND_RATIO: Component = 0.5;

impl Hsluv {
    /// Move the lightness towards 100 by `amount`.
    pub fn lighten(&self, amount: Component) -> Self {
        Self::new(
            self.hue,
            self.saturation,
            linear_tween(self.lightness, 100.0)(amount),
        )
    }

    /// Move the lightness towards 0 by `amount`.
    pub fn darken(&self, amount: Component) -> Self {
        Self::new(
            self.hue,
            self.saturation,
            linear_tween(self.lightness, 0.0)(amount),
        )
    }

    /// Move the saturation towards 100 by `amount`.
    pub fn saturate(&self, amount: Component) -> Self {
        Self::new(
            self.hue,
            linear_tween(self.saturation, 100.0)(amount),
            self.lightness,
        )
    }

    /// Move the saturation towards 0 by `amount`.
    pub fn desaturate(&self, amount: Component) -> Self {
        Self::new(
            self.hue,
            linear_tween(self.saturation, 0.0)(amount),
            self.lightness,
        )
    }

    /// Rotate the hue by `degrees`, which may be negative.
    pub fn rotate(&self, degrees: Component) -> Self {
        Self::new(
            normalize_hue(self.hue + degrees),
            self.saturation,
            self.lightness,
        )
    }

    /// Interpolate towards `other`. The hue travels along the shorter arc.
    pub fn blend(&self, other: &Self, ratio: Component) -> Self {
        Self::new(
            radial_tween(self.hue, other.hue)(ratio),
            linear_tween(self.saturation, other.saturation)(ratio),
            linear_tween(self.lightness, other.lightness)(ratio),
        )
    }

    /// Blend halfway towards `other`.
    pub fn mix(&self, other: &Self) -> Self {
        self.blend(other, DEFAULT_BLEND_RATIO)
    }
}

fn adjust_hex(hex: &str, f: impl FnOnce(&Hsluv) -> Hsluv) -> Result<String> {
    Ok(hsluv_to_hex(&f(&hex_to_hsluv(hex)?)))
}

/// Lighten a hex color, see [`Hsluv::lighten`].
pub fn lighten_hex(hex: &str, amount: Component) -> Result<String> {
    adjust_hex(hex, |c| c.lighten(amount))
}

/// Darken a hex color, see [`Hsluv::darken`].
pub fn darken_hex(hex: &str, amount: Component) -> Result<String> {
    adjust_hex(hex, |c| c.darken(amount))
}

/// Saturate a hex color, see [`Hsluv::saturate`].
pub fn saturate_hex(hex: &str, amount: Component) -> Result<String> {
    adjust_hex(hex, |c| c.saturate(amount))
}

/// Desaturate a hex color, see [`Hsluv::desaturate`].
pub fn desaturate_hex(hex: &str, amount: Component) -> Result<String> {
    adjust_hex(hex, |c| c.desaturate(amount))
}

/// Rotate the hue of a hex color, see [`Hsluv::rotate`].
pub fn rotate_hex(hex: &str, degrees: Component) -> Result<String> {
    adjust_hex(hex, |c| c.rotate(degrees))
}

/// Blend two hex colors, see [`Hsluv::blend`].
pub fn blend_hex(hex1: &str, hex2: &str, ratio: Component) -> Result<String> {
    let other = hex_to_hsluv(hex2)?;
    adjust_hex(hex1, |c| c.blend(&other, ratio))
}

/// Blend two hex colors halfway.
pub fn mix_hex(hex1: &str, hex2: &str) -> Result<String> {
    blend_hex(hex1, hex2, DEFAULT_BLEND_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn lighten_and_darken_move_towards_the_extremes() {
        let c = Hsluv::new(200.0, 60.0, 40.0);
        assert_component_eq!(c.lighten(0.5).lightness, 70.0);
        assert_component_eq!(c.lighten(1.0).lightness, 100.0);
        assert_component_eq!(c.darken(0.5).lightness, 20.0);
        assert_component_eq!(c.darken(1.0).lightness, 0.0);
        assert_eq!(c.lighten(0.0), c);

        // Hue and saturation are untouched.
        assert_eq!(c.lighten(0.3).hue, 200.0);
        assert_eq!(c.darken(0.3).saturation, 60.0);
    }

    #[test]
    fn saturate_and_desaturate_move_towards_the_extremes() {
        let c = Hsluv::new(200.0, 60.0, 40.0);
        assert_component_eq!(c.saturate(0.5).saturation, 80.0);
        assert_component_eq!(c.desaturate(0.5).saturation, 30.0);
        assert_component_eq!(c.desaturate(1.0).saturation, 0.0);
        assert_eq!(c.saturate(0.5).lightness, 40.0);
    }

    #[test]
    fn rotate_wraps() {
        let c = Hsluv::new(350.0, 60.0, 40.0);
        assert_component_eq!(c.rotate(20.0).hue, 10.0);
        assert_component_eq!(c.rotate(-360.0).hue, 350.0);
        assert_component_eq!(Hsluv::new(5.0, 0.0, 0.0).rotate(-10.0).hue, 355.0);
    }

    #[test]
    fn blend_interpolates_each_component() {
        let a = Hsluv::new(350.0, 20.0, 10.0);
        let b = Hsluv::new(30.0, 80.0, 90.0);
        let c = a.blend(&b, 0.5);
        assert_component_eq!(c.hue, 10.0);
        assert_component_eq!(c.saturation, 50.0);
        assert_component_eq!(c.lightness, 50.0);
        assert_eq!(a.mix(&b), c);
    }

    #[test]
    fn blend_hex_golden_value() {
        assert_eq!(blend_hex("#161616", "#ffffff", 0.5).unwrap(), "#808080");
        assert_eq!(mix_hex("#161616", "#ffffff").unwrap(), "#808080");
    }

    #[test]
    fn blend_hex_takes_the_short_hue_path() {
        assert_eq!(blend_hex("#ff0000", "#0000ff", 0.5).unwrap(), "#ba00a2");
    }

    #[test]
    fn hex_adjustments_match_reference_values() {
        assert_eq!(lighten_hex("#ff0000", 0.3).unwrap(), "#ff7b7b");
        assert_eq!(darken_hex("#ff0000", 0.3).unwrap(), "#b40000");
        assert_eq!(saturate_hex("#336699", 0.5).unwrap(), "#2366a0");
        assert_eq!(desaturate_hex("#336699", 0.5).unwrap(), "#52647f");
    }

    #[test]
    fn rotate_hex_full_turn_is_identity() {
        assert_eq!(rotate_hex("#336699", 360.0).unwrap(), "#336699");
        assert_eq!(
            rotate_hex("#336699", -10.0).unwrap(),
            rotate_hex("#336699", 350.0).unwrap()
        );
    }

    #[test]
    fn extremes_ignore_hue_and_saturation() {
        assert_eq!(lighten_hex("#336699", 1.0).unwrap(), "#ffffff");
        assert_eq!(darken_hex("#336699", 1.0).unwrap(), "#000000");
    }

    #[test]
    fn invalid_input_is_reported() {
        assert!(matches!(
            lighten_hex("#12", 0.5),
            Err(Error::InvalidHexFormat(_))
        ));
        assert!(matches!(
            blend_hex("#000000", "#00000z", 0.5),
            Err(Error::InvalidHexDigit { index: 6, .. })
        ));
    }
}
