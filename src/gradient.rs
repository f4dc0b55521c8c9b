//! Lists of colors blended between two end points.

use crate::{
    color::Component,
    error::Result,
    hex::hex_to_hsluv,
    models::{Hsluv, Srgb},
};

/// The number of steps between the end points of [`gradient`].
const GRADIENT_STEPS: usize = 50;

fn blend_all(from: &Hsluv, to: &Hsluv, ratios: impl Iterator<Item = Component>) -> Vec<String> {
    ratios
        .map(|ratio| from.blend(to, ratio).to_srgb().to_hex())
        .collect()
}

/// Blend from `hex1` to `hex2` at ratios 0, 0.02, ..., 1, giving 51 colors.
pub fn gradient(hex1: &str, hex2: &str) -> Result<Vec<String>> {
    let from = hex_to_hsluv(hex1)?;
    let to = hex_to_hsluv(hex2)?;

    let ratios = (0..=GRADIENT_STEPS).map(|i| i as Component / GRADIENT_STEPS as Component);
    Ok(blend_all(&from, &to, ratios))
}

/// Return `hex1`, then `count` colors evenly spaced between the two, then
/// `hex2`.
///
/// The end points are re-encoded in lowercase, so the first and last colors
/// equal `hex1` and `hex2` only when those are already lowercase.
pub fn gradient_n(hex1: &str, hex2: &str, count: usize) -> Result<Vec<String>> {
    let first = Srgb::from_hex(hex1)?;
    let last = Srgb::from_hex(hex2)?;

    let from = first.to_hsluv();
    let to = last.to_hsluv();

    let steps = (count + 1) as Component;
    let ratios = (1..=count).map(|i| i as Component / steps);

    let mut colors = Vec::with_capacity(count + 2);
    colors.push(first.to_hex());
    colors.extend(blend_all(&from, &to, ratios));
    colors.push(last.to_hex());

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_has_51_colors() {
        let colors = gradient("#000000", "#ffffff").unwrap();
        assert_eq!(colors.len(), 51);
        assert_eq!(colors.first().unwrap(), "#000000");
        assert_eq!(colors.last().unwrap(), "#ffffff");
    }

    #[test]
    fn gradient_matches_blend() {
        let colors = gradient("#161616", "#ffffff").unwrap();
        assert_eq!(colors[25], "#808080");
    }

    #[test]
    fn gradient_n_reference_values() {
        assert_eq!(
            gradient_n("#000000", "#ffffff", 3).unwrap(),
            ["#000000", "#3b3b3b", "#777777", "#b9b9b9", "#ffffff"]
        );
    }

    #[test]
    fn gradient_n_keeps_end_points() {
        let colors = gradient_n("#FF0000", "#0000ff", 0).unwrap();
        assert_eq!(colors, ["#ff0000", "#0000ff"]);
        assert_ne!(colors[0], "#FF0000");

        let colors = gradient_n("#161616", "#78a9ff", 7).unwrap();
        assert_eq!(colors.len(), 9);
        assert_eq!(colors[0], "#161616");
        assert_eq!(colors[8], "#78a9ff");
    }

    #[test]
    fn invalid_end_points_are_reported() {
        assert!(gradient("#000000", "white").is_err());
        assert!(gradient_n("black", "#ffffff", 2).is_err());
    }
}
