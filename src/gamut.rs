//! The boundary of the sRGB gamut in the CIE-LUV chromaticity plane.
//!
//! At a fixed lightness the colors that fit inside the RGB cube form a
//! hexagon around the achromatic axis. Each edge is where one linear RGB
//! channel reaches either 0 or 1. HSLuv saturation is chroma expressed as a
//! percentage of the distance from the axis to that hexagon along the hue
//! direction.

use crate::{
    color::Component,
    models::{rgb::XYZ_TO_LINEAR_SRGB, xyz::EPSILON, xyz::KAPPA},
};

/// One edge of the gamut hexagon, as the line `v = slope * u + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryLine {
    /// The slope of the line.
    pub slope: Component,
    /// Where the line crosses the v axis.
    pub intercept: Component,
}

impl BoundaryLine {
    /// Distance from the origin to this line along a ray at angle `theta`
    /// (radians). Returns `None` if the ray points away from the line.
    pub fn ray_length(&self, theta: Component) -> Option<Component> {
        let length = self.intercept / (theta.sin() - self.slope * theta.cos());
        // NaN fails the comparison as well.
        (length >= 0.0).then_some(length)
    }
}

/// Compute the six lines bounding the sRGB gamut at the given lightness.
///
/// Lines are ordered by RGB channel, with the channel at 0 before the channel
/// at 1. Degenerate lightness values yield infinite or NaN coefficients, which
/// [`BoundaryLine::ray_length`] rejects.
pub fn boundary_lines(lightness: Component) -> [BoundaryLine; 6] {
    let sub1 = {
        let v = (lightness + 16.0) / 116.0;
        v * v * v
    };
    let sub2 = if sub1 > EPSILON {
        sub1
    } else {
        lightness / KAPPA
    };

    let mut lines = [BoundaryLine {
        slope: 0.0,
        intercept: 0.0,
    }; 6];

    for (channel, &[m1, m2, m3]) in XYZ_TO_LINEAR_SRGB.iter().enumerate() {
        for t in 0..2 {
            let t = t as Component;

            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 = (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * lightness * sub2
                - 769860.0 * t * lightness;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t;

            lines[channel * 2 + t as usize] = BoundaryLine {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }

    lines
}

/// The largest chroma available at the given lightness and hue (degrees)
/// without leaving the sRGB gamut.
///
/// Only meaningful strictly between lightness 0 and 100. If no boundary line
/// is reachable the result is [`Component::INFINITY`].
pub fn max_chroma(lightness: Component, hue: Component) -> Component {
    let theta = hue.to_radians();

    boundary_lines(lightness)
        .iter()
        .filter_map(|line| line.ray_length(theta))
        .fold(Component::INFINITY, Component::min)
}
