//! An eight slot palette ramping from a background color to a foreground
//! color.
//!
//! The ramp is not evenly spaced: it keeps three slots close to the
//! background for surfaces, and three close to the foreground for text.

use rand::Rng;

use crate::{color::Component, error::Result, models::Srgb};

/// Blend ratios from the background to the foreground, one per slot.
pub const RAMP: [Component; 8] = [0.0, 0.085, 0.18, 0.3, 0.7, 0.82, 0.95, 1.0];

/// Names of the palette slots, in ramp order.
pub const SLOT_NAMES: [&str; 8] = [
    "base00", "base01", "base02", "base03", "base04", "base05", "base06", "base07",
];

/// Hex colors for each slot of the ramp.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// The background.
    pub base00: String,
    /// Blended at 0.085.
    pub base01: String,
    /// Blended at 0.18.
    pub base02: String,
    /// Blended at 0.3.
    pub base03: String,
    /// Blended at 0.7.
    pub base04: String,
    /// Blended at 0.82.
    pub base05: String,
    /// Blended at 0.95.
    pub base06: String,
    /// The foreground.
    pub base07: String,
}

impl Palette {
    /// Build a palette by blending `background` towards `foreground`.
    pub fn from_colors(background: &Srgb, foreground: &Srgb) -> Self {
        let from = background.to_hsluv();
        let to = foreground.to_hsluv();

        let [base00, base01, base02, base03, base04, base05, base06, base07] =
            RAMP.map(|ratio| match ratio {
                // The seeds are used as they are.
                r if r == 0.0 => background.to_hex(),
                r if r == 1.0 => foreground.to_hex(),
                r => from.blend(&to, r).to_srgb().to_hex(),
            });

        Self {
            base00,
            base01,
            base02,
            base03,
            base04,
            base05,
            base06,
            base07,
        }
    }

    /// Build a palette from two `#rrggbb` seed colors.
    pub fn from_seeds(background: &str, foreground: &str) -> Result<Self> {
        Ok(Self::from_colors(
            &Srgb::from_hex(background)?,
            &Srgb::from_hex(foreground)?,
        ))
    }

    /// Look up a slot by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find_map(|(slot, hex)| (slot == name).then_some(hex))
    }

    /// Iterate over `(name, hex)` pairs in ramp order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let slots = [
            &self.base00,
            &self.base01,
            &self.base02,
            &self.base03,
            &self.base04,
            &self.base05,
            &self.base06,
            &self.base07,
        ];
        SLOT_NAMES.into_iter().zip(slots.map(String::as_str))
    }
}

/// Generate a palette from a random dark background and a random light
/// foreground drawn from `rng`.
///
/// Background channels are in 0..=63 and foreground channels in 240..=255.
pub fn generate_palette_with<R: Rng + ?Sized>(rng: &mut R) -> Palette {
    let background = Srgb::from_bytes(
        rng.gen_range(0..=63),
        rng.gen_range(0..=63),
        rng.gen_range(0..=63),
    );
    let foreground = Srgb::from_bytes(
        rng.gen_range(240..=255),
        rng.gen_range(240..=255),
        rng.gen_range(240..=255),
    );

    tracing::debug!(
        background = %background.to_hex(),
        foreground = %foreground.to_hex(),
        "generating palette"
    );

    Palette::from_colors(&background, &foreground)
}

/// Generate a palette using the thread local random number generator.
pub fn generate_palette() -> Palette {
    generate_palette_with(&mut rand::thread_rng())
}
