//! hueshift converts colors between sRGB, CIE-XYZ, CIE-LUV, CIE-LCh(uv) and
//! HSLuv, and derives palettes by adjusting colors in HSLuv where equal steps
//! look like equal changes.
//!
//! ```rust
//! use hueshift::{blend_hex, gradient_n, lighten_hex, Palette};
//!
//! assert_eq!(blend_hex("#161616", "#ffffff", 0.5)?, "#808080");
//! assert_eq!(lighten_hex("#ff0000", 0.3)?, "#ff7b7b");
//! assert_eq!(gradient_n("#000000", "#ffffff", 1)?, ["#000000", "#777777", "#ffffff"]);
//!
//! let palette = Palette::from_seeds("#161616", "#ffffff")?;
//! assert_eq!(palette.get("base03"), Some("#525252"));
//! # Ok::<(), hueshift::Error>(())
//! ```

#![deny(missing_docs)]


mod adjust;
mod color;
mod error;
pub mod gamut;
mod gradient;
mod hex;
pub mod interpolate;
mod math;
pub mod models;
mod palette;

pub use adjust::{
    blend_hex, darken_hex, desaturate_hex, lighten_hex, mix_hex, rotate_hex, saturate_hex,
    DEFAULT_BLEND_RATIO,
};
pub use color::{Component, Components};
pub use error::{Error, Result};
pub use gradient::{gradient, gradient_n};
pub use hex::{hex_to_hsluv, hex_to_rgb, hsluv_to_hex, rgb_to_hex};
pub use math::normalize_hue;
pub use models::{Hsluv, Lch, Luv, Srgb, SrgbLinear, Xyz};
pub use palette::{generate_palette, generate_palette_with, Palette, RAMP, SLOT_NAMES};
