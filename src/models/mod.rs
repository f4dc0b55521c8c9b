//! Models are structs that represent a color in a specified color space or
//! form. They represent a type safe way to convert between different color
//! spaces and forms.
//!
//! ```rust
//! use hueshift::models::{Luv, Srgb, SrgbLinear, ToXyz};
//! let lch = Luv::from(
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light()  // convert to srgb-linear.
//!         .to_xyz(),          // convert to xyz.
//! )
//! .to_polar();                // convert to lch.
//!
//! let hsluv = lch.to_hsluv();
//! let back = SrgbLinear::from(hsluv.to_lch().to_rectangular().to_xyz()).to_gamma_encoded();
//! assert!((back.blue - 1.0).abs() < 1.0e-9);
//! ```

pub mod hsluv;
pub mod luv;
pub mod rgb;
pub mod xyz;

pub use hsluv::Hsluv;
pub use luv::{Lch, Luv};
pub use rgb::{encoding, Rgb, Srgb, SrgbLinear};
pub use xyz::{lightness_to_y, y_to_lightness, ToXyz, Xyz};
