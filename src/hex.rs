//! Encoding and decoding of `#rrggbb` hex colors.
//!
//! Decoding is case-insensitive and validated. Encoding always produces six
//! lowercase digits; each channel is rounded half-up and saturated into the
//! 0..=255 range, so out-of-gamut colors encode as the nearest byte values.

use std::str::FromStr;

use crate::{
    color::Component,
    error::{Error, Result},
    models::{Hsluv, Srgb},
};

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn encode_channel(value: Component) -> u8 {
    // Float to int casts saturate, and NaN becomes 0.
    (value * 255.0 + 0.5).floor() as u8
}

impl Srgb {
    /// Decode a color from the `#rrggbb` form.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            tracing::trace!(input, "rejected hex color with invalid format");
            return Err(Error::InvalidHexFormat(input.to_owned()));
        }

        let mut channels = [0u8; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            let index = 1 + i * 2;
            let digit = |index: usize| {
                hex_digit(bytes[index]).ok_or_else(|| {
                    tracing::trace!(input, index, "rejected hex color with invalid digit");
                    Error::InvalidHexDigit {
                        input: input.to_owned(),
                        index,
                    }
                })
            };
            *channel = digit(index)? * 16 + digit(index + 1)?;
        }

        let [red, green, blue] = channels;
        Ok(Self::from_bytes(red, green, blue))
    }

    /// Encode this color in the `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            encode_channel(self.red),
            encode_channel(self.green),
            encode_channel(self.blue)
        )
    }
}

impl FromStr for Srgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Decode a `#rrggbb` color into sRGB components in [0, 1].
pub fn hex_to_rgb(hex: &str) -> Result<Srgb> {
    Srgb::from_hex(hex)
}

/// Encode sRGB components as a lowercase `#rrggbb` color.
pub fn rgb_to_hex(rgb: &Srgb) -> String {
    rgb.to_hex()
}

/// Decode a `#rrggbb` color into HSLuv.
pub fn hex_to_hsluv(hex: &str) -> Result<Hsluv> {
    Ok(Srgb::from_hex(hex)?.to_hsluv())
}

/// Encode an HSLuv color as a lowercase `#rrggbb` color.
pub fn hsluv_to_hex(hsluv: &Hsluv) -> String {
    hsluv.to_srgb().to_hex()
}
