//! The conversion functions, as plain functions of three channels. These are the same conversions
//! the color types implement through `From<RGBColor>`; they exist so a caller holding loose channel
//! values (say, four bytes out of a pixel buffer) doesn't have to build an [`RGBColor`] first.
//!
//! Every function here is pure and total: channels are `u8`, so there's nothing to validate. The
//! one exception is [`hex_to_rgb`], which has to parse a string.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html

use crate::color::RGBColor;
use crate::colors::{CMYKColor, HSLColor, HexColor};
use crate::error::InvalidColorInput;
use crate::estimates::{ColorTemperature, DominantWavelength, Luminance};

/// Parses a `#RRGGBB` hex code (either case) into its channels.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// assert_eq!(tincture::hex_to_rgb("#FF0000"), Ok(RGBColor::new(255, 0, 0)));
/// assert!(tincture::hex_to_rgb("#FF00").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<RGBColor, InvalidColorInput> {
    HexColor::parse(hex).map(|code| code.to_rgb())
}

/// Writes the channels as an uppercase `#RRGGBB` hex code. Inverts [`hex_to_rgb`].
///
/// [`hex_to_rgb`]: fn.hex_to_rgb.html
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> HexColor {
    HexColor::from(RGBColor::new(r, g, b))
}

/// Converts the channels to HSL, rounded to whole degrees and percents.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> HSLColor {
    HSLColor::from(RGBColor::new(r, g, b))
}

/// Converts the channels to CMYK, rounded to whole percents.
pub fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> CMYKColor {
    CMYKColor::from(RGBColor::new(r, g, b))
}

/// Computes the unrounded relative luminance of the channels, between 0 and 1.
pub fn calculate_luminance(r: u8, g: u8, b: u8) -> Luminance {
    Luminance::from(RGBColor::new(r, g, b))
}

/// Computes the color temperature heuristic: the channel average times 100, rounded.
pub fn calculate_color_temperature(r: u8, g: u8, b: u8) -> ColorTemperature {
    ColorTemperature::from(RGBColor::new(r, g, b))
}

/// Computes the dominant wavelength heuristic: the channel average plus 400, rounded.
pub fn calculate_dominant_wavelength(r: u8, g: u8, b: u8) -> DominantWavelength {
    DominantWavelength::from(RGBColor::new(r, g, b))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_round_trip() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(3) {
                for b in (0..=255u8).step_by(2) {
                    let hex = rgb_to_hex(r, g, b);
                    assert_eq!(hex_to_rgb(hex.as_str()), Ok(RGBColor::new(r, g, b)));
                }
            }
        }
        // every value in every position, odd and even
        for x in 0..=255u8 {
            for &(r, g, b) in &[(x, 0, 0), (0, x, 0), (0, 0, x), (x, 255 - x, x)] {
                let hex = rgb_to_hex(r, g, b);
                assert_eq!(hex_to_rgb(hex.as_str()), Ok(RGBColor::new(r, g, b)));
            }
        }
    }

    #[test]
    fn test_red() {
        assert_eq!(rgb_to_hex(255, 0, 0).as_str(), "#FF0000");
        assert_eq!(rgb_to_hsl(255, 0, 0).to_string(), "0, 100%, 50%");
        assert_eq!(rgb_to_cmyk(255, 0, 0).to_string(), "0%, 100%, 100%, 0%");
    }

    #[test]
    fn test_green() {
        assert_eq!(rgb_to_hex(0, 255, 0).as_str(), "#00FF00");
        assert_eq!(rgb_to_hsl(0, 255, 0).to_string(), "120, 100%, 50%");
    }

    #[test]
    fn test_mid_gray() {
        assert_eq!(rgb_to_hex(128, 128, 128).as_str(), "#808080");
        assert_eq!(rgb_to_hsl(128, 128, 128).to_string(), "0, 0%, 50%");
        assert_eq!(rgb_to_cmyk(128, 128, 128).to_string(), "0%, 0%, 0%, 50%");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(rgb_to_cmyk(0, 0, 0), CMYKColor { c: 0, m: 0, y: 0, k: 100 });
        assert_eq!(rgb_to_cmyk(255, 255, 255), CMYKColor { c: 0, m: 0, y: 0, k: 0 });
        assert_eq!(calculate_luminance(0, 0, 0).value(), 0.0);
        assert!((calculate_luminance(255, 255, 255).value() - 1.0).abs() <= 1e-12);
        assert_eq!(calculate_color_temperature(255, 255, 255).kelvin(), 25500);
        assert_eq!(calculate_dominant_wavelength(255, 255, 255).nanometers(), 655);
    }

    #[test]
    fn test_functions_match_methods() {
        let rgb = RGBColor::new(200, 30, 90);
        assert_eq!(rgb_to_hex(200, 30, 90), rgb.to_hex());
        assert_eq!(rgb_to_hsl(200, 30, 90), rgb.to_hsl());
        assert_eq!(rgb_to_cmyk(200, 30, 90), rgb.to_cmyk());
        assert_eq!(calculate_luminance(200, 30, 90), rgb.luminance());
        assert_eq!(calculate_color_temperature(200, 30, 90), rgb.color_temperature());
        assert_eq!(calculate_dominant_wavelength(200, 30, 90), rgb.dominant_wavelength());
    }
}
