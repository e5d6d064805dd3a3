//! This file defines [`RGBColor`], the color every other representation in Tincture is derived
//! from. An `RGBColor` is exactly what a color picker or a decoded pixel buffer hands you: three
//! 8-bit channels. Because the channels are `u8`, an `RGBColor` is always in range; the only place
//! range checking happens is [`RGBColor::try_from_channels`] and the string parsers, which accept
//! wider input.

use std::fmt;
use std::str::FromStr;

use num::ToPrimitive;
use regex::Regex;

use crate::colors::{CMYKColor, HSLColor, HexColor};
use crate::error::{Channel, InvalidColorInput};
use crate::estimates::{ColorTemperature, DominantWavelength, Luminance};

/// A color in 8-bit-per-channel sRGB.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// let teal = RGBColor::new(0, 128, 128);
/// assert_eq!(teal.to_hex().to_string(), "#008080");
/// assert_eq!(teal.to_hsl().to_string(), "180, 100%, 25%");
/// assert_eq!(teal.to_string(), "0, 128, 128");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

lazy_static! {
    // three unsigned decimal numbers separated by commas; no signs, no exponents
    static ref RGB_CHANNELS: Regex =
        Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*$")
            .unwrap();
}

// Checks a single channel given as any primitive number, integral or not.
fn checked_channel<T: ToPrimitive>(channel: Channel, value: T) -> Result<u8, InvalidColorInput> {
    // every primitive converts to f64, if lossily for huge integers, which are out of range anyway
    let value = value.to_f64().unwrap_or(f64::NAN);
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InvalidColorInput::NonIntegerChannel { channel, value });
    }
    if value < 0.0 || value > 255.0 {
        return Err(InvalidColorInput::ChannelOutOfRange { channel, value });
    }
    Ok(value as u8)
}

impl RGBColor {
    /// Builds a color from three 8-bit channels.
    pub fn new(r: u8, g: u8, b: u8) -> RGBColor {
        RGBColor { r, g, b }
    }

    /// Builds a color from channels of any primitive numeric type, rejecting anything that isn't an
    /// integer between 0 and 255. Channels are checked in order red, green, blue, and the first bad
    /// one is reported.
    ///
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// assert_eq!(RGBColor::try_from_channels(12, 34, 56), Ok(RGBColor::new(12, 34, 56)));
    /// assert!(RGBColor::try_from_channels(12, 340, 56).is_err());
    /// assert!(RGBColor::try_from_channels(12.0, 34.5, 56.0).is_err());
    /// ```
    pub fn try_from_channels<T: ToPrimitive>(
        r: T,
        g: T,
        b: T,
    ) -> Result<RGBColor, InvalidColorInput> {
        Ok(RGBColor {
            r: checked_channel(Channel::Red, r)?,
            g: checked_channel(Channel::Green, g)?,
            b: checked_channel(Channel::Blue, b)?,
        })
    }

    /// Parses a hex code of the form `#RRGGBB`, in either letter case.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, InvalidColorInput> {
        hex.parse::<HexColor>().map(|code| code.to_rgb())
    }

    /// The channels as an array, in the order red, green, blue.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Gets the `#RRGGBB` hex code of this color.
    pub fn to_hex(&self) -> HexColor {
        HexColor::from(*self)
    }

    /// Converts to HSL, rounded to whole degrees and percents.
    pub fn to_hsl(&self) -> HSLColor {
        HSLColor::from(*self)
    }

    /// Converts to CMYK, rounded to whole percents.
    pub fn to_cmyk(&self) -> CMYKColor {
        CMYKColor::from(*self)
    }

    /// Gets the relative luminance of this color.
    pub fn luminance(&self) -> Luminance {
        Luminance::from(*self)
    }

    /// Gets the (very rough) color temperature estimate of this color.
    pub fn color_temperature(&self) -> ColorTemperature {
        ColorTemperature::from(*self)
    }

    /// Gets the (very rough) dominant wavelength estimate of this color.
    pub fn dominant_wavelength(&self) -> DominantWavelength {
        DominantWavelength::from(*self)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor::new(rgb.0, rgb.1, rgb.2)
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from(rgb: [u8; 3]) -> RGBColor {
        RGBColor::new(rgb[0], rgb[1], rgb[2])
    }
}

/// Writes the channels as `r, g, b`, the way a picker shows them.
impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Parses `r, g, b` or the CSS functional form `rgb(r, g, b)`. Unlike CSS, percentages and clamping
/// aren't supported: each channel has to be an integer from 0 to 255, written as plain digits. A
/// channel like `12.5` is read, then rejected as not an integer; `+5` or `1e2` is just malformed.
impl FromStr for RGBColor {
    type Err = InvalidColorInput;

    fn from_str(s: &str) -> Result<RGBColor, InvalidColorInput> {
        let malformed = || InvalidColorInput::MalformedRgb(s.to_string());
        let trimmed = s.trim();
        let inner = if trimmed.starts_with("rgb(") {
            if !trimmed.ends_with(')') {
                return Err(malformed());
            }
            &trimmed[4..trimmed.len() - 1]
        } else {
            trimmed
        };

        let caps = RGB_CHANNELS.captures(inner).ok_or_else(malformed)?;
        let mut nums = [0.0; 3];
        for (i, num) in nums.iter_mut().enumerate() {
            *num = caps[i + 1].parse::<f64>().map_err(|_| malformed())?;
        }
        RGBColor::try_from_channels(nums[0], nums[1], nums[2])
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_checked_channels() {
        assert_eq!(RGBColor::try_from_channels(0u32, 128, 255), Ok(RGBColor::new(0, 128, 255)));
        assert_eq!(RGBColor::try_from_channels(1.0f32, 2.0, 3.0), Ok(RGBColor::new(1, 2, 3)));
        assert_eq!(
            RGBColor::try_from_channels(-1i64, 0, 0),
            Err(InvalidColorInput::ChannelOutOfRange {
                channel: Channel::Red,
                value: -1.0,
            })
        );
        assert_eq!(
            RGBColor::try_from_channels(0, 0, 256),
            Err(InvalidColorInput::ChannelOutOfRange {
                channel: Channel::Blue,
                value: 256.0,
            })
        );
        assert_eq!(
            RGBColor::try_from_channels(0.0, 127.5, 0.0),
            Err(InvalidColorInput::NonIntegerChannel {
                channel: Channel::Green,
                value: 127.5,
            })
        );
        // NaN never compares equal, so just check the kind
        match RGBColor::try_from_channels(f64::NAN, 0.0, 0.0) {
            Err(InvalidColorInput::NonIntegerChannel { channel, .. }) => {
                assert_eq!(channel, Channel::Red)
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(RGBColor::try_from_channels(f64::INFINITY, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_rgb_string_parsing() {
        let red: RGBColor = "255, 0, 0".parse().unwrap();
        assert_eq!(red, RGBColor::new(255, 0, 0));
        let gray: RGBColor = "rgb(128,128, 128)".parse().unwrap();
        assert_eq!(gray, RGBColor::new(128, 128, 128));
        // display and parse agree
        let color = RGBColor::new(17, 34, 51);
        assert_eq!(color.to_string().parse::<RGBColor>().unwrap(), color);
        // test errors
        assert_eq!(
            "1, 2".parse::<RGBColor>(),
            Err(InvalidColorInput::MalformedRgb("1, 2".to_string()))
        );
        assert!("rgb(1, 2, 3".parse::<RGBColor>().is_err());
        assert!("1, 2, 3, 4".parse::<RGBColor>().is_err());
        assert!("red, 2, 3".parse::<RGBColor>().is_err());
        assert!("1, 2, 300".parse::<RGBColor>().is_err());
        assert_eq!(
            "1, 2.5, 3".parse::<RGBColor>(),
            Err(InvalidColorInput::NonIntegerChannel {
                channel: Channel::Green,
                value: 2.5,
            })
        );
    }

    #[test]
    fn test_rgb_string_strictness() {
        // things f64 parsing would let through
        for bad in &["1e2, 0, 0", "+5, 0, 0", "-1, 0, 0", "0, inf, 0", "0, NaN, 0", "0, .5, 0"] {
            assert_eq!(
                bad.parse::<RGBColor>(),
                Err(InvalidColorInput::MalformedRgb(bad.to_string()))
            );
        }
        assert!("1,,2, 3".parse::<RGBColor>().is_err());
        assert!("rgb(1, 2, 3))".parse::<RGBColor>().is_err());
        // whitespace is fine anywhere between the numbers
        assert_eq!(" rgb( 1 ,2,  3 ) ".parse::<RGBColor>(), Ok(RGBColor::new(1, 2, 3)));
        assert_eq!("007, 0, 0".parse::<RGBColor>(), Ok(RGBColor::new(7, 0, 0)));
    }

    #[test]
    fn test_from_arrays_and_tuples() {
        let color = RGBColor::new(10, 20, 30);
        assert_eq!(RGBColor::from((10, 20, 30)), color);
        assert_eq!(RGBColor::from([10, 20, 30]), color);
        assert_eq!(RGBColor::from(color.channels()), color);
        let from_tuple: RGBColor = (255u8, 0u8, 0u8).into();
        assert_eq!(from_tuple.to_hex().as_str(), "#FF0000");
    }

    #[test]
    fn test_hex_code() {
        assert_eq!(RGBColor::from_hex_code("#FF8000"), Ok(RGBColor::new(255, 128, 0)));
        assert_eq!(RGBColor::from_hex_code("#ff8000"), Ok(RGBColor::new(255, 128, 0)));
        assert!(RGBColor::from_hex_code("FF8000").is_err());
        assert_eq!(RGBColor::new(255, 128, 0).to_hex().as_str(), "#FF8000");
    }
}
