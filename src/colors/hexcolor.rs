//! This file implements the hex code, the `#RRGGBB` notation HTML and every color picker under the
//! sun use. A hex code is nothing more than the three 8-bit channels of an RGB color written out as
//! one 24-bit big-endian number, so conversion in both directions is lossless. Tincture always
//! writes hex codes in uppercase, but reads them in either case.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::color::RGBColor;
use crate::error::InvalidColorInput;

lazy_static! {
    static ref HEX_CODE: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
}

/// A validated hex code: a `#` followed by exactly six uppercase hexadecimal digits.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// let orange: HexColor = "#ff8000".parse().unwrap();
/// assert_eq!(orange.as_str(), "#FF8000");
/// assert_eq!(orange.to_rgb(), RGBColor::new(255, 128, 0));
/// assert!("#ff800".parse::<HexColor>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validates a hex code of the form `#RRGGBB` and normalizes it to uppercase.
    pub fn parse(hex: &str) -> Result<HexColor, InvalidColorInput> {
        if !HEX_CODE.is_match(hex) {
            return Err(InvalidColorInput::MalformedHex(hex.to_string()));
        }
        Ok(HexColor(hex.to_ascii_uppercase()))
    }

    /// The hex code as a string slice, `#` included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the hex code back into its channels: red is bits 16-23 of the number, green bits
    /// 8-15 and blue bits 0-7.
    pub fn to_rgb(&self) -> RGBColor {
        // the code was validated on construction, so a failure here is a bug
        let bits =
            u32::from_str_radix(&self.0[1..], 16).expect("hex code validated on construction");
        RGBColor {
            r: ((bits >> 16) & 0xFF) as u8,
            g: ((bits >> 8) & 0xFF) as u8,
            b: (bits & 0xFF) as u8,
        }
    }
}

impl From<RGBColor> for HexColor {
    fn from(rgb: RGBColor) -> HexColor {
        HexColor(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }
}

impl From<HexColor> for RGBColor {
    fn from(hex: HexColor) -> RGBColor {
        hex.to_rgb()
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColorInput;

    fn try_from(hex: String) -> Result<HexColor, InvalidColorInput> {
        HexColor::parse(&hex)
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> String {
        hex.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = InvalidColorInput;

    fn from_str(s: &str) -> Result<HexColor, InvalidColorInput> {
        HexColor::parse(s)
    }
}
