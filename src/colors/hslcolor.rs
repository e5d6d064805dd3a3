//! This file implements HSL, the hue-saturation-lightness transformation of sRGB that most color
//! pickers show next to the hex code. HSL has all of the perceptual problems of sRGB itself, but it
//! does describe colors in terms people recognize. Lightness runs from black through the fully
//! saturated color in the middle to white at the top, which makes the space a "bi-hexcone" rather
//! than a cylinder: the hue is found on a hexagon and then simply read off as degrees.
//!
//! Two implementation notes. First, gray has no meaningful hue, and Tincture reports 0 degrees for
//! it. Second, when two channels tie for the largest value, the hue is computed by the branch of
//! the first of them in the order red, green, blue. A tie puts the color on a hexagon vertex, where
//! the tied branches give the same answer anyway.

use std::fmt;

use crate::color::RGBColor;

/// A color in HSL, rounded to whole units for display: hue in degrees, saturation and lightness in
/// percent.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// let steel = RGBColor::new(51, 102, 153).to_hsl();
/// assert_eq!((steel.h, steel.s, steel.l), (210, 50, 40));
/// assert_eq!(steel.to_string(), "210, 50%, 40%");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, in whole degrees. Ranges from 0 to 360: colors just short of a full turn on the red
    /// side round up to 360 rather than wrapping to 0.
    pub h: u16,
    /// The saturation, in whole percent from 0 to 100.
    pub s: u8,
    /// The lightness, in whole percent from 0 to 100. Defined as the average of the largest and
    /// smallest channels.
    pub l: u8,
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        let (hue, saturation) = if max_c == min_c {
            // gray: hue could be anything, so just use 0
            (0.0, 0.0)
        } else {
            let chroma = max_c - min_c;
            let saturation = if lightness > 0.5 {
                chroma / (2.0 - max_c - min_c)
            } else {
                chroma / (max_c + min_c)
            };
            // which sixth of the hexagon we're in depends on the largest channel, checked in
            // red, green, blue order so ties always go to the earlier channel
            let sixths = if max_c == r {
                (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
            } else if max_c == g {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            };
            (sixths / 6.0, saturation)
        };

        HSLColor {
            h: (hue * 360.0).round() as u16,
            s: (saturation * 100.0).round() as u8,
            l: (lightness * 100.0).round() as u8,
        }
    }
}

/// Writes `h, s%, l%`, e.g. `0, 100%, 50%`.
impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}%, {}%", self.h, self.s, self.l)
    }
}
