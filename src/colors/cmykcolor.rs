//! This file implements the naive CMYK conversion: the subtractive complement of each RGB channel,
//! with as much of the shared darkness as possible pulled out into the key (black) component. No
//! ink model or profile is involved, so these numbers describe proportions, not what a printer
//! would actually lay down.

use std::fmt;

use crate::color::RGBColor;

/// A color in CMYK, each component rounded to a whole percent from 0 to 100.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CMYKColor {
    /// Cyan, in percent.
    pub c: u8,
    /// Magenta, in percent.
    pub m: u8,
    /// Yellow, in percent.
    pub y: u8,
    /// Key, the black component, in percent.
    pub k: u8,
}

fn percent(x: f64) -> u8 {
    (x * 100.0).round() as u8
}

impl From<RGBColor> for CMYKColor {
    fn from(rgb: RGBColor) -> CMYKColor {
        let c = 1.0 - f64::from(rgb.r) / 255.0;
        let m = 1.0 - f64::from(rgb.g) / 255.0;
        let y = 1.0 - f64::from(rgb.b) / 255.0;
        let k = c.min(m).min(y);
        // for pure black everything is key, and the rescaling below is 0/0
        let rescale = |x: f64| {
            let scaled = (x - k) / (1.0 - k);
            if scaled.is_nan() {
                0.0
            } else {
                scaled
            }
        };
        CMYKColor {
            c: percent(rescale(c)),
            m: percent(rescale(m)),
            y: percent(rescale(y)),
            k: percent(k),
        }
    }
}

/// Writes `c%, m%, y%, k%`, e.g. `0%, 100%, 100%, 0%`.
impl fmt::Display for CMYKColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%, {}%, {}%, {}%", self.c, self.m, self.y, self.k)
    }
}
