//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB), the space Tincture measures color
//! differences in. CIELAB has an L value for lightness and two opponent color axes, `a` (green to
//! magenta) and `b` (blue to yellow), arranged so that equal distances look roughly equally
//! different. RGB has no such property: two dark blues a few steps apart can look as different as
//! two greens twenty steps apart.
//!
//! Tincture's CIELAB is relative to the D65 white point, the white of sRGB, so no chromatic
//! adaptation is needed on the way in. Only the forward conversion is implemented.

use crate::color::RGBColor;

// the D65 white point, with Y normalized to 1
const D65_WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

// linear sRGB to XYZ, D65
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

// Undoes the sRGB transfer curve. Note the IEC threshold of 0.04045, not the 0.03928 of the
// luminance formula.
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// A color in the CIELAB color space, D65.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::colors::CIELABColor;
/// let white = CIELABColor::from(RGBColor::new(255, 255, 255));
/// assert!((white.l - 100.0).abs() < 1e-3);
/// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The lightness, from 0 for black to 100 for white.
    pub l: f64,
    /// The first opponent axis: negative is green, positive is magenta.
    pub a: f64,
    /// The second opponent axis: negative is blue, positive is yellow.
    pub b: f64,
}

impl CIELABColor {
    /// The squared Euclidean distance between two colors, the CIE76 color difference squared. Only
    /// good for ranking: take the square root for an actual Delta E.
    pub fn distance_squared(&self, other: &CIELABColor) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<RGBColor> for CIELABColor {
    fn from(rgb: RGBColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let f = |t: f64| {
            let delta: f64 = 6.0 / 29.0;
            if t <= delta.powi(3) {
                t / (3.0 * delta * delta) + 4.0 / 29.0
            } else {
                t.cbrt()
            }
        };
        let linear = [linearize(rgb.r), linearize(rgb.g), linearize(rgb.b)];
        let mut xyz = [0.0; 3];
        for (i, row) in SRGB_TO_XYZ.iter().enumerate() {
            let dot: f64 = row.iter().zip(linear.iter()).map(|(m, c)| m * c).sum();
            xyz[i] = f(dot / D65_WHITE[i]);
        }
        CIELABColor {
            l: 116.0 * xyz[1] - 16.0,
            a: 500.0 * (xyz[0] - xyz[1]),
            b: 200.0 * (xyz[1] - xyz[2]),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_black_and_white() {
        let black = CIELABColor::from(RGBColor::new(0, 0, 0));
        assert!(approx_eq!(f64, black.l, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, black.a, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, black.b, 0.0, epsilon = 1e-9));
        let white = CIELABColor::from(RGBColor::new(255, 255, 255));
        assert!(approx_eq!(f64, white.l, 100.0, epsilon = 1e-4));
        assert!(approx_eq!(f64, white.a, 0.0, epsilon = 1e-4));
        assert!(approx_eq!(f64, white.b, 0.0, epsilon = 1e-4));
    }

    #[test]
    fn test_grays_are_neutral() {
        for x in (0..=255u8).step_by(15) {
            let gray = CIELABColor::from(RGBColor::new(x, x, x));
            assert!(gray.a.abs() < 1e-3, "a = {} for {}", gray.a, x);
            assert!(gray.b.abs() < 1e-3, "b = {} for {}", gray.b, x);
        }
    }

    #[test]
    fn test_known_values() {
        // reference values from the usual sRGB D65 formulas
        let red = CIELABColor::from(RGBColor::new(255, 0, 0));
        assert!(approx_eq!(f64, red.l, 53.24, epsilon = 0.05));
        assert!(approx_eq!(f64, red.a, 80.09, epsilon = 0.05));
        assert!(approx_eq!(f64, red.b, 67.20, epsilon = 0.05));
        let blue = CIELABColor::from(RGBColor::new(0, 0, 255));
        assert!(approx_eq!(f64, blue.l, 32.30, epsilon = 0.05));
        assert!(approx_eq!(f64, blue.a, 79.19, epsilon = 0.05));
        assert!(approx_eq!(f64, blue.b, -107.86, epsilon = 0.05));
    }

    #[test]
    fn test_distance() {
        let red = CIELABColor::from(RGBColor::new(255, 0, 0));
        let also_red = CIELABColor::from(RGBColor::new(254, 1, 1));
        let blue = CIELABColor::from(RGBColor::new(0, 0, 255));
        assert!(approx_eq!(f64, red.distance_squared(&red), 0.0));
        assert!(approx_eq!(f64, red.distance_squared(&blue), blue.distance_squared(&red)));
        assert!(red.distance_squared(&also_red) < red.distance_squared(&blue));
    }
}
