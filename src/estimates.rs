//! This module holds the scalar quantities Tincture derives from a color. Relative luminance is the
//! real thing, as defined for sRGB and used for contrast ratios. The other two are not: the color
//! temperature and dominant wavelength "estimates" are linear functions of the average channel
//! value and have nothing to do with blackbody radiation or the spectral locus. They're kept
//! exactly as they are because that's what a picker displays, not because they measure anything.

use std::fmt;

use crate::color::RGBColor;

/// Weights of the linearized red, green, and blue channels in relative luminance.
const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Below this (normalized) value the sRGB transfer function is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// The relative luminance of a color: its linear-light brightness, weighted for human perception
/// and scaled so black is 0 and white is 1. Kept unrounded; round when displaying.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// let red = RGBColor::new(255, 0, 0).luminance();
/// assert!((red.value() - 0.2126).abs() <= 1e-9);
/// assert_eq!(red.to_fixed(2), "0.21");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Luminance(pub f64);

// Undoes the sRGB gamma for one 8-bit channel.
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl Luminance {
    /// The luminance as a plain number between 0 and 1.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Formats the luminance with a fixed number of decimal places.
    pub fn to_fixed(self, decimals: usize) -> String {
        format!("{:.*}", decimals, self.0)
    }
}

impl From<RGBColor> for Luminance {
    fn from(rgb: RGBColor) -> Luminance {
        let linear = [linearize(rgb.r), linearize(rgb.g), linearize(rgb.b)];
        Luminance(
            LUMINANCE_WEIGHTS[0] * linear[0]
                + LUMINANCE_WEIGHTS[1] * linear[1]
                + LUMINANCE_WEIGHTS[2] * linear[2],
        )
    }
}

impl fmt::Display for Luminance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// The mean of the three channels, which both heuristics below are built on.
fn channel_mean(rgb: RGBColor) -> f64 {
    (f64::from(rgb.r) + f64::from(rgb.g) + f64::from(rgb.b)) / 3.0
}

/// A "color temperature" in Kelvin: one hundred times the average channel. Brighter colors get
/// higher numbers and that's all it means.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorTemperature(pub u32);

impl ColorTemperature {
    /// The estimate in Kelvin.
    pub fn kelvin(self) -> u32 {
        self.0
    }
}

impl From<RGBColor> for ColorTemperature {
    fn from(rgb: RGBColor) -> ColorTemperature {
        ColorTemperature((channel_mean(rgb) * 100.0).round() as u32)
    }
}

/// Writes the temperature with its unit, e.g. `8500K`.
impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}K", self.0)
    }
}

/// A "dominant wavelength" in nanometers: the average channel plus 400, so it always lands between
/// 400 and 655.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DominantWavelength(pub u32);

impl DominantWavelength {
    /// The estimate in nanometers.
    pub fn nanometers(self) -> u32 {
        self.0
    }
}

impl From<RGBColor> for DominantWavelength {
    fn from(rgb: RGBColor) -> DominantWavelength {
        DominantWavelength((channel_mean(rgb) + 400.0).round() as u32)
    }
}

/// Writes the wavelength with its unit, e.g. `485 nm`.
impl fmt::Display for DominantWavelength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} nm", self.0)
    }
}
