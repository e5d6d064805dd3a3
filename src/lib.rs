//! Tincture takes a single picked color, the kind a color-swatch control or a sampled pixel gives
//! you, and describes it every way a color picker usually does: as a hex code, as RGB, HSL and
//! CMYK, and with a few derived numbers (relative luminance and two deliberately simple estimates
//! of color temperature and dominant wavelength). Everything is a pure function of three 8-bit
//! channels. There is no color management here: no profiles, no gamut mapping, no spectral data.
//!
//! The conversions are available both as free functions of loose channels, re-exported at the crate
//! root, and as methods on [`RGBColor`]. A [`ColorReport`] bundles all of them for one color.
//!
//! [`RGBColor`]: color/struct.RGBColor.html
//! [`ColorReport`]: report/struct.ColorReport.html

#![doc(html_root_url = "https://docs.rs/tincture/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde_derive;

pub mod color;
pub mod colors;
pub mod config;
pub mod conversion;
pub mod error;
pub mod estimates;
pub mod naming;
pub mod prelude;
pub mod report;

pub use crate::conversion::{
    calculate_color_temperature, calculate_dominant_wavelength, calculate_luminance, hex_to_rgb,
    rgb_to_cmyk, rgb_to_hex, rgb_to_hsl,
};
