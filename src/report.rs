//! A [`ColorReport`] is everything Tincture knows about one color, computed in one go. A picker
//! that shows hex, RGB, HSL, CMYK and the estimates side by side should build one of these per
//! color change and render from it, rather than updating each displayed value on its own: that way
//! the fields can never disagree with each other.

use std::fmt;

use crate::color::RGBColor;
use crate::colors::{CMYKColor, HSLColor, HexColor};
use crate::config::DisplayOptions;
use crate::error::InvalidColorInput;
use crate::estimates::{ColorTemperature, DominantWavelength, Luminance};

/// One of the values shown for a color, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportField {
    /// The `#RRGGBB` hex code.
    Hex,
    /// The raw channels.
    Rgb,
    /// Hue, saturation and lightness.
    Hsl,
    /// Cyan, magenta, yellow and key.
    Cmyk,
    /// Relative luminance.
    Luminance,
    /// The color temperature estimate.
    Temperature,
    /// The dominant wavelength estimate.
    Wavelength,
}

/// All fields, in the order they're displayed.
pub static REPORT_FIELDS: [ReportField; 7] = [
    ReportField::Hex,
    ReportField::Rgb,
    ReportField::Hsl,
    ReportField::Cmyk,
    ReportField::Luminance,
    ReportField::Temperature,
    ReportField::Wavelength,
];

impl ReportField {
    /// The label the field is displayed under.
    pub fn label(self) -> &'static str {
        match self {
            ReportField::Hex => "Hex Code",
            ReportField::Rgb => "RGB",
            ReportField::Hsl => "HSL",
            ReportField::Cmyk => "CMYK",
            ReportField::Luminance => "Luminance",
            ReportField::Temperature => "Color Temperature",
            ReportField::Wavelength => "Dominant Wavelength",
        }
    }
}

/// Every representation and estimate of a single color.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// let report = ColorReport::from_hex("#ff0000").unwrap();
/// assert_eq!(report.field_text(ReportField::Hsl, &DisplayOptions::default()), "0, 100%, 50%");
/// assert_eq!(report.temperature.kelvin(), 8500);
/// println!("{}", report);
/// // prints
/// // Hex Code: #FF0000
/// // RGB: 255, 0, 0
/// // HSL: 0, 100%, 50%
/// // CMYK: 0%, 100%, 100%, 0%
/// // Luminance: 0.21
/// // Color Temperature: 8500K
/// // Dominant Wavelength: 485 nm
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReport {
    /// The hex code.
    pub hex: HexColor,
    /// The channels.
    pub rgb: RGBColor,
    /// The HSL conversion.
    pub hsl: HSLColor,
    /// The CMYK conversion.
    pub cmyk: CMYKColor,
    /// The relative luminance.
    pub luminance: Luminance,
    /// The color temperature estimate.
    pub temperature: ColorTemperature,
    /// The dominant wavelength estimate.
    pub wavelength: DominantWavelength,
}

impl ColorReport {
    /// Computes every value for the given color.
    pub fn from_rgb(rgb: RGBColor) -> ColorReport {
        ColorReport {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
            luminance: rgb.luminance(),
            temperature: rgb.color_temperature(),
            wavelength: rgb.dominant_wavelength(),
        }
    }

    /// Parses a `#RRGGBB` hex code and computes every value for it.
    pub fn from_hex(hex: &str) -> Result<ColorReport, InvalidColorInput> {
        RGBColor::from_hex_code(hex).map(ColorReport::from_rgb)
    }

    /// The text for a single field, without its label or unit: what a "copy" button puts on the
    /// clipboard.
    pub fn field_text(&self, field: ReportField, options: &DisplayOptions) -> String {
        match field {
            ReportField::Hex => self.hex.to_string(),
            ReportField::Rgb => self.rgb.to_string(),
            ReportField::Hsl => self.hsl.to_string(),
            ReportField::Cmyk => self.cmyk.to_string(),
            ReportField::Luminance => self.luminance.to_fixed(options.luminance_decimals),
            ReportField::Temperature => self.temperature.kelvin().to_string(),
            ReportField::Wavelength => self.wavelength.nanometers().to_string(),
        }
    }

    /// The labelled display line for a single field, units included.
    pub fn field_line(&self, field: ReportField, options: &DisplayOptions) -> String {
        let text = self.field_text(field, options);
        match field {
            ReportField::Temperature => format!("{}: {}K", field.label(), text),
            ReportField::Wavelength => format!("{}: {} nm", field.label(), text),
            _ => format!("{}: {}", field.label(), text),
        }
    }

    /// Renders every field, one labelled line each, in display order.
    pub fn render(&self, options: &DisplayOptions) -> Vec<String> {
        REPORT_FIELDS
            .iter()
            .map(|&field| self.field_line(field, options))
            .collect()
    }
}

impl From<RGBColor> for ColorReport {
    fn from(rgb: RGBColor) -> ColorReport {
        ColorReport::from_rgb(rgb)
    }
}

/// Renders with the default options, one field per line.
impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render(&DisplayOptions::default()).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::conversion::*;

    #[test]
    fn test_fields_agree_with_conversions() {
        let samples = [(0, 0, 0), (255, 255, 255), (255, 0, 0), (18, 52, 86), (250, 128, 114)];
        for &(r, g, b) in &samples {
            let report = ColorReport::from_rgb(RGBColor::new(r, g, b));
            assert_eq!(report.hex, rgb_to_hex(r, g, b));
            assert_eq!(report.rgb, RGBColor::new(r, g, b));
            assert_eq!(report.hsl, rgb_to_hsl(r, g, b));
            assert_eq!(report.cmyk, rgb_to_cmyk(r, g, b));
            assert_eq!(report.luminance, calculate_luminance(r, g, b));
            assert_eq!(report.temperature, calculate_color_temperature(r, g, b));
            assert_eq!(report.wavelength, calculate_dominant_wavelength(r, g, b));
            let converted: ColorReport = RGBColor::new(r, g, b).into();
            assert_eq!(converted, report);
        }
    }

    #[test]
    fn test_render() {
        let report = ColorReport::from_hex("#FF0000").unwrap();
        assert_eq!(
            report.to_string(),
            "Hex Code: #FF0000\n\
             RGB: 255, 0, 0\n\
             HSL: 0, 100%, 50%\n\
             CMYK: 0%, 100%, 100%, 0%\n\
             Luminance: 0.21\n\
             Color Temperature: 8500K\n\
             Dominant Wavelength: 485 nm"
        );
    }

    #[test]
    fn test_field_text() {
        let report = ColorReport::from_rgb(RGBColor::new(255, 255, 255));
        let options = DisplayOptions {
            luminance_decimals: 4,
            ..DisplayOptions::default()
        };
        assert_eq!(report.field_text(ReportField::Hex, &options), "#FFFFFF");
        assert_eq!(report.field_text(ReportField::Rgb, &options), "255, 255, 255");
        assert_eq!(report.field_text(ReportField::Hsl, &options), "0, 0%, 100%");
        assert_eq!(report.field_text(ReportField::Cmyk, &options), "0%, 0%, 0%, 0%");
        assert_eq!(report.field_text(ReportField::Luminance, &options), "1.0000");
        assert_eq!(report.field_text(ReportField::Temperature, &options), "25500");
        assert_eq!(report.field_text(ReportField::Wavelength, &options), "655");
        assert_eq!(report.render(&options).len(), REPORT_FIELDS.len());
    }

    #[test]
    fn test_bad_hex() {
        assert_eq!(
            ColorReport::from_hex("red"),
            Err(InvalidColorInput::MalformedHex("red".to_string()))
        );
    }
}
