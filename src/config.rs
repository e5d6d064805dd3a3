//! Settings for turning a [`ColorReport`] into text. Everything has a default matching what a color
//! picker traditionally shows, and every field is optional when deserializing, so a front end can
//! load just the settings it cares about from whatever format it already uses.
//!
//! [`ColorReport`]: ../report/struct.ColorReport.html

/// How computed values are rendered for display and copying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Decimal places shown for luminance.
    pub luminance_decimals: usize,
    /// Label shown when no name can be found for a color.
    pub unknown_color_label: String,
}

/// The label used when a color has no name.
pub const UNKNOWN_COLOR_LABEL: &str = "Unknown Color";

impl Default for DisplayOptions {
    fn default() -> DisplayOptions {
        DisplayOptions {
            luminance_decimals: 2,
            unknown_color_label: UNKNOWN_COLOR_LABEL.to_string(),
        }
    }
}
