//! This module simply brings the most common Tincture functionality under a single namespace, to
//! prevent excessive imports: every color type, the estimates, the report, its options, and the
//! error. The naming machinery is left out, as most callers never touch it.

pub use crate::color::RGBColor;
pub use crate::colors::{CMYKColor, HSLColor, HexColor};
pub use crate::config::DisplayOptions;
pub use crate::error::{Channel, InvalidColorInput};
pub use crate::estimates::{ColorTemperature, DominantWavelength, Luminance};
pub use crate::report::{ColorReport, ReportField};
