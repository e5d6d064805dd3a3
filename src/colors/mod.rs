//! This module contains the representations an [`RGBColor`] can be converted into. For convenience,
//! each main type is imported into this module's namespace directly.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod cielabcolor;
pub mod cmykcolor;
pub mod hexcolor;
pub mod hslcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hexcolor::HexColor;
pub use self::hslcolor::HSLColor;
