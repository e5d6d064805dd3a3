//! This module is about giving colors human names. None of the conversions in Tincture need a
//! name, and naming isn't even well-defined (is `#FF0001` "red"?), so it's modelled as a
//! capability, [`ColorNamer`], that a front end can plug whatever it likes into. Tincture ships one
//! namer, which picks the closest of the named HTML colors.
//!
//! The closest color is the one at the smallest Euclidean distance in CIELAB, not RGB. The two
//! disagree more often than you'd think: `#000033` is a hair away from black in RGB, but looks a
//! lot more like midnight blue, and CIELAB says so.

use std::error::Error;
use std::fmt;
use std::io;

use crate::color::RGBColor;
use crate::colors::{CIELABColor, HexColor};
use crate::error::InvalidColorInput;

/// Anything that can put a name to a color. Returns `None` if it has nothing to offer.
pub trait ColorNamer {
    /// Looks up a display name for the given hex code.
    fn name(&self, hex: &HexColor) -> Option<String>;
}

impl<F: Fn(&HexColor) -> Option<String>> ColorNamer for F {
    fn name(&self, hex: &HexColor) -> Option<String> {
        self(hex)
    }
}

/// Gets the name a namer gives a color, or `fallback` if it doesn't give one.
///
/// # Example
/// ```
/// # use tincture::prelude::*;
/// # use tincture::naming::{display_name, NearestColorNamer};
/// let namer = NearestColorNamer::new(vec![]);
/// let hex = RGBColor::new(1, 2, 3).to_hex();
/// assert_eq!(display_name(&namer, &hex, "Unknown Color"), "Unknown Color");
/// assert_eq!(display_name(NearestColorNamer::html(), &hex, "Unknown Color"), "black");
/// ```
pub fn display_name<N: ColorNamer + ?Sized>(namer: &N, hex: &HexColor, fallback: &str) -> String {
    namer.name(hex).unwrap_or_else(|| fallback.to_string())
}

/// A color with a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    /// The name, as it should be displayed.
    pub name: String,
    /// The color.
    pub rgb: RGBColor,
}

// a row of a color table: a name and a hex code
#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    hex: String,
}

/// Something went wrong reading a color table.
#[derive(Debug)]
pub enum NamingError {
    /// The table couldn't be read as CSV with `name` and `hex` columns.
    Csv(csv::Error),
    /// A row had a hex code that isn't one.
    MalformedEntry {
        /// The name on the offending row.
        name: String,
        /// Why its hex code was rejected.
        source: InvalidColorInput,
    },
}

impl fmt::Display for NamingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NamingError::Csv(ref e) => write!(f, "could not read color table: {}", e),
            NamingError::MalformedEntry { ref name, ref source } => {
                write!(f, "bad entry for {:?} in color table: {}", name, source)
            }
        }
    }
}

impl Error for NamingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            NamingError::Csv(ref e) => Some(e),
            NamingError::MalformedEntry { ref source, .. } => Some(source),
        }
    }
}

impl From<csv::Error> for NamingError {
    fn from(e: csv::Error) -> NamingError {
        NamingError::Csv(e)
    }
}

// the named HTML (CSS) colors, synonyms like aqua/cyan included
const HTML_COLORS_CSV: &str = include_str!("../data/html-colors.csv");

lazy_static! {
    // this table is supplied by us, so failing to read it is a bug
    static ref HTML_COLORS: NearestColorNamer =
        NearestColorNamer::from_csv(HTML_COLORS_CSV.as_bytes())
            .expect("built-in HTML color table is well-formed");
}

/// Names a color after the nearest entry in a table of named colors. When two entries are equally
/// close the earlier one wins, so put preferred synonyms first.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestColorNamer {
    colors: Vec<NamedColor>,
    // colors[i] in CIELAB
    labs: Vec<CIELABColor>,
}

impl NearestColorNamer {
    /// Builds a namer from a table of named colors. An empty table never names anything.
    pub fn new(colors: Vec<NamedColor>) -> NearestColorNamer {
        let labs = colors
            .iter()
            .map(|named| CIELABColor::from(named.rgb))
            .collect();
        NearestColorNamer { colors, labs }
    }

    /// Reads a table of named colors from CSV with a header row and `name` and `hex` columns, e.g.
    /// `red,#FF0000`.
    pub fn from_csv<R: io::Read>(reader: R) -> Result<NearestColorNamer, NamingError> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut colors = vec![];
        for result in reader.deserialize() {
            let record: Record = result?;
            let rgb = match RGBColor::from_hex_code(record.hex.trim()) {
                Ok(rgb) => rgb,
                Err(source) => {
                    return Err(NamingError::MalformedEntry {
                        name: record.name,
                        source,
                    })
                }
            };
            colors.push(NamedColor {
                name: record.name,
                rgb,
            });
        }
        Ok(NearestColorNamer::new(colors))
    }

    /// The built-in namer over the named HTML colors.
    pub fn html() -> &'static NearestColorNamer {
        &HTML_COLORS
    }

    /// The table this namer picks from.
    pub fn colors(&self) -> &[NamedColor] {
        &self.colors
    }

    /// Finds the entry closest to the given color in CIELAB, or `None` for an empty table.
    ///
    /// # Example
    /// ```
    /// # use tincture::prelude::*;
    /// # use tincture::naming::NearestColorNamer;
    /// let named = NearestColorNamer::html().nearest(RGBColor::new(0, 0, 0x33)).unwrap();
    /// assert_eq!(named.name, "midnightblue");
    /// ```
    pub fn nearest(&self, rgb: RGBColor) -> Option<&NamedColor> {
        let target = CIELABColor::from(rgb);
        let mut best: Option<(usize, f64)> = None;
        for (i, lab) in self.labs.iter().enumerate() {
            let dist = lab.distance_squared(&target);
            // strictly closer only, so the earlier of two equal entries stays
            match best {
                Some((_, best_dist)) if best_dist <= dist => {}
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| &self.colors[i])
    }
}

impl ColorNamer for NearestColorNamer {
    fn name(&self, hex: &HexColor) -> Option<String> {
        self.nearest(hex.to_rgb()).map(|named| named.name.clone())
    }
}
