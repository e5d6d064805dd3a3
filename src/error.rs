//! This module holds the single error kind of Tincture, [`InvalidColorInput`]. Every conversion in
//! the crate is total over well-formed input, so the only thing that can go wrong is being handed
//! something that isn't a color: a hex code with the wrong shape, or a channel that doesn't fit in
//! 8 bits.

use std::error::Error;
use std::fmt;

/// One of the three channels of an RGB color. Used to point at the offending component when a
/// channel is rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// Input that cannot be interpreted as a color. Collaborators are expected to surface this to the
/// user as a message; nothing in Tincture tries to recover from it.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidColorInput {
    /// The string does not have the form `#RRGGBB` with six hexadecimal digits.
    MalformedHex(String),
    /// The string is not three comma-separated numbers, optionally wrapped in `rgb(...)`.
    MalformedRgb(String),
    /// A channel lies outside of 0-255.
    ChannelOutOfRange {
        /// The channel that was rejected.
        channel: Channel,
        /// The value it was given.
        value: f64,
    },
    /// A channel has a fractional part, or isn't a finite number at all.
    NonIntegerChannel {
        /// The channel that was rejected.
        channel: Channel,
        /// The value it was given.
        value: f64,
    },
}

impl fmt::Display for InvalidColorInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InvalidColorInput::MalformedHex(ref input) => {
                write!(f, "invalid hex color {:?}: expected #RRGGBB", input)
            }
            InvalidColorInput::MalformedRgb(ref input) => {
                write!(f, "invalid RGB color {:?}: expected r, g, b", input)
            }
            InvalidColorInput::ChannelOutOfRange { channel, value } => {
                write!(f, "{} channel {} is outside of 0-255", channel, value)
            }
            InvalidColorInput::NonIntegerChannel { channel, value } => {
                write!(f, "{} channel {} is not an integer", channel, value)
            }
        }
    }
}

impl Error for InvalidColorInput {}
