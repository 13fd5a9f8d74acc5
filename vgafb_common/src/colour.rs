use crate::error::{ColourRole, Error, Result};
use std::fmt;

/// One of the eight colours a text cell can use.
///
/// The discriminant is the 3-bit RGB pattern the frame buffer stores: bit 2
/// is red, bit 1 is green and bit 0 is blue.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Colour {
    Black = 0b000,
    Blue = 0b001,
    Green = 0b010,
    Cyan = 0b011,
    Red = 0b100,
    Magenta = 0b101,
    Yellow = 0b110,
    White = 0b111,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}
impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    fn shift(self) -> u8 {
        match self {
            Channel::Red => 2,
            Channel::Green => 1,
            Channel::Blue => 0,
        }
    }
}

impl Colour {
    /// All colours, in bit pattern order.
    pub const ALL: [Colour; 8] = [
        Colour::Black,
        Colour::Blue,
        Colour::Green,
        Colour::Cyan,
        Colour::Red,
        Colour::Magenta,
        Colour::Yellow,
        Colour::White,
    ];

    /// Looks up a colour by its 3-bit pattern.
    pub fn from_index(role: ColourRole, index: u32) -> Result<Colour> {
        match Colour::ALL.get(index as usize) {
            Some(colour) => Ok(*colour),
            None => Err(Error::InvalidColourIndex { role, index }),
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the given channel is lit in this colour.
    pub fn has_channel(self, channel: Channel) -> bool {
        (self.index() >> channel.shift()) & 1 != 0
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::Black => "black",
            Colour::Blue => "blue",
            Colour::Green => "green",
            Colour::Cyan => "cyan",
            Colour::Red => "red",
            Colour::Magenta => "magenta",
            Colour::Yellow => "yellow",
            Colour::White => "white",
        }
    }
}
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn channel_bits() {
        assert!(Colour::Red.has_channel(Channel::Red));
        assert!(!Colour::Red.has_channel(Channel::Green));
        assert!(!Colour::Red.has_channel(Channel::Blue));
        assert!(Colour::Cyan.has_channel(Channel::Green));
        assert!(Colour::Cyan.has_channel(Channel::Blue));
        for channel in Channel::ALL {
            assert!(Colour::White.has_channel(channel));
            assert!(!Colour::Black.has_channel(channel));
        }
    }

    #[test]
    fn index_round_trips() {
        for (i, colour) in Colour::ALL.iter().enumerate() {
            assert_eq!(colour.index() as usize, i);
            assert_eq!(Colour::from_index(ColourRole::Foreground, i as u32), Ok(*colour));
        }
        assert_eq!(
            Colour::from_index(ColourRole::Background, 8),
            Err(Error::InvalidColourIndex { role: ColourRole::Background, index: 8 })
        );
    }
}
