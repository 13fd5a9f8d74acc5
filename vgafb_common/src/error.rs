use std::fmt;

/// Which side of a colour pair an index was given for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColourRole {
    Foreground,
    Background,
}
impl fmt::Display for ColourRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColourRole::Foreground => f.write_str("foreground"),
            ColourRole::Background => f.write_str("background"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A colour index outside of `0..=7`.
    InvalidColourIndex { role: ColourRole, index: u32 },
    /// A ramp parameter outside of `0..=255`.
    InvalidRampParameter(u32),
    UnsupportedFontHeight(usize),
    FontSizeMismatch { expected: usize, actual: usize },
    InvalidScale(usize),
    InvalidTableName(String),
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColourIndex { role, index } => {
                write!(f, "{role} colour index {index} is out of range (expected 0..=7)")
            }
            Error::InvalidRampParameter(p) => {
                write!(f, "ramp parameter {p} is out of range (expected 0..=255)")
            }
            Error::UnsupportedFontHeight(height) => {
                write!(f, "unsupported font height {height} (expected 8 or 16)")
            }
            Error::FontSizeMismatch { expected, actual } => {
                write!(f, "font data is {actual} bytes, but 256 glyphs need exactly {expected}")
            }
            Error::InvalidScale(scale) => {
                write!(f, "row scale {scale} is out of range (expected 1..=4)")
            }
            Error::InvalidTableName(name) => {
                write!(f, "'{name}' is not a valid name for a generated constant")
            }
        }
    }
}
impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
