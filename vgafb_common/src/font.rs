//! Raw VGA bitmap fonts.
//!
//! A raw font is 256 glyphs stored back to back. Each glyph is one byte per row, with the most
//! significant bit as the leftmost pixel. The renderer wants the data the other way around: one
//! 256-byte array per scan line, indexed by character, so that drawing a line of text only ever
//! touches a single array.

use crate::error::{Error, Result};

pub const GLYPH_COUNT: usize = 256;
pub const FONT_WIDTH: usize = 8;
pub const MAX_SCALE: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontGeometry {
    Vga8x8,
    Vga8x16,
}
impl FontGeometry {
    pub fn from_height(height: usize) -> Result<FontGeometry> {
        match height {
            8 => Ok(FontGeometry::Vga8x8),
            16 => Ok(FontGeometry::Vga8x16),
            _ => Err(Error::UnsupportedFontHeight(height)),
        }
    }

    pub fn height(self) -> usize {
        match self {
            FontGeometry::Vga8x8 => 8,
            FontGeometry::Vga8x16 => 16,
        }
    }

    /// Bytes taken by a single glyph.
    pub fn glyph_len(self) -> usize {
        (FONT_WIDTH * self.height()) / 8
    }

    /// Bytes taken by a whole font file.
    pub fn font_len(self) -> usize {
        self.glyph_len() * GLYPH_COUNT
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFont {
    geometry: FontGeometry,
    data: Vec<u8>,
}
impl RawFont {
    pub fn parse(data: &[u8], geometry: FontGeometry) -> Result<RawFont> {
        if data.len() != geometry.font_len() {
            return Err(Error::FontSizeMismatch {
                expected: geometry.font_len(),
                actual: data.len(),
            });
        }
        Ok(RawFont { geometry, data: data.to_vec() })
    }

    pub fn geometry(&self) -> FontGeometry {
        self.geometry
    }

    pub fn glyph(&self, ch: u8) -> &[u8] {
        let len = self.geometry.glyph_len();
        let start = ch as usize * len;
        &self.data[start..start + len]
    }
}

/// A font rearranged into scan lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontTable {
    rows: Vec<[u8; GLYPH_COUNT]>,
    scale: usize,
}
impl FontTable {
    /// Transposes a font, repeating every glyph row `scale` times.
    pub fn new(font: &RawFont, scale: usize) -> Result<FontTable> {
        if scale == 0 || scale > MAX_SCALE {
            return Err(Error::InvalidScale(scale));
        }

        let height = font.geometry().height();
        let mut rows = vec![[0u8; GLYPH_COUNT]; height * scale];
        for ch in 0..GLYPH_COUNT {
            let glyph = font.glyph(ch as u8);
            for (line, row) in rows.iter_mut().enumerate() {
                row[ch] = glyph[line / scale];
            }
        }
        Ok(FontTable { rows, scale })
    }

    pub fn rows(&self) -> &[[u8; GLYPH_COUNT]] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns the pixels of one glyph on one scan line.
    pub fn pixels(&self, ch: u8, line: usize) -> u8 {
        self.rows[line][ch as usize]
    }
}
