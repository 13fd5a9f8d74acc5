//! Lookup table generation for a 3-bit RGB text mode frame buffer.
//!
//! Each text cell has a foreground and a background colour drawn from eight fixed colours. The
//! renderer does not mix colours at draw time. Instead it indexes a precomputed table by
//! `[fg][bg][p]`, where `p` is an 8-bit ramp position, and writes the resulting `0x00RRGGBB`
//! word straight out. This crate computes those tables, rearranges raw bitmap fonts into the
//! scan line order the renderer reads them in, and renders both as source literals.
//!
//! ```
//! use vgafb_common::{Colour, TableSet};
//!
//! let tables = TableSet::generate();
//! assert_eq!(tables.get(Colour::White, Colour::Black).get(0x80), 0x808080);
//! ```

mod blend;
mod codegen;
mod colour;
mod error;
mod font;

pub use crate::{
    blend::{calc_bit, ramp_parameter, Blend, BlendTable, Rgb, TableSet, PAIR_COUNT, RAMP_LEN},
    codegen::{font_table_source, rgb_maps_source, TableLayout},
    colour::{Channel, Colour},
    error::{ColourRole, Error, Result},
    font::{FontGeometry, FontTable, RawFont, FONT_WIDTH, GLYPH_COUNT, MAX_SCALE},
};
