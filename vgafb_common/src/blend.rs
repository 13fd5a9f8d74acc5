use crate::{
    colour::{Channel, Colour},
    error::{ColourRole, Error, Result},
};

/// Number of entries in each blend table, one per ramp position.
pub const RAMP_LEN: usize = 256;

/// Number of (foreground, background) pairs in a table set.
pub const PAIR_COUNT: usize = 64;

/// Computes one channel's intensity at ramp position `p`.
///
/// A channel lit in both colours is always full, one lit in neither is always off. Otherwise the
/// ramp runs towards whichever side has the channel lit.
pub fn calc_bit(fg: bool, bg: bool, p: u8) -> u8 {
    match (fg, bg) {
        (true, true) => 0xFF,
        (true, false) => p,
        (false, true) => !p,
        (false, false) => 0,
    }
}

/// Checks a ramp position coming from outside the generator.
pub fn ramp_parameter(value: u32) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidRampParameter(value))
}

/// A single 24-bit pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Packs the pixel as `0x00RRGGBB`.
    pub const fn to_word(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn from_word(word: u32) -> Self {
        Rgb::new((word >> 16) as u8, (word >> 8) as u8, word as u8)
    }

    fn channel(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }
}

/// The blend function for one colour pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Blend {
    pub fg: Colour,
    pub bg: Colour,
}
impl Blend {
    pub fn new(fg: Colour, bg: Colour) -> Self {
        Blend { fg, bg }
    }

    /// Builds a blend from raw 3-bit colour indices.
    pub fn from_indices(fg: u32, bg: u32) -> Result<Self> {
        Ok(Blend {
            fg: Colour::from_index(ColourRole::Foreground, fg)?,
            bg: Colour::from_index(ColourRole::Background, bg)?,
        })
    }

    pub fn blend(&self, p: u8) -> Rgb {
        let mut rgb = Rgb::default();
        for channel in Channel::ALL {
            *rgb.channel(channel) =
                calc_bit(self.fg.has_channel(channel), self.bg.has_channel(channel), p);
        }
        rgb
    }

    pub fn table(&self) -> BlendTable {
        let mut words = [0u32; RAMP_LEN];
        for (p, word) in words.iter_mut().enumerate() {
            *word = self.blend(p as u8).to_word();
        }
        BlendTable { blend: *self, words }
    }
}

/// Every ramp position of one colour pair, packed as `0x00RRGGBB`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlendTable {
    blend: Blend,
    words: [u32; RAMP_LEN],
}
impl BlendTable {
    pub fn blend(&self) -> Blend {
        self.blend
    }
    pub fn get(&self, p: u8) -> u32 {
        self.words[p as usize]
    }
    pub fn words(&self) -> &[u32; RAMP_LEN] {
        &self.words
    }
}

/// The blend tables for all 64 colour pairs, foreground major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSet {
    tables: Vec<BlendTable>,
}
impl TableSet {
    pub fn generate() -> Self {
        let mut tables = Vec::with_capacity(PAIR_COUNT);
        for fg in Colour::ALL {
            for bg in Colour::ALL {
                tables.push(Blend::new(fg, bg).table());
            }
        }
        TableSet { tables }
    }

    pub fn get(&self, fg: Colour, bg: Colour) -> &BlendTable {
        &self.tables[fg.index() as usize * Colour::ALL.len() + bg.index() as usize]
    }

    /// Looks up `table[fg][bg][p]` using unchecked outside indices.
    pub fn lookup(&self, fg: u32, bg: u32, p: u32) -> Result<u32> {
        let blend = Blend::from_indices(fg, bg)?;
        let p = ramp_parameter(p)?;
        Ok(self.get(blend.fg, blend.bg).get(p))
    }

    pub fn tables(&self) -> &[BlendTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
