use crate::debug::trimmed_collection_fmt;
use custom_debug::Debug;

/// Number of entries in a BLP color palette
pub const PALETTE_SIZE: usize = 256;

/// A single pixel, stored in the channel order BLP uses on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bgra {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel
    pub a: u8,
}

impl Bgra {
    /// Create a pixel from its four channels
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Interpret four bytes stored as blue, green, red, alpha
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Same pixel with the alpha channel replaced
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Channels in red, green, blue, alpha order, as raster writers expect them
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The 256-entry color table used by palettized content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Palette {
    #[debug(with = trimmed_collection_fmt)]
    colors: Box<[Bgra]>,
}

impl Palette {
    /// Build a palette from exactly 256 colors
    pub fn new(colors: [Bgra; PALETTE_SIZE]) -> Self {
        Self {
            colors: Box::new(colors),
        }
    }

    /// Look up the color for a palette index. Every `u8` is a valid index.
    pub fn color(&self, index: u8) -> Bgra {
        self.colors[index as usize]
    }

    /// All 256 colors in index order
    pub fn colors(&self) -> &[Bgra] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([Bgra::default(); PALETTE_SIZE])
    }
}
