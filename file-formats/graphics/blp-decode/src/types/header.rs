use super::locator::MipmapTable;
use super::pixel::Palette;
use super::version::BlpVersion;
use crate::debug::trimmed_collection_fmt;
use custom_debug::Debug;

/// Size of the fixed BLP1 header: magic, six `u32` fields and both mipmap tables
pub const BLP1_HEADER_SIZE: usize = 4 + 6 * 4 + 2 * 16 * 4;
/// Size of the fixed BLP2 header without its palette: magic, content type,
/// four flag bytes, width, height and both mipmap tables
pub const BLP2_HEADER_SIZE: usize = 4 + 4 + 4 + 2 * 4 + 2 * 16 * 4;
/// Size of an on-disk palette: 256 BGRA entries
pub const PALETTE_BYTES: usize = 256 * 4;

/// Content type value that marks JPEG compressed images in both versions
pub const CONTENT_JPEG: u32 = 0;

/// BLP2 compression byte values
pub mod compression {
    /// Palettized indices with optional separate alpha plane
    pub const PALETTIZED: u8 = 1;
    /// DXT1/DXT3/DXT5 blocks
    pub const DXTC: u8 = 2;
    /// Raw 32-bit BGRA pixels
    pub const RAW_BGRA: u8 = 3;
}

/// BLP2 alpha encoding byte values that select the DXT flavour at 8-bit alpha
pub mod alpha_encoding {
    /// DXT3 explicit alpha
    pub const DXT3: u8 = 1;
    /// DXT5 interpolated alpha
    pub const DXT5: u8 = 7;
    /// BLP1 alpha encoding value that reuses the palette alpha channel
    pub const BLP1_PALETTE_ALPHA: u32 = 5;
}

/// Fixed header of a `BLP1` file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Blp1Header {
    /// 0 for JPEG content, anything else for palettized content
    pub content: u32,
    /// Alpha flags; bit 3 signals an 8-bit alpha channel
    pub flags: u32,
    /// Width of the base level in pixels
    pub width: u32,
    /// Height of the base level in pixels
    pub height: u32,
    /// Selects how 8-bit alpha is stored (5 = inverted palette alpha)
    pub alpha_encoding: u32,
    /// Non-zero when the file carries mipmaps
    pub has_mipmaps: u32,
    /// Mipmap offset/size tables
    pub mipmaps: MipmapTable,
}

impl Blp1Header {
    /// Whether the alpha flag bit is set
    pub fn has_alpha(&self) -> bool {
        self.flags & 0x8 != 0
    }
}

/// Fixed header of a `BLP2` file (the inline palette is kept in [`HeaderExtension`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Blp2Header {
    /// 0 for JPEG content, 1 for direct content
    pub content: u32,
    /// Compression of direct content, see [`compression`]
    pub compression: u8,
    /// Alpha bit depth: 0, 1, 4 or 8
    pub alpha_bits: u8,
    /// Alpha encoding, distinguishes DXT3 from DXT5
    pub alpha_encoding: u8,
    /// Non-zero when the file carries mipmaps
    pub has_mipmaps: u8,
    /// Width of the base level in pixels
    pub width: u32,
    /// Height of the base level in pixels
    pub height: u32,
    /// Mipmap offset/size tables
    pub mipmaps: MipmapTable,
}

impl Blp2Header {
    /// Whether the inline palette is meaningful for this header
    pub fn is_palettized(&self) -> bool {
        self.content != CONTENT_JPEG && self.compression == compression::PALETTIZED
    }
}

/// Header of either container sub-version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlpHeader {
    /// `BLP1` header
    Blp1(Blp1Header),
    /// `BLP2` header
    Blp2(Blp2Header),
}

impl BlpHeader {
    /// Sub-version of the container
    pub fn version(&self) -> BlpVersion {
        match self {
            Self::Blp1(_) => BlpVersion::Blp1,
            Self::Blp2(_) => BlpVersion::Blp2,
        }
    }

    /// Width of the base level
    pub fn width(&self) -> u32 {
        match self {
            Self::Blp1(h) => h.width,
            Self::Blp2(h) => h.width,
        }
    }

    /// Height of the base level
    pub fn height(&self) -> u32 {
        match self {
            Self::Blp1(h) => h.height,
            Self::Blp2(h) => h.height,
        }
    }

    /// Mipmap offset/size tables
    pub fn mipmaps(&self) -> &MipmapTable {
        match self {
            Self::Blp1(h) => &h.mipmaps,
            Self::Blp2(h) => &h.mipmaps,
        }
    }

    /// Whether the header signals JPEG content
    pub fn is_jpeg(&self) -> bool {
        match self {
            Self::Blp1(h) => h.content == CONTENT_JPEG,
            Self::Blp2(h) => h.content == CONTENT_JPEG,
        }
    }

    /// Size of the fixed header for this version, excluding anything that follows it
    pub fn size(version: BlpVersion) -> usize {
        match version {
            BlpVersion::Blp1 => BLP1_HEADER_SIZE,
            BlpVersion::Blp2 => BLP2_HEADER_SIZE,
        }
    }
}

/// Data stored alongside the fixed header. Which variant is present depends
/// only on the header's encoding fields and sub-version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum HeaderExtension {
    /// Color table for palettized content
    Palette(Palette),
    /// Shared JPEG header prepended to every mipmap payload (BLP1 JPEG only)
    JpegHeader(#[debug(with = trimmed_collection_fmt)] Vec<u8>),
    /// Nothing beyond the fixed header is needed to decode
    #[default]
    Empty,
}
