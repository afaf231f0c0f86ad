use super::bitmap::BgraImage;
use super::format::BlpFormat;
use super::header::{BlpHeader, HeaderExtension};
use super::pixel::Palette;
use super::version::BlpVersion;
use crate::convert;
use crate::debug::trimmed_collection_fmt;
use crate::parser::{self, ParseResult};
use ::image::DynamicImage;
use custom_debug::Debug;

/// Parsed description of a BLP file.
///
/// The descriptor never holds the file bytes: mipmap payloads are addressed by
/// offset and size, so the same input buffer has to be passed to every decode
/// call made with this descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlpDescriptor {
    /// Fixed header of the file
    pub header: BlpHeader,
    /// Palette or JPEG header that follows (or is part of) the fixed header
    pub extension: HeaderExtension,
}

/// Location and size of one stored mipmap level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipmapInfo {
    /// Mipmap level, 0 is the full size image
    pub level: usize,
    /// Width of the level in pixels
    pub width: u32,
    /// Height of the level in pixels
    pub height: u32,
    /// Offset of the level payload in the file
    pub offset: u32,
    /// Size of the level payload in bytes
    pub size: u32,
}

impl BlpDescriptor {
    /// Container sub-version
    pub fn version(&self) -> BlpVersion {
        self.header.version()
    }

    /// Width of the base level
    pub fn width(&self) -> u32 {
        self.header.width()
    }

    /// Height of the base level
    pub fn height(&self) -> u32 {
        self.header.height()
    }

    /// Number of mipmap levels stored in the file (0..=16)
    pub fn mipmap_count(&self) -> usize {
        self.header.mipmaps().count()
    }

    /// Dimensions of a mipmap level: the base size shifted right by the level,
    /// never smaller than 1x1. The level is not clamped here.
    pub fn mipmap_size(&self, level: usize) -> (u32, u32) {
        (shift_dimension(self.width(), level), shift_dimension(self.height(), level))
    }

    /// Palette, present only for palettized content
    pub fn palette(&self) -> Option<&Palette> {
        match &self.extension {
            HeaderExtension::Palette(palette) => Some(palette),
            _ => None,
        }
    }

    /// Shared JPEG header, present only for BLP1 JPEG content
    pub fn jpeg_header(&self) -> Option<&[u8]> {
        match &self.extension {
            HeaderExtension::JpegHeader(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Resolve the canonical pixel encoding of the file
    pub fn format(&self) -> ParseResult<BlpFormat> {
        parser::resolve_format(self)
    }

    /// Location and dimensions of every stored mipmap level
    pub fn mipmap_info(&self) -> Vec<MipmapInfo> {
        let table = self.header.mipmaps();
        (0..table.count())
            .map(|level| {
                let (width, height) = self.mipmap_size(level);
                MipmapInfo {
                    level,
                    width,
                    height,
                    offset: table.offsets[level],
                    size: table.sizes[level],
                }
            })
            .collect()
    }
}

fn shift_dimension(base: u32, level: usize) -> u32 {
    u32::try_from(level)
        .ok()
        .and_then(|shift| base.checked_shr(shift))
        .unwrap_or(0)
        .max(1)
}

/// A BLP file loaded into memory together with its parsed descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlpFile {
    /// Raw bytes of the whole file
    #[debug(with = trimmed_collection_fmt)]
    pub bytes: Vec<u8>,
    /// Descriptor parsed from `bytes`
    pub descriptor: BlpDescriptor,
}

impl BlpFile {
    /// Parse a file already held in memory
    pub fn from_bytes(bytes: Vec<u8>) -> ParseResult<Self> {
        let descriptor = parser::parse_blp(&bytes)?;
        Ok(Self { bytes, descriptor })
    }

    /// Decode a mipmap level (clamped to the last stored level) into BGRA pixels
    pub fn decode(&self, level: usize) -> Result<BgraImage, convert::Error> {
        convert::blp_to_bgra(&self.bytes, &self.descriptor, level)
    }

    /// Decode a mipmap level into an RGBA image ready to be written out
    pub fn to_image(&self, level: usize) -> Result<DynamicImage, convert::Error> {
        convert::blp_to_image(&self.bytes, &self.descriptor, level)
    }
}
