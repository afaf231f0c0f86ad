use super::bounds::get_bounded_slice;
use super::error::Error;
use super::types::ParseResult;
use crate::types::BlpDescriptor;
use log::trace;

/// A mipmap level resolved against the header: which level will actually be
/// decoded, its pixel size and where its payload lives in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipmapLevel {
    /// Effective level after clamping to the stored levels
    pub level: usize,
    /// Width of the level in pixels, at least 1
    pub width: u32,
    /// Height of the level in pixels, at least 1
    pub height: u32,
    /// Offset of the payload from the start of the file
    pub offset: u32,
    /// Size of the payload in bytes
    pub size: u32,
}

impl MipmapLevel {
    /// Number of pixels in the level
    pub fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Clamp `requested` to the stored levels and describe the resulting level.
///
/// Requests past the last stored level fall back to the smallest one.
pub fn locate_mipmap(blp: &BlpDescriptor, requested: usize) -> ParseResult<MipmapLevel> {
    let table = blp.header.mipmaps();
    let count = table.count();
    if count == 0 {
        return Err(Error::NoMipLevels);
    }

    let level = requested.min(count - 1);
    let (width, height) = blp.mipmap_size(level);
    trace!(
        "Requested mipmap {} resolved to level {} of {} ({}x{})",
        requested, level, count, width, height
    );

    Ok(MipmapLevel {
        level,
        width,
        height,
        offset: table.offsets[level],
        size: table.sizes[level],
    })
}

/// Copy the payload of a located level out of the file into a scratch buffer
pub fn read_mipmap(input: &[u8], level: &MipmapLevel) -> ParseResult<Vec<u8>> {
    get_bounded_slice(input, level.offset, level.size, level.level).map(<[u8]>::to_vec)
}
