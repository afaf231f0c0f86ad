use std::fmt;

/// Which block compression algorithm a DXT texture uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DxtnFormat {
    /// DXT1 compression (BC1)
    Dxt1,
    /// DXT3 compression (BC2)
    Dxt3,
    /// DXT5 compression (BC3)
    Dxt5,
}

impl From<DxtnFormat> for texpresso::Format {
    fn from(v: DxtnFormat) -> texpresso::Format {
        match v {
            DxtnFormat::Dxt1 => texpresso::Format::Bc1,
            DxtnFormat::Dxt3 => texpresso::Format::Bc2,
            DxtnFormat::Dxt5 => texpresso::Format::Bc3,
        }
    }
}

impl DxtnFormat {
    /// Size in bytes of one 4x4 block
    pub fn block_size(self) -> usize {
        match self {
            DxtnFormat::Dxt1 => 8,
            DxtnFormat::Dxt3 | DxtnFormat::Dxt5 => 16,
        }
    }

    /// Bytes of block data needed to cover an image of the given size.
    /// Partial blocks at the edges still occupy a whole block.
    ///
    /// `None` when the size does not fit in `usize`.
    pub fn compressed_size(self, width: usize, height: usize) -> Option<usize> {
        width
            .div_ceil(4)
            .checked_mul(height.div_ceil(4))?
            .checked_mul(self.block_size())
    }
}

/// Canonical pixel encoding of a BLP file, resolved from its header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlpFormat {
    /// Embedded JPEG stream
    Jpeg,
    /// Palette indices, fully opaque
    PalettedNoAlpha,
    /// Palette indices with a 1-bit alpha plane
    PalettedAlpha1,
    /// Palette indices with a 4-bit alpha plane
    PalettedAlpha4,
    /// Palette indices with 8-bit alpha
    PalettedAlpha8,
    /// Uncompressed BGRA pixels
    RawBgra,
    /// DXT1 blocks without alpha
    Dxt1NoAlpha,
    /// DXT1 blocks with 1-bit alpha
    Dxt1Alpha1,
    /// DXT3 blocks, header declares 4-bit alpha
    Dxt3Alpha4,
    /// DXT3 blocks, header declares 8-bit alpha
    Dxt3Alpha8,
    /// DXT5 blocks with 8-bit interpolated alpha
    Dxt5Alpha8,
}

impl BlpFormat {
    /// Block compression used by this format, if any
    pub fn dxtn(self) -> Option<DxtnFormat> {
        match self {
            Self::Dxt1NoAlpha | Self::Dxt1Alpha1 => Some(DxtnFormat::Dxt1),
            Self::Dxt3Alpha4 | Self::Dxt3Alpha8 => Some(DxtnFormat::Dxt3),
            Self::Dxt5Alpha8 => Some(DxtnFormat::Dxt5),
            _ => None,
        }
    }

    /// Whether pixels are palette indices
    pub fn is_paletted(self) -> bool {
        matches!(
            self,
            Self::PalettedNoAlpha | Self::PalettedAlpha1 | Self::PalettedAlpha4 | Self::PalettedAlpha8
        )
    }

    /// Bits of alpha information the format carries per pixel
    pub fn alpha_bits(self) -> u8 {
        match self {
            Self::Jpeg | Self::PalettedNoAlpha | Self::Dxt1NoAlpha => 0,
            Self::PalettedAlpha1 | Self::Dxt1Alpha1 => 1,
            Self::PalettedAlpha4 | Self::Dxt3Alpha4 => 4,
            Self::PalettedAlpha8 | Self::RawBgra | Self::Dxt3Alpha8 | Self::Dxt5Alpha8 => 8,
        }
    }
}

impl fmt::Display for BlpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::Jpeg => "JPEG",
            Self::PalettedNoAlpha => "Uncompressed paletted image, no alpha",
            Self::PalettedAlpha1 => "Uncompressed paletted image, 1-bit alpha",
            Self::PalettedAlpha4 => "Uncompressed paletted image, 4-bit alpha",
            Self::PalettedAlpha8 => "Uncompressed paletted image, 8-bit alpha",
            Self::RawBgra => "Uncompressed raw 32-bit BGRA",
            Self::Dxt1NoAlpha => "DXT1, no alpha",
            Self::Dxt1Alpha1 => "DXT1, 1-bit alpha",
            Self::Dxt3Alpha4 => "DXT3, 4-bit alpha",
            Self::Dxt3Alpha8 => "DXT3, 8-bit alpha",
            Self::Dxt5Alpha8 => "DXT5, 8-bit alpha",
        };
        f.write_str(description)
    }
}
