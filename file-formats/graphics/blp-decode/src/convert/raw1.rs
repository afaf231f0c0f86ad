use super::error::Error;
use super::require_payload;
use crate::parser::MipmapLevel;
use crate::types::{Bgra, Palette};

/// How the alpha channel of a palettized level is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndexedAlpha {
    /// No alpha data, every pixel is opaque
    Opaque,
    /// One bit per pixel after the index plane, least significant bit first
    Bit1,
    /// One nibble per pixel after the index plane, low nibble first
    Bit4,
    /// One byte per pixel after the index plane
    Bit8,
    /// No alpha plane; the palette alpha channel holds inverted opacity
    InvertedPalette,
}

impl IndexedAlpha {
    /// Size of the alpha plane that follows `pixels` index bytes
    fn plane_size(self, pixels: usize) -> usize {
        match self {
            Self::Opaque | Self::InvertedPalette => 0,
            Self::Bit1 => pixels.div_ceil(8),
            Self::Bit4 => pixels.div_ceil(2),
            Self::Bit8 => pixels,
        }
    }
}

/// Expand palette indices (and the alpha plane that follows them) into pixels
pub(crate) fn raw1_to_bgra(
    payload: &[u8],
    palette: &Palette,
    mipmap: &MipmapLevel,
    alpha: IndexedAlpha,
) -> Result<Vec<Bgra>, Error> {
    let pixels = mipmap.pixel_count();
    let needed = pixels.saturating_add(alpha.plane_size(pixels));
    require_payload(payload, needed, mipmap.level)?;

    let (indices, alpha_plane) = payload.split_at(pixels);
    let colors = indices.iter().map(|&index| palette.color(index));

    let result = match alpha {
        IndexedAlpha::Opaque => colors.map(|color| color.with_alpha(0xFF)).collect(),
        IndexedAlpha::InvertedPalette => colors
            .map(|color| color.with_alpha(0xFF - color.a))
            .collect(),
        IndexedAlpha::Bit8 => colors
            .zip(alpha_plane)
            .map(|(color, &a)| color.with_alpha(a))
            .collect(),
        IndexedAlpha::Bit1 => colors
            .enumerate()
            .map(|(i, color)| {
                let bit = (alpha_plane[i / 8] >> (i % 8)) & 0x1;
                color.with_alpha(if bit == 1 { 0xFF } else { 0x00 })
            })
            .collect(),
        IndexedAlpha::Bit4 => colors
            .enumerate()
            .map(|(i, color)| {
                let nibble = (alpha_plane[i / 2] >> ((i % 2) * 4)) & 0xF;
                // 4-bit range to 8-bit range
                color.with_alpha((nibble << 4) | nibble)
            })
            .collect(),
    };
    Ok(result)
}
