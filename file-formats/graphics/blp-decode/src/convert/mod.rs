/// External JPEG and DXT decoders
pub mod codec;
mod dxtn;
/// Error types for pixel reconstruction
pub mod error;
mod jpeg;
mod raw1;
mod raw3;

pub use codec::*;
use dxtn::dxtn_to_bgra;
pub use error::Error;
use jpeg::jpeg_to_bgra;
use raw1::{IndexedAlpha, raw1_to_bgra};
use raw3::raw3_to_bgra;

use super::parser;
use super::types::*;
use ::image::DynamicImage;
use log::*;

/// Which reconstructor handles a resolved format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reconstruction {
    Jpeg,
    Raw1(IndexedAlpha),
    Raw3,
    Dxtn(DxtnFormat),
}

impl Reconstruction {
    fn select(format: BlpFormat, header: &BlpHeader) -> Self {
        match format {
            BlpFormat::Jpeg => Self::Jpeg,
            BlpFormat::PalettedNoAlpha => Self::Raw1(IndexedAlpha::Opaque),
            BlpFormat::PalettedAlpha1 => Self::Raw1(IndexedAlpha::Bit1),
            BlpFormat::PalettedAlpha4 => Self::Raw1(IndexedAlpha::Bit4),
            BlpFormat::PalettedAlpha8 => match header {
                BlpHeader::Blp1(h) if h.alpha_encoding == alpha_encoding::BLP1_PALETTE_ALPHA => {
                    Self::Raw1(IndexedAlpha::InvertedPalette)
                }
                _ => Self::Raw1(IndexedAlpha::Bit8),
            },
            BlpFormat::RawBgra => Self::Raw3,
            BlpFormat::Dxt1NoAlpha | BlpFormat::Dxt1Alpha1 => Self::Dxtn(DxtnFormat::Dxt1),
            BlpFormat::Dxt3Alpha4 | BlpFormat::Dxt3Alpha8 => Self::Dxtn(DxtnFormat::Dxt3),
            BlpFormat::Dxt5Alpha8 => Self::Dxtn(DxtnFormat::Dxt5),
        }
    }
}

/// Decode a mipmap level of a parsed file into BGRA pixels with the default
/// codecs. `input` must be the buffer `blp` was parsed from.
///
/// Levels past the last stored one are clamped to it.
pub fn blp_to_bgra(
    input: &[u8],
    blp: &BlpDescriptor,
    mipmap_level: usize,
) -> Result<BgraImage, Error> {
    blp_to_bgra_with(input, blp, mipmap_level, &Codecs::default())
}

/// Same as [`blp_to_bgra`] with caller supplied JPEG and DXT decoders
pub fn blp_to_bgra_with(
    input: &[u8],
    blp: &BlpDescriptor,
    mipmap_level: usize,
    codecs: &Codecs<'_>,
) -> Result<BgraImage, Error> {
    let format = blp.format()?;
    let mipmap = parser::locate_mipmap(blp, mipmap_level)?;
    let payload = parser::read_mipmap(input, &mipmap)?;
    let reconstruction = Reconstruction::select(format, &blp.header);
    debug!(
        "Decoding {} level {} ({}x{}, {} bytes) as {:?}",
        format, mipmap.level, mipmap.width, mipmap.height, mipmap.size, reconstruction
    );

    let pixels = match reconstruction {
        Reconstruction::Jpeg => {
            let header = blp.jpeg_header().unwrap_or_default();
            return jpeg_to_bgra(codecs.photo, header, &payload);
        }
        Reconstruction::Raw1(alpha) => {
            let palette = blp.palette().ok_or_else(|| {
                parser::Error::UnsupportedVariant("palettized content without a palette".into())
            })?;
            raw1_to_bgra(&payload, palette, &mipmap, alpha)?
        }
        Reconstruction::Raw3 => raw3_to_bgra(&payload, &mipmap)?,
        Reconstruction::Dxtn(dxtn) => dxtn_to_bgra(codecs.block, dxtn, &payload, &mipmap)?,
    };

    Ok(BgraImage {
        width: mipmap.width,
        height: mipmap.height,
        pixels,
    })
}

/// Decode a mipmap level into an RGBA image ready for raster writers
pub fn blp_to_image(
    input: &[u8],
    blp: &BlpDescriptor,
    mipmap_level: usize,
) -> Result<DynamicImage, Error> {
    let bgra = blp_to_bgra(input, blp, mipmap_level)?;
    let rgba = bgra
        .to_rgba_image()
        .ok_or(Error::RgbaConvertFail(bgra.width, bgra.height))?;
    Ok(DynamicImage::ImageRgba8(rgba))
}

/// Fail with [`Error::TruncatedPayload`] when `payload` holds fewer than
/// `needed` bytes
fn require_payload(payload: &[u8], needed: usize, level: usize) -> Result<(), Error> {
    if payload.len() < needed {
        error!(
            "Mipmap {} payload has {} bytes, {} needed",
            level,
            payload.len(),
            needed
        );
        return Err(Error::TruncatedPayload {
            level,
            needed,
            actual: payload.len(),
        });
    }
    Ok(())
}
