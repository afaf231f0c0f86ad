use super::error::Error;
use super::types::ParseResult;
use crate::types::*;
use log::debug;

/// Derive the canonical pixel encoding from the header fields.
///
/// For BLP2 DXT content the alpha depth decides between DXT1 and DXT3; the
/// alpha encoding is only consulted at 8-bit depth, where it separates DXT3
/// from DXT5.
pub fn resolve_format(blp: &BlpDescriptor) -> ParseResult<BlpFormat> {
    let format = match &blp.header {
        BlpHeader::Blp1(h) => resolve_blp1(h),
        BlpHeader::Blp2(h) => resolve_blp2(h)?,
    };
    debug!("Resolved {} content as {:?}", blp.version(), format);
    Ok(format)
}

fn resolve_blp1(header: &Blp1Header) -> BlpFormat {
    if header.content == CONTENT_JPEG {
        BlpFormat::Jpeg
    } else if header.has_alpha() {
        BlpFormat::PalettedAlpha8
    } else {
        BlpFormat::PalettedNoAlpha
    }
}

fn resolve_blp2(header: &Blp2Header) -> ParseResult<BlpFormat> {
    if header.content == CONTENT_JPEG {
        return Ok(BlpFormat::Jpeg);
    }

    match (header.compression, header.alpha_bits, header.alpha_encoding) {
        (compression::PALETTIZED, 0, _) => Ok(BlpFormat::PalettedNoAlpha),
        (compression::PALETTIZED, 1, _) => Ok(BlpFormat::PalettedAlpha1),
        (compression::PALETTIZED, 4, _) => Ok(BlpFormat::PalettedAlpha4),
        (compression::PALETTIZED, 8, _) => Ok(BlpFormat::PalettedAlpha8),
        (compression::RAW_BGRA, _, _) => Ok(BlpFormat::RawBgra),
        (compression::DXTC, 0, _) => Ok(BlpFormat::Dxt1NoAlpha),
        (compression::DXTC, 1, _) => Ok(BlpFormat::Dxt1Alpha1),
        (compression::DXTC, 4, _) => Ok(BlpFormat::Dxt3Alpha4),
        (compression::DXTC, 8, alpha_encoding::DXT3) => Ok(BlpFormat::Dxt3Alpha8),
        (compression::DXTC, 8, alpha_encoding::DXT5) => Ok(BlpFormat::Dxt5Alpha8),
        (compression::DXTC, 8, other) => Err(Error::UnsupportedVariant(format!(
            "DXT compression with 8-bit alpha and alpha encoding {other}"
        ))),
        (compression::PALETTIZED | compression::DXTC, bits, _) => Err(
            Error::UnsupportedVariant(format!("alpha depth {bits} for compression {}", header.compression)),
        ),
        (other, _, _) => Err(Error::UnsupportedVariant(format!(
            "compression type {other}"
        ))),
    }
}
