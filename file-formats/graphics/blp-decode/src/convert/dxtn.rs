use super::codec::BlockDecoder;
use super::error::Error;
use super::require_payload;
use crate::parser::MipmapLevel;
use crate::types::{Bgra, DxtnFormat};

/// Decompress a DXT level. The payload must cover every 4x4 block of the
/// level; partial blocks at the edges count as whole blocks.
pub(crate) fn dxtn_to_bgra(
    decoder: &dyn BlockDecoder,
    format: DxtnFormat,
    payload: &[u8],
    mipmap: &MipmapLevel,
) -> Result<Vec<Bgra>, Error> {
    let (width, height) = (mipmap.width as usize, mipmap.height as usize);
    // Sizes past usize can never be satisfied by a payload
    let needed = format
        .compressed_size(width, height)
        .unwrap_or(usize::MAX);
    require_payload(payload, needed, mipmap.level)?;

    let output = decoder.decompress_rgba(format, &payload[..needed], width, height);
    let expected = mipmap.pixel_count().saturating_mul(4);
    if output.len() < expected {
        return Err(Error::DecoderOutputMismatch {
            expected,
            actual: output.len(),
        });
    }

    Ok(output[..expected]
        .chunks_exact(4)
        .map(|rgba| Bgra::new(rgba[2], rgba[1], rgba[0], rgba[3]))
        .collect())
}
