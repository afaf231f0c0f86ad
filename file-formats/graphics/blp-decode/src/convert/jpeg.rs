use super::codec::PhotoDecoder;
use super::error::Error;
use crate::types::{Bgra, BgraImage};
use log::*;

/// Decode a JPEG level: the shared header and the level payload form one
/// complete stream. The image size is whatever the decoder reports.
pub(crate) fn jpeg_to_bgra(
    decoder: &dyn PhotoDecoder,
    header: &[u8],
    payload: &[u8],
) -> Result<BgraImage, Error> {
    let mut stream = Vec::with_capacity(header.len() + payload.len());
    stream.extend_from_slice(header);
    stream.extend_from_slice(payload);
    trace!(
        "Decoding JPEG stream of {} bytes ({} header + {} payload)",
        stream.len(),
        header.len(),
        payload.len()
    );

    let frame = decoder.decode_rgb(&stream).map_err(Error::PhotoDecodeFailed)?;
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(3);
    if frame.data.len() < expected {
        return Err(Error::DecoderOutputMismatch {
            expected,
            actual: frame.data.len(),
        });
    }

    // BLP stores JPEG data with red and blue swapped
    let pixels = frame.data[..expected]
        .chunks_exact(3)
        .map(|rgb| Bgra::new(rgb[0], rgb[1], rgb[2], 0xFF))
        .collect();
    Ok(BgraImage {
        width: frame.width,
        height: frame.height,
        pixels,
    })
}
