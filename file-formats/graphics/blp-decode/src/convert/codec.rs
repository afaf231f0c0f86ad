//! Seams to the external JPEG and DXT decoders.
//!
//! Reconstruction never decodes JPEG streams or DXT blocks itself; it hands the
//! payload to a [`PhotoDecoder`] or a [`BlockDecoder`] and relabels what comes
//! back. The defaults are backed by the `image` and `texpresso` crates.

use crate::types::DxtnFormat;
use ::image::{ImageFormat, ImageReader};
use std::io::Cursor;

/// Boxed error returned by photo decoders
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Three channel image produced by a [`PhotoDecoder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    /// Width reported by the decoder
    pub width: u32,
    /// Height reported by the decoder
    pub height: u32,
    /// Row-major pixels, three bytes each in decoder channel order
    pub data: Vec<u8>,
}

/// Decoder for the JPEG streams embedded in BLP files
pub trait PhotoDecoder {
    /// Decode a complete JPEG stream (shared header followed by the mipmap
    /// payload) into three channels per pixel
    fn decode_rgb(&self, data: &[u8]) -> Result<RgbFrame, CodecError>;
}

/// Decompressor for DXT1/DXT3/DXT5 block data
pub trait BlockDecoder {
    /// Decompress blocks covering `width` x `height` pixels into RGBA bytes.
    /// `data` holds at least [`DxtnFormat::compressed_size`] bytes.
    fn decompress_rgba(&self, format: DxtnFormat, data: &[u8], width: usize, height: usize)
    -> Vec<u8>;
}

/// JPEG decoding through the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegDecoder;

impl PhotoDecoder for ImageJpegDecoder {
    fn decode_rgb(&self, data: &[u8]) -> Result<RgbFrame, CodecError> {
        let jpeg = ImageReader::with_format(Cursor::new(data), ImageFormat::Jpeg).decode()?;
        let rgb = jpeg.into_rgb8();
        Ok(RgbFrame {
            width: rgb.width(),
            height: rgb.height(),
            data: rgb.into_raw(),
        })
    }
}

/// DXT decompression through `texpresso`
#[derive(Debug, Clone, Copy, Default)]
pub struct TexpressoDecoder;

impl BlockDecoder for TexpressoDecoder {
    fn decompress_rgba(
        &self,
        format: DxtnFormat,
        data: &[u8],
        width: usize,
        height: usize,
    ) -> Vec<u8> {
        let decoder: texpresso::Format = format.into();
        let Some(len) = width.checked_mul(height).and_then(|n| n.checked_mul(4)) else {
            return Vec::new();
        };
        let mut output = vec![0; len];
        decoder.decompress(data, width, height, &mut output);
        output
    }
}

/// The decoders used for one reconstruction call
#[derive(Clone, Copy)]
pub struct Codecs<'a> {
    /// JPEG decoder
    pub photo: &'a dyn PhotoDecoder,
    /// DXT decompressor
    pub block: &'a dyn BlockDecoder,
}

impl Default for Codecs<'static> {
    fn default() -> Self {
        Self {
            photo: &ImageJpegDecoder,
            block: &TexpressoDecoder,
        }
    }
}

impl std::fmt::Debug for Codecs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Codecs").finish_non_exhaustive()
    }
}
