use thiserror::Error;

/// Errors that can occur while reconstructing pixels from a BLP file
#[derive(Debug, Error)]
pub enum Error {
    /// Header parsing, format resolution or mipmap location failed
    #[error(transparent)]
    Parse(#[from] crate::parser::Error),
    /// The mipmap payload holds fewer bytes than its encoding needs
    #[error("Mipmap {level} needs {needed} bytes of payload, but only {actual} are present")]
    TruncatedPayload {
        /// Mipmap level being decoded
        level: usize,
        /// Bytes the encoding needs for the level dimensions
        needed: usize,
        /// Bytes present in the payload
        actual: usize,
    },
    /// The JPEG decoder rejected the payload
    #[error("JPEG decoding failed")]
    PhotoDecodeFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A codec returned fewer bytes than the level dimensions require
    #[error("Decoder produced {actual} bytes, {expected} expected")]
    DecoderOutputMismatch {
        /// Bytes needed for the level dimensions
        expected: usize,
        /// Bytes the decoder returned
        actual: usize,
    },
    /// The decoded pixels could not be handed to the raster image type
    #[error("Failed to build a {0}x{1} RGBA image from decoded pixels")]
    RgbaConvertFail(u32, u32),
}
