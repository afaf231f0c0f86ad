mod bounds;
/// Error types for BLP parsing operations
pub mod error;
mod format;
mod header;
mod mipmap;
/// Native byte reading utilities
mod reader;
/// Type definitions used by the BLP parser
pub mod types;

use super::types::*;
pub use error::{Error, LoadError};
pub use format::resolve_format;
use header::{parse_extension, parse_header};
pub use header::MAX_JPEG_HEADER;
pub use mipmap::{MipmapLevel, locate_mipmap, read_mipmap};
use std::path::Path;
pub use types::ParseResult;

/// Read a BLP file from the file system and parse its header
pub fn load_blp<Q>(path: Q) -> Result<BlpFile, LoadError>
where
    Q: AsRef<Path>,
{
    let path = path.as_ref();
    let input = std::fs::read(path).map_err(|e| LoadError::FileSystem(path.to_owned(), e))?;
    BlpFile::from_bytes(input).map_err(|e| LoadError::Parsing(path.to_owned(), e))
}

/// Parse the header of a BLP file held in memory.
///
/// Only the header and what immediately follows it (palette or JPEG header)
/// are read. Mipmap payloads are located and bounds checked when a level is
/// decoded.
pub fn parse_blp(input: &[u8]) -> ParseResult<BlpDescriptor> {
    let header = parse_header(input).map_err(|e| e.with_context("header"))?;
    let extension = parse_extension(&header, input).map_err(|e| e.with_context("extension"))?;

    Ok(BlpDescriptor { header, extension })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn blp1_palettized(width: u32, height: u32, truncate_palette: bool) -> Vec<u8> {
        let mut bytes = b"BLP1".to_vec();
        for field in [1u32, 8, width, height, 5, 0] {
            bytes.extend(field.to_le_bytes());
        }
        let payload_offset = (BLP1_HEADER_SIZE + PALETTE_BYTES) as u32;
        let mut offsets = [0u32; 16];
        offsets[0] = payload_offset;
        let mut sizes = [0u32; 16];
        sizes[0] = width * height;
        for value in offsets.iter().chain(sizes.iter()) {
            bytes.extend(value.to_le_bytes());
        }
        let palette_len = if truncate_palette { 100 } else { PALETTE_BYTES };
        bytes.extend(std::iter::repeat_n(0x30, palette_len));
        bytes
    }

    fn blp1_jpeg(header: &[u8]) -> Vec<u8> {
        let mut bytes = b"BLP1".to_vec();
        for field in [0u32, 0, 8, 8, 0, 0] {
            bytes.extend(field.to_le_bytes());
        }
        bytes.extend([0u8; 128]);
        bytes.extend((header.len() as u32).to_le_bytes());
        bytes.extend(header);
        bytes
    }

    #[test]
    fn test_blp1_palette_follows_header() {
        let bytes = blp1_palettized(2, 2, false);
        let blp = parse_blp(&bytes).unwrap();
        assert_eq!(blp.version(), BlpVersion::Blp1);
        assert_eq!((blp.width(), blp.height()), (2, 2));
        assert_eq!(blp.mipmap_count(), 1);
        assert_eq!(blp.palette().unwrap().color(0), Bgra::new(0x30, 0x30, 0x30, 0x30));
        assert!(blp.jpeg_header().is_none());
    }

    #[test]
    fn test_blp1_jpeg_header_is_owned() {
        let bytes = blp1_jpeg(&[0xFF, 0xD8, 0xFF, 0xDB]);
        let blp = parse_blp(&bytes).unwrap();
        drop(bytes);
        assert_eq!(blp.jpeg_header(), Some(&[0xFF, 0xD8, 0xFF, 0xDB][..]));
        assert!(blp.palette().is_none());
        assert_eq!(blp.mipmap_count(), 0);
    }

    #[test]
    fn test_blp1_empty_jpeg_header() {
        let blp = parse_blp(&blp1_jpeg(&[])).unwrap();
        assert_eq!(blp.jpeg_header(), Some(&[][..]));
    }

    #[test]
    fn test_truncation_never_reads_past_end() {
        let bytes = blp1_palettized(2, 2, false);
        for len in 0..bytes.len() {
            let err = parse_blp(&bytes[..len]).unwrap_err();
            assert!(
                matches!(err.root(), Error::TruncatedBuffer { .. }),
                "length {len} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_truncated_palette() {
        let err = parse_blp(&blp1_palettized(2, 2, true)).unwrap_err();
        assert!(matches!(err.root(), Error::TruncatedBuffer { .. }));
    }

    #[test]
    fn test_jpeg_header_size_past_end() {
        let mut bytes = blp1_jpeg(&[1, 2, 3]);
        bytes.truncate(bytes.len() - 1);
        let err = parse_blp(&bytes).unwrap_err();
        assert!(matches!(err.root(), Error::TruncatedBuffer { .. }));
    }

    #[test]
    fn test_unrecognized_magic() {
        let mut bytes = blp1_palettized(2, 2, false);
        bytes[..4].copy_from_slice(b"BLP3");
        let err = parse_blp(&bytes).unwrap_err();
        assert!(matches!(err.root(), Error::UnrecognizedFormat(_)));
    }
}
