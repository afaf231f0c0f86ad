use super::super::types::*;
use super::error::Error;
use super::reader::{ByteReader, Cursor, read_u32_array};
use super::types::ParseResult;
use log::*;
use std::str;

/// JPEG headers larger than this are known to crash some tools
pub const MAX_JPEG_HEADER: usize = 624;

pub fn parse_header(input: &[u8]) -> ParseResult<BlpHeader> {
    let mut reader = Cursor::new(input);

    let version = parse_magic(&mut reader).map_err(|e| e.with_context("version"))?;
    let content = reader
        .read_u32_le()
        .map_err(|e| e.with_context("content field"))?;

    let header = match version {
        BlpVersion::Blp1 => {
            let flags = reader
                .read_u32_le()
                .map_err(|e| e.with_context("flags field"))?;
            let (width, height) = parse_dimensions(&mut reader)?;
            let alpha_encoding = reader
                .read_u32_le()
                .map_err(|e| e.with_context("alpha_encoding field"))?;
            let has_mipmaps = reader
                .read_u32_le()
                .map_err(|e| e.with_context("has_mipmaps field"))?;
            let mipmaps =
                parse_mipmap_table(&mut reader).map_err(|e| e.with_context("mipmap table"))?;

            BlpHeader::Blp1(Blp1Header {
                content,
                flags,
                width,
                height,
                alpha_encoding,
                has_mipmaps,
                mipmaps,
            })
        }
        BlpVersion::Blp2 => {
            let compression = reader
                .read_u8()
                .map_err(|e| e.with_context("compression field"))?;
            let alpha_bits = reader
                .read_u8()
                .map_err(|e| e.with_context("alpha_bits field"))?;
            let alpha_encoding = reader
                .read_u8()
                .map_err(|e| e.with_context("alpha_encoding field"))?;
            let has_mipmaps = reader
                .read_u8()
                .map_err(|e| e.with_context("has_mipmaps field"))?;
            let (width, height) = parse_dimensions(&mut reader)?;
            let mipmaps =
                parse_mipmap_table(&mut reader).map_err(|e| e.with_context("mipmap table"))?;

            BlpHeader::Blp2(Blp2Header {
                content,
                compression,
                alpha_bits,
                alpha_encoding,
                has_mipmaps,
                width,
                height,
                mipmaps,
            })
        }
    };

    debug_assert_eq!(reader.position(), BlpHeader::size(version));
    trace!(
        "Parsed {} header {}x{} with {} mipmaps",
        version,
        header.width(),
        header.height(),
        header.mipmaps().count()
    );
    Ok(header)
}

/// Parse whatever follows the fixed header: the palette or the BLP1 JPEG header.
pub fn parse_extension(header: &BlpHeader, input: &[u8]) -> ParseResult<HeaderExtension> {
    let mut reader = Cursor::new(input);
    reader.read_bytes(BlpHeader::size(header.version()))?;

    match header {
        BlpHeader::Blp1(h) if h.content == CONTENT_JPEG => {
            let header_size = reader
                .read_u32_le()
                .map_err(|e| e.with_context("jpeg header size"))?;
            if header_size as usize > MAX_JPEG_HEADER {
                warn!(
                    "JPEG header size {} is greater than {}, that might cause crashes of some tools.",
                    header_size, MAX_JPEG_HEADER,
                );
            }
            let bytes = reader
                .read_bytes(header_size as usize)
                .map_err(|e| e.with_context("jpeg header"))?;
            Ok(HeaderExtension::JpegHeader(bytes))
        }
        BlpHeader::Blp1(_) => {
            let palette = parse_palette(&mut reader).map_err(|e| e.with_context("palette"))?;
            Ok(HeaderExtension::Palette(palette))
        }
        BlpHeader::Blp2(h) => {
            // The palette region is part of every BLP2 header, even when unused
            let palette = parse_palette(&mut reader).map_err(|e| e.with_context("palette"))?;
            if h.is_palettized() {
                Ok(HeaderExtension::Palette(palette))
            } else {
                Ok(HeaderExtension::Empty)
            }
        }
    }
}

fn parse_magic(reader: &mut impl ByteReader) -> ParseResult<BlpVersion> {
    let magic: [u8; 4] = reader.read_array()?;

    BlpVersion::from_magic(magic).ok_or_else(|| {
        Error::UnrecognizedFormat(
            str::from_utf8(&magic)
                .map(|s| s.to_owned())
                .unwrap_or_else(|_| format!("{magic:?}")),
        )
    })
}

fn parse_dimensions(reader: &mut impl ByteReader) -> ParseResult<(u32, u32)> {
    let width = reader
        .read_u32_le()
        .map_err(|e| e.with_context("width field"))?;
    let height = reader
        .read_u32_le()
        .map_err(|e| e.with_context("height field"))?;
    Ok((width, height))
}

fn parse_mipmap_table(reader: &mut impl ByteReader) -> ParseResult<MipmapTable> {
    let offsets = read_u32_array(reader)?;
    let sizes = read_u32_array(reader)?;
    Ok(MipmapTable { offsets, sizes })
}

fn parse_palette(reader: &mut impl ByteReader) -> ParseResult<Palette> {
    let mut colors = [Bgra::default(); PALETTE_SIZE];
    for color in colors.iter_mut() {
        *color = Bgra::from_bytes(reader.read_array()?);
    }
    Ok(Palette::new(colors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blp2_header_bytes(compression: u8, alpha_bits: u8, alpha_encoding: u8) -> Vec<u8> {
        let mut bytes = b"BLP2".to_vec();
        bytes.extend(1u32.to_le_bytes());
        bytes.extend([compression, alpha_bits, alpha_encoding, 1]);
        bytes.extend(64u32.to_le_bytes());
        bytes.extend(32u32.to_le_bytes());
        let mut offsets = [0u32; 16];
        offsets[0] = 1172;
        offsets[1] = 1200;
        for offset in offsets {
            bytes.extend(offset.to_le_bytes());
        }
        for size in [28u32; 16] {
            bytes.extend(size.to_le_bytes());
        }
        for i in 0..=255u8 {
            bytes.extend([i, i, i, 255 - i]);
        }
        bytes
    }

    #[test]
    fn test_blp2_fields_are_read_in_order() {
        let bytes = blp2_header_bytes(2, 8, 7);
        let header = parse_header(&bytes).unwrap();
        match &header {
            BlpHeader::Blp2(h) => {
                assert_eq!(h.content, 1);
                assert_eq!(h.compression, 2);
                assert_eq!(h.alpha_bits, 8);
                assert_eq!(h.alpha_encoding, 7);
                assert_eq!(h.has_mipmaps, 1);
                assert_eq!((h.width, h.height), (64, 32));
                assert_eq!(h.mipmaps.count(), 2);
                assert_eq!(h.mipmaps.sizes[0], 28);
            }
            BlpHeader::Blp1(_) => panic!("expected BLP2 header"),
        }
        assert_eq!(
            parse_extension(&header, &bytes).unwrap(),
            HeaderExtension::Empty
        );
    }

    #[test]
    fn test_blp2_palette_kept_for_palettized_content() {
        let bytes = blp2_header_bytes(1, 0, 0);
        let header = parse_header(&bytes).unwrap();
        let extension = parse_extension(&header, &bytes).unwrap();
        match extension {
            HeaderExtension::Palette(palette) => {
                assert_eq!(palette.color(3), Bgra::new(3, 3, 3, 252));
            }
            other => panic!("expected palette, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_magic() {
        let mut bytes = blp2_header_bytes(1, 0, 0);
        bytes[3] = b'3';
        let err = parse_header(&bytes).unwrap_err();
        match err.root() {
            Error::UnrecognizedFormat(magic) => assert_eq!(magic, "BLP3"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_truncated_palette_region() {
        let bytes = blp2_header_bytes(3, 8, 8);
        let header = parse_header(&bytes[..200]).unwrap();
        let err = parse_extension(&header, &bytes[..200]).unwrap_err();
        assert!(matches!(err.root(), Error::TruncatedBuffer { .. }));
    }
}
