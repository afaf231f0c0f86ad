use super::error::Error;
use super::require_payload;
use crate::parser::MipmapLevel;
use crate::types::Bgra;

/// Uncompressed levels store four bytes per pixel in B, G, R, A order
pub(crate) fn raw3_to_bgra(payload: &[u8], mipmap: &MipmapLevel) -> Result<Vec<Bgra>, Error> {
    let needed = mipmap.pixel_count().saturating_mul(4);
    require_payload(payload, needed, mipmap.level)?;

    Ok(payload[..needed]
        .chunks_exact(4)
        .map(|chunk| Bgra::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn level(width: u32, height: u32) -> MipmapLevel {
        MipmapLevel {
            level: 1,
            width,
            height,
            offset: 0,
            size: 0,
        }
    }

    #[test]
    fn test_bytes_are_taken_verbatim() {
        let payload = [1, 2, 3, 4, 5, 6, 7, 8, 0xAA];
        let pixels = raw3_to_bgra(&payload, &level(2, 1)).unwrap();
        assert_eq!(pixels, vec![Bgra::new(1, 2, 3, 4), Bgra::new(5, 6, 7, 8)]);
    }

    #[test]
    fn test_short_payload() {
        let err = raw3_to_bgra(&[0; 15], &level(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedPayload {
                level: 1,
                needed: 16,
                actual: 15
            }
        ));
    }
}
