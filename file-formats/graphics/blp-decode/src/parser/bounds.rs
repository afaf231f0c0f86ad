//! Bounds checking for mipmap payloads

use super::error::Error;
use super::types::ParseResult;
use log::error;

/// Check that `size` bytes starting at `offset` lie inside `input`
pub fn check_bounds(input: &[u8], offset: u32, size: u32, level: usize) -> ParseResult<()> {
    let end = (offset as usize).checked_add(size as usize);
    match end {
        Some(end) if end <= input.len() => Ok(()),
        _ => {
            error!(
                "Offset+size of mipmap {} is out of bounds! {} + {} > {}",
                level,
                offset,
                size,
                input.len()
            );
            Err(Error::TruncatedPayload {
                level,
                offset,
                size,
                actual: input.len(),
            })
        }
    }
}

/// Get a slice from input data after bounds checking
pub fn get_bounded_slice(input: &[u8], offset: u32, size: u32, level: usize) -> ParseResult<&[u8]> {
    check_bounds(input, offset, size, level)?;
    let start = offset as usize;
    Ok(&input[start..start + size as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bounds() {
        let data = vec![1, 2, 3, 4, 5];
        assert!(check_bounds(&data, 0, 3, 0).is_ok());
        assert!(check_bounds(&data, 2, 3, 0).is_ok());
        assert!(check_bounds(&data, 0, 5, 0).is_ok());
        assert!(check_bounds(&data, 5, 0, 0).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let data = vec![1, 2, 3];
        assert!(check_bounds(&data, 5, 1, 0).is_err());
        assert!(check_bounds(&data, 1, 3, 0).is_err()); // 1 + 3 > 3
        assert!(check_bounds(&data, 0, 4, 0).is_err()); // 0 + 4 > 3
        assert!(check_bounds(&data, u32::MAX, u32::MAX, 0).is_err());
    }

    #[test]
    fn test_get_bounded_slice() {
        let data = vec![1, 2, 3, 4, 5];
        let slice = get_bounded_slice(&data, 1, 3, 0).unwrap();
        assert_eq!(slice, &[2, 3, 4]);

        match get_bounded_slice(&data, 4, 2, 7) {
            Err(Error::TruncatedPayload {
                level,
                offset,
                size,
                actual,
            }) => assert_eq!((level, offset, size, actual), (7, 4, 2, 5)),
            other => panic!("unexpected result {other:?}"),
        }
    }
}
