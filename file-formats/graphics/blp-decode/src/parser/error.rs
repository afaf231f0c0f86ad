use thiserror::Error;

/// Errors that appear when loading from the file system
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file was read but is not a BLP file the parser understands
    #[error("Failed to parse {0}")]
    Parsing(std::path::PathBuf, #[source] Error),
    /// File system error when reading the BLP file
    #[error("File system error with file {0}")]
    FileSystem(std::path::PathBuf, #[source] std::io::Error),
}

/// Errors that the BLP parser can produce
#[derive(Debug, Error)]
pub enum Error {
    /// Magic bytes are neither `BLP1` nor `BLP2`
    #[error("Unexpected magic value {0}. The file format is not BLP or not supported.")]
    UnrecognizedFormat(String),
    /// The buffer ends before the header (or what follows it) is complete
    #[error("Buffer ends inside the header: needed {needed} bytes, got {actual}")]
    TruncatedBuffer {
        /// Bytes needed to finish the read
        needed: usize,
        /// Bytes available in the buffer
        actual: usize,
    },
    /// A mipmap payload extends beyond the end of the buffer
    #[error("Mipmap {level} at offset {offset} with size {size} exceeds buffer of {actual} bytes")]
    TruncatedPayload {
        /// Mipmap level being located
        level: usize,
        /// Offset of the payload
        offset: u32,
        /// Size of the payload
        size: u32,
        /// Bytes available in the buffer
        actual: usize,
    },
    /// Header fields describe an encoding this library cannot classify
    #[error("Unsupported encoding: {0}")]
    UnsupportedVariant(String),
    /// The mipmap table is empty, there is no image to decode
    #[error("The file has no mipmap levels")]
    NoMipLevels,
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl Error {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        Error::Context(context.to_owned(), Box::new(self))
    }

    /// The underlying error with every context layer removed
    pub fn root(&self) -> &Self {
        match self {
            Error::Context(_, inner) => inner.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_strips_context() {
        let err = Error::NoMipLevels
            .with_context("mipmap")
            .with_context("decode");
        assert!(matches!(err.root(), Error::NoMipLevels));
        assert_eq!(
            err.to_string(),
            "Context: decode. Error: Context: mipmap. Error: The file has no mipmap levels"
        );
    }
}
