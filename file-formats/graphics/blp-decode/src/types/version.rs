use std::fmt;

/// Container sub-version, detected from the four magic bytes at the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlpVersion {
    /// `BLP1`: Warcraft III era files, JPEG or palettized content with the
    /// palette (or JPEG header) stored after the fixed header
    Blp1,
    /// `BLP2`: World of Warcraft files with an inline palette and DXT support
    Blp2,
}

impl BlpVersion {
    /// Match the magic bytes exactly. Any other value (including other case
    /// or `BLP0`/`BLP3`) is not recognized.
    pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
        match &magic {
            b"BLP1" => Some(Self::Blp1),
            b"BLP2" => Some(Self::Blp2),
            _ => None,
        }
    }

    /// Magic bytes written at the start of a file of this version
    pub fn to_magic(self) -> [u8; 4] {
        match self {
            Self::Blp1 => *b"BLP1",
            Self::Blp2 => *b"BLP2",
        }
    }
}

impl fmt::Display for BlpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blp1 => write!(f, "BLP1"),
            Self::Blp2 => write!(f, "BLP2"),
        }
    }
}
