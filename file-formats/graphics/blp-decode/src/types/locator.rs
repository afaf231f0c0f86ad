/// Maximum number of mipmap levels a BLP header can address
pub const MAX_MIPMAPS: usize = 16;

/// Offsets and sizes of every mipmap level inside the file.
///
/// Both BLP1 and BLP2 store two 16-entry tables. A level is present while its
/// offset is non-zero; the first zero offset terminates the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MipmapTable {
    /// Byte offsets of each mipmap level from the start of the file
    pub offsets: [u32; MAX_MIPMAPS],
    /// Byte sizes of each mipmap level
    pub sizes: [u32; MAX_MIPMAPS],
}

impl MipmapTable {
    /// Number of leading levels with a non-zero offset
    pub fn count(&self) -> usize {
        self.offsets
            .iter()
            .position(|&offset| offset == 0)
            .unwrap_or(MAX_MIPMAPS)
    }

    /// Offset and size of a level, if it exists in the table
    pub fn entry(&self, level: usize) -> Option<(u32, u32)> {
        if level < self.count() {
            Some((self.offsets[level], self.sizes[level]))
        } else {
            None
        }
    }
}
