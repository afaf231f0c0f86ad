/// Decoded pixel buffer
pub mod bitmap;
/// Canonical pixel encodings and DXT flavours
pub mod format;
/// BLP1/BLP2 header structures
pub mod header;
/// Parsed descriptor and in-memory file
pub mod image;
/// Mipmap offset/size tables
pub mod locator;
/// Pixel and palette types
pub mod pixel;
/// BLP version definitions
pub mod version;

pub use self::image::*;
pub use bitmap::*;
pub use format::*;
pub use header::*;
pub use locator::*;
pub use pixel::*;
pub use version::*;
