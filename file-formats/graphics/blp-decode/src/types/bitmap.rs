use super::pixel::Bgra;
use crate::debug::trimmed_collection_fmt;
use ::image::RgbaImage;
use custom_debug::Debug;

/// Decoded mipmap level: dense, row-major BGRA pixels with the top row first,
/// exactly as stored in the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BgraImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// `width * height` pixels
    #[debug(with = trimmed_collection_fmt)]
    pub pixels: Vec<Bgra>,
}

impl BgraImage {
    /// Pixel at the given coordinates, `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Bgra> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Pixel bytes in blue, green, red, alpha order
    pub fn to_bgra_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.b, p.g, p.r, p.a])
            .collect()
    }

    /// Relabel channels into an RGBA image for raster writers. Rows keep their
    /// stored order.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let raw = self.pixels.iter().flat_map(|p| p.to_rgba()).collect();
        RgbaImage::from_raw(self.width, self.height, raw)
    }
}
