//! RGBA image buffer passed between the renderer and reference stores.

/// Image data produced by the snapshot renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel, row-major).
    pub data: Vec<u8>,
}

impl Image {
    /// Create a new transparent image with the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    /// Create an image filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Raw bytes of the image.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels in the image.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the pixel at a position, or `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Set the pixel at a position. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            let idx = ((y * self.width + x) * 4) as usize;
            self.data[idx..idx + 4].copy_from_slice(&rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let img = Image::new(100, 50);
        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.data.len(), 100 * 50 * 4);
        assert_eq!(img.pixel_count(), 5000);
    }

    #[test]
    fn test_filled() {
        let img = Image::filled(10, 10, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(9, 9), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_get_set_pixel() {
        let mut img = Image::new(10, 10);
        img.set_pixel(5, 5, [255, 128, 64, 255]);
        assert_eq!(img.get_pixel(5, 5), Some([255, 128, 64, 255]));
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let img = Image::new(10, 10);
        assert_eq!(img.get_pixel(10, 0), None);
        assert_eq!(img.get_pixel(0, 10), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_ignored() {
        let mut img = Image::new(2, 2);
        img.set_pixel(5, 5, [1, 2, 3, 4]);
        assert!(img.data.iter().all(|&b| b == 0));
    }
}
