//! Owned RGB pixel data handed to and returned from the rasterizer.

use super::ApplyError;

/// An RGB8 image in row-major order, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap `pixels`, checking that the length matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ApplyError> {
        let expected = Self::expected_len(width, height);
        if pixels.len() != expected {
            return Err(ApplyError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A black buffer of the given size.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; Self::expected_len(width, height)],
        }
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbImage`. `None` if the buffer length is off.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// RGB triple at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 3;
        self.pixels
            .get(idx..idx + 3)
            .map(|rgb| [rgb[0], rgb[1], rgb[2]])
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Check the buffer is non-empty and its length matches its dimensions.
    pub fn validate(&self) -> Result<(), ApplyError> {
        if self.width == 0 || self.height == 0 {
            return Err(ApplyError::ZeroDimensions);
        }
        let expected = Self::expected_len(self.width, self.height);
        if self.pixels.len() != expected {
            return Err(ApplyError::BufferSizeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 12]).is_ok());
        assert_eq!(
            PixelBuffer::new(2, 2, vec![0; 11]),
            Err(ApplyError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            })
        );
    }

    #[test]
    fn test_rgb_image_round_trip() {
        let mut img = image::RgbImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgb([10, 20, 30]));
        let buffer = PixelBuffer::from_rgb_image(img);
        assert_eq!(buffer.width, 3);
        assert_eq!(buffer.height, 2);
        assert_eq!(buffer.pixel(2, 1), Some([10, 20, 30]));
        let back = buffer.to_rgb_image().expect("length matches");
        assert_eq!(back.get_pixel(2, 1), &image::Rgb([10, 20, 30]));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let buffer = PixelBuffer::blank(2, 2);
        assert_eq!(buffer.pixel(0, 0), Some([0, 0, 0]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel_count(), 4);
        assert_eq!(buffer.byte_size(), 12);
    }

    #[test]
    fn test_validate() {
        assert!(PixelBuffer::blank(4, 3).validate().is_ok());
        assert_eq!(
            PixelBuffer::blank(0, 3).validate(),
            Err(ApplyError::ZeroDimensions)
        );
        assert!(PixelBuffer::blank(0, 3).is_empty());
    }
}
