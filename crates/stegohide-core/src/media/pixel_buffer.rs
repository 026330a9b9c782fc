use image::{ColorType, DynamicImage, ImageBuffer, Pixel};

use crate::capacity::capacity;
use crate::{Result, StegoError};

/// Owned 8-bit pixel data of a carrier image.
///
/// Pixels are stored row by row, left to right, each pixel as `channels`
/// consecutive bytes (e.g. `R G B A`). Width, height and channel layout are
/// fixed at construction, the codec only ever changes channel values in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// constructor for raw interleaved pixel data
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let expected = capacity(width, height, channels)?;
        if data.len() != expected {
            return Err(StegoError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// creates a buffer where every channel of every pixel is computed by `f(x, y, channel)`
    pub fn from_fn<F>(width: u32, height: u32, channels: u8, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32, u8) -> u8,
    {
        let len = capacity(width, height, channels)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    data.push(f(x, y, c));
                }
            }
        }

        Self::new(width, height, channels, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bits this buffer can hide, one per channel
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// returns the channels of the pixel at (x, y), `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels as usize;
        let start = (y as usize * self.width as usize + x as usize) * c;
        self.data.get(start..start + c)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// mutable access to the channel values, the length stays untouched
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// the `image` color type matching the channel layout
    pub fn color_type(&self) -> ColorType {
        match self.channels {
            1 => ColorType::L8,
            2 => ColorType::La8,
            3 => ColorType::Rgb8,
            _ => ColorType::Rgba8,
        }
    }

    /// converts back into an `image` buffer, e.g. for further processing by the caller
    pub fn into_dynamic_image(self) -> Result<DynamicImage> {
        let (width, height, channels) = (self.width, self.height, self.channels);
        let invalid = || StegoError::InvalidDimensions {
            width,
            height,
            channels,
        };

        let image = match channels {
            1 => ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageLuma8),
            2 => ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageLumaA8),
            3 => ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageRgb8),
            4 => ImageBuffer::from_raw(width, height, self.data).map(DynamicImage::ImageRgba8),
            _ => None,
        };

        image.ok_or_else(invalid)
    }
}

impl<P> TryFrom<ImageBuffer<P, Vec<u8>>> for PixelBuffer
where
    P: Pixel<Subpixel = u8>,
{
    type Error = StegoError;

    fn try_from(image: ImageBuffer<P, Vec<u8>>) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, P::CHANNEL_COUNT, image.into_raw())
    }
}

impl TryFrom<DynamicImage> for PixelBuffer {
    type Error = StegoError;

    /// Gray images stay gray (with or without alpha), other images with alpha become RGBA,
    /// all others RGB. Higher bit depths are reduced to 8 bit.
    fn try_from(image: DynamicImage) -> Result<Self> {
        match image.color() {
            ColorType::L8 | ColorType::L16 => image.into_luma8().try_into(),
            ColorType::La8 | ColorType::La16 => image.into_luma_alpha8().try_into(),
            color if color.has_alpha() => image.into_rgba8().try_into(),
            _ => image.into_rgb8().try_into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_4x4_rgb_image;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn should_reject_data_of_wrong_length() {
        match PixelBuffer::new(2, 2, 3, vec![0; 11]) {
            Err(StegoError::BufferSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("expected BufferSizeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_zero_area() {
        assert!(matches!(
            PixelBuffer::new(0, 2, 3, vec![]),
            Err(StegoError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn should_address_pixels_row_major() {
        let buffer = prepare_4x4_rgb_image();
        assert_eq!(buffer.pixel(0, 0), Some(&[0, 1, 2][..]));
        assert_eq!(buffer.pixel(1, 0), Some(&[3, 4, 5][..]));
        assert_eq!(buffer.pixel(0, 1), Some(&[12, 13, 14][..]));
        assert_eq!(buffer.pixel(4, 0), None);
        assert_eq!(buffer.pixel(0, 4), None);
    }

    #[test]
    fn should_keep_layout_of_image_buffers() {
        let rgb = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 7]));
        let buffer = PixelBuffer::try_from(rgb.clone()).unwrap();
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.capacity(), 18);
        assert_eq!(buffer.pixel(2, 1), Some(&[2, 1, 7][..]));

        let back = buffer.into_dynamic_image().unwrap();
        assert_eq!(back.into_rgb8(), rgb);
    }

    #[test]
    fn should_pick_rgba_for_images_with_alpha() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        let buffer = PixelBuffer::try_from(DynamicImage::ImageRgba8(rgba)).unwrap();
        assert_eq!(buffer.channels(), 4);
        assert_eq!(buffer.color_type(), ColorType::Rgba8);

        let rgb16 = DynamicImage::new_rgb16(2, 2);
        let buffer = PixelBuffer::try_from(rgb16).unwrap();
        assert_eq!(buffer.channels(), 3);
        assert_eq!(buffer.color_type(), ColorType::Rgb8);
    }

    #[test]
    fn should_keep_gray_images_gray() {
        let luma = DynamicImage::new_luma8(2, 2);
        let buffer = PixelBuffer::try_from(luma).unwrap();
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.color_type(), ColorType::L8);

        let luma_alpha = DynamicImage::new_luma_a16(2, 2);
        let buffer = PixelBuffer::try_from(luma_alpha).unwrap();
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.color_type(), ColorType::La8);
    }

    #[test]
    fn should_reject_empty_images() {
        let empty = RgbImage::new(0, 0);
        assert!(matches!(
            PixelBuffer::try_from(empty),
            Err(StegoError::InvalidDimensions { .. })
        ));
    }
}
