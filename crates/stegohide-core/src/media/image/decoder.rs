use std::io::{Read, Result};

use crate::media::image::iterators::ColorIter;
use crate::media::PixelBuffer;

/// Reads the hidden bit of a color channel
pub trait UnveilBit {
    fn unveil_bit(self) -> bool;
}

impl UnveilBit for &u8 {
    #[inline]
    fn unveil_bit(self) -> bool {
        *self & 1 == 1
    }
}

/// LSB reader on top of a [`PixelBuffer`].
///
/// Yields one byte per 8 channels in scan order, most significant bit first.
/// Trailing channels that do not add up to a full byte are never yielded.
///
/// ## Example of usage
/// ```rust
/// use stegohide_core::media::PixelBuffer;
/// use stegohide_core::media::image::LsbDecoder;
///
/// let carrier = PixelBuffer::new(3, 1, 3, vec![0, 1, 0, 0, 1, 0, 0, 0, 1]).unwrap();
/// let bytes: Vec<u8> = LsbDecoder::new(&carrier).collect();
///
/// assert_eq!(bytes, b"H");
/// ```
pub struct LsbDecoder<'a> {
    colors: ColorIter<'a>,
}

impl<'a> LsbDecoder<'a> {
    pub fn new(carrier: &'a PixelBuffer) -> Self {
        Self {
            colors: ColorIter::new(carrier),
        }
    }
}

impl Iterator for LsbDecoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.colors.len() < 8 {
            return None;
        }

        Some(
            self.colors
                .by_ref()
                .take(8)
                .fold(0u8, |byte, color| (byte << 1) | u8::from(color.unveil_bit())),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bytes = self.colors.len() / 8;
        (bytes, Some(bytes))
    }
}

impl ExactSizeIterator for LsbDecoder<'_> {}

impl Read for LsbDecoder<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut bytes_read = 0;
        for (slot, byte) in buf.iter_mut().zip(Iterator::by_ref(self)) {
            *slot = byte;
            bytes_read += 1;
        }

        Ok(bytes_read)
    }
}
