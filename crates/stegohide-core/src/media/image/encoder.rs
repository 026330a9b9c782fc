use std::io::{Result, Write};

use log::trace;

use crate::bit_iterator::BitIterator;
use crate::media::image::iterators::ColorIterMut;
use crate::media::PixelBuffer;

/// Stores one bit in the least significant bit of a color channel
pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    #[inline]
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

/// LSB writer on top of a [`PixelBuffer`].
///
/// Every written byte occupies the next 8 channels in scan order, most
/// significant bit first. Only whole bytes are written: when fewer than 8
/// channels are left, `write` returns `Ok(0)` and `write_all` fails with
/// `ErrorKind::WriteZero`. Channels that were not reached stay untouched.
///
/// ## Example of usage
/// ```rust
/// use std::io::Write;
/// use stegohide_core::media::PixelBuffer;
/// use stegohide_core::media::image::LsbEncoder;
///
/// let mut carrier = PixelBuffer::new(2, 2, 4, vec![0x10; 16]).unwrap();
/// LsbEncoder::new(&mut carrier)
///     .write_all(&[0b1010_0000])
///     .expect("Cannot write secret message");
///
/// assert_eq!(carrier.pixel(0, 0), Some(&[0x11, 0x10, 0x11, 0x10][..]));
/// ```
pub struct LsbEncoder<'a> {
    colors: ColorIterMut<'a>,
    bits_written: usize,
}

impl<'a> LsbEncoder<'a> {
    pub fn new(carrier: &'a mut PixelBuffer) -> Self {
        Self {
            colors: ColorIterMut::new(carrier),
            bits_written: 0,
        }
    }

    /// number of channels that have been written to so far
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// number of channels that are still unused
    pub fn bits_remaining(&self) -> usize {
        self.colors.len()
    }
}

impl Write for LsbEncoder<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let bytes = buf.len().min(self.colors.len() / 8);
        for (bit, color) in BitIterator::new(&buf[..bytes]).zip(self.colors.by_ref()) {
            color.hide_bit(bit);
            self.bits_written += 1;
        }
        trace!("hid {bytes} bytes, {} bits in total", self.bits_written);

        Ok(bytes)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
