use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::Read;

/// Iterates over the bits of a byte source, most significant bit of each byte first.
///
/// ```rust
/// use stegohide_core::BitIterator;
///
/// let bits: Vec<bool> = BitIterator::new(&[0b1000_0001][..]).collect();
/// assert_eq!(bits, [true, false, false, false, false, false, false, true]);
/// ```
pub struct BitIterator<R: Read> {
    reader: BitReader<R, BigEndian>,
}

impl<R: Read> BitIterator<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::endian(source, BigEndian),
        }
    }
}

impl<R: Read> Iterator for BitIterator<R> {
    type Item = bool;

    /// ends at the end of the source, or on the first read error
    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_bit().ok()
    }
}
