use std::io::Write;

use log::debug;

use super::decoder::LsbDecoder;
use super::encoder::LsbEncoder;
use crate::capacity::required_bits;
use crate::media::PixelBuffer;
use crate::{Result, StegoError};

/// End marker of format version 1, hidden right after the payload.
///
/// It is only ever compared at byte boundaries. Since both bytes differ, the
/// last payload byte together with the first marker byte can never be
/// mistaken for the marker.
pub const DELIMITER_V1: [u8; 2] = [0xFF, 0xFE];

/// Bits occupied by the end marker
pub const DELIMITER_BITS: usize = DELIMITER_V1.len() * 8;

/// Stateless LSB codec, the entry point for hiding and unveiling.
///
/// The hidden stream is the payload, most significant bit first, followed by
/// [`DELIMITER_V1`]. One bit goes into each channel in scan order, so
/// `8 * payload.len() + 16` channels are used and all others stay untouched.
pub struct LsbCodec;

impl LsbCodec {
    /// Hides `payload` in `carrier`.
    ///
    /// Either the whole payload and the end marker are hidden, or the carrier is
    /// left as it was and an error is returned.
    ///
    /// ```rust
    /// use stegohide_core::media::PixelBuffer;
    /// use stegohide_core::{LsbCodec, StegoError};
    ///
    /// let mut carrier = PixelBuffer::new(4, 4, 3, vec![0x80; 48]).unwrap();
    /// LsbCodec::encode(&mut carrier, b"Hi").expect("Cannot hide message");
    /// assert_eq!(LsbCodec::decode(&carrier).unwrap(), b"Hi");
    ///
    /// match LsbCodec::encode(&mut carrier, b"0123456789") {
    ///     Err(StegoError::PayloadTooLarge { required, available }) => {
    ///         assert_eq!((required, available), (96, 48));
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn encode(carrier: &mut PixelBuffer, payload: &[u8]) -> Result<()> {
        let required = required_bits(payload.len());
        let available = carrier.capacity();
        if required > available {
            return Err(StegoError::PayloadTooLarge {
                required,
                available,
            });
        }

        if let Some(offset) = find_delimiter(payload) {
            return Err(StegoError::PayloadContainsDelimiter { offset });
        }

        let mut encoder = LsbEncoder::new(carrier);
        encoder.write_all(payload)?;
        encoder.write_all(&DELIMITER_V1)?;
        debug!(
            "hid {} payload bytes using {required} of {available} bits",
            payload.len()
        );

        Ok(())
    }

    /// Unveils the payload hidden in `carrier`.
    ///
    /// Fails with [`StegoError::NoHiddenDataFound`] when the end marker does not
    /// show up at any byte boundary. An empty payload is a valid result.
    pub fn decode(carrier: &PixelBuffer) -> Result<Vec<u8>> {
        let mut payload = Vec::new();
        for byte in LsbDecoder::new(carrier) {
            payload.push(byte);
            if payload.ends_with(&DELIMITER_V1) {
                payload.truncate(payload.len() - DELIMITER_V1.len());
                debug!("unveiled {} payload bytes", payload.len());

                return Ok(payload);
            }
        }
        debug!("no end marker within {} bits", carrier.capacity());

        Err(StegoError::NoHiddenDataFound)
    }
}

/// byte offset of the first end marker inside `payload`
fn find_delimiter(payload: &[u8]) -> Option<usize> {
    payload
        .windows(DELIMITER_V1.len())
        .position(|window| window == DELIMITER_V1)
}
