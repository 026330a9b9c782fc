//! Capacity planning for LSB carriers.
//!
//! Every 8-bit channel of every pixel holds exactly one bit of hidden data,
//! so an image offers `width * height * channels` bits. The end marker
//! ([`DELIMITER_V1`](crate::media::image::DELIMITER_V1)) is part of the hidden stream and has to fit as well.

use crate::media::image::DELIMITER_BITS;
use crate::{Result, StegoError};

/// Number of channels a pixel may have: gray, gray+alpha, RGB or RGBA
pub const SUPPORTED_CHANNELS: std::ops::RangeInclusive<u8> = 1..=4;

/// Returns the number of bits an image with the given layout can hide.
///
/// ```rust
/// use stegohide_core::capacity;
///
/// assert_eq!(capacity(4, 4, 3).unwrap(), 48);
/// assert!(capacity(0, 4, 3).is_err());
/// ```
pub fn capacity(width: u32, height: u32, channels: u8) -> Result<usize> {
    let invalid = || StegoError::InvalidDimensions {
        width,
        height,
        channels,
    };

    if width == 0 || height == 0 || !SUPPORTED_CHANNELS.contains(&channels) {
        return Err(invalid());
    }

    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(channels as usize))
        .ok_or_else(invalid)
}

/// Returns how many payload bytes fit into an image, after reserving room for the end marker.
pub fn max_payload_bytes(width: u32, height: u32, channels: u8) -> Result<usize> {
    Ok(payload_bytes_for(capacity(width, height, channels)?))
}

/// Number of bits needed to hide `payload_len` bytes including the end marker.
pub fn required_bits(payload_len: usize) -> usize {
    payload_len.saturating_mul(8).saturating_add(DELIMITER_BITS)
}

pub(crate) fn payload_bytes_for(capacity_bits: usize) -> usize {
    capacity_bits.saturating_sub(DELIMITER_BITS) / 8
}
