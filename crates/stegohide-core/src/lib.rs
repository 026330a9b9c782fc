//! # Stegohide Core API
//!
//! Hides arbitrary bytes in the least significant bits of an image and unveils
//! them again. The hidden stream is the payload followed by a fixed end marker
//! ([`DELIMITER_V1`]), one bit per color channel, so no length header is needed.
//!
//! There are 3 layers:
//! - [`LsbCodec`] works on an in-memory [`PixelBuffer`]
//! - [`CarrierImage`] loads PNG/JPEG carriers and persists them as PNG
//! - [`api`] offers file based builders for hiding, unveiling and inspecting
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbImage::from_pixel(32, 32, image::Rgb([200, 120, 40]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! stegohide_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegohide_core::api::unveil::prepare()
//!     .with_secret_image(temp_dir.path().join("image-with-a-secret.png"))
//!     .execute_text()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Work on raw pixels
//!
//! ```rust
//! use stegohide_core::{LsbCodec, PixelBuffer, StegoError};
//!
//! let mut pixels = PixelBuffer::new(4, 4, 3, vec![42; 48]).unwrap();
//! LsbCodec::encode(&mut pixels, b"Hi").unwrap();
//! assert_eq!(LsbCodec::decode(&pixels).unwrap(), b"Hi");
//!
//! let untouched = PixelBuffer::new(4, 4, 3, vec![42; 48]).unwrap();
//! assert!(matches!(
//!     LsbCodec::decode(&untouched),
//!     Err(StegoError::NoHiddenDataFound)
//! ));
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod capacity;
pub mod error;
pub mod media;
pub mod result;

pub use crate::capacity::{capacity, max_payload_bytes, required_bits};
pub use crate::error::StegoError;
pub use crate::media::image::{LsbCodec, DELIMITER_BITS, DELIMITER_V1};
pub use crate::media::{CarrierImage, Persist, PixelBuffer};
pub use crate::result::Result;
