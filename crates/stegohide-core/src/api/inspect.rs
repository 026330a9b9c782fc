use std::path::{Path, PathBuf};

use crate::capacity::payload_bytes_for;
use crate::media::CarrierImage;
use crate::{Result, StegoError};

pub fn prepare() -> InspectApi {
    InspectApi::default()
}

/// What a carrier image can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    /// one bit per channel of every pixel
    pub capacity_bits: usize,
    /// payload bytes that fit next to the end marker
    pub max_payload_bytes: usize,
}

#[derive(Default, Debug)]
pub struct InspectApi {
    image: Option<PathBuf>,
}

impl InspectApi {
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<CapacityReport> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let carrier = CarrierImage::from_file(&image)?;
        let pixels = carrier.pixels();

        Ok(CapacityReport {
            width: pixels.width(),
            height: pixels.height(),
            channels: pixels.channels(),
            capacity_bits: pixels.capacity(),
            max_payload_bytes: payload_bytes_for(pixels.capacity()),
        })
    }
}
