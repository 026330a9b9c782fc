use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{GenericImageView, ImageOutputFormat};
use log::{debug, error};

use super::image::LsbCodec;
use super::{PixelBuffer, Persist};
use crate::error::StegoError;
use crate::result::Result;

/// file extensions accepted as carrier images
pub const SUPPORTED_CARRIER_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// an image carrying (or about to carry) hidden data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierImage {
    pixels: PixelBuffer,
}

impl CarrierImage {
    pub fn from_pixels(pixels: PixelBuffer) -> Self {
        Self { pixels }
    }

    /// Loads a PNG or JPEG file. JPEG carriers are fine as input, the result has to be saved as PNG.
    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = lowercase_extension(f).ok_or(StegoError::UnsupportedMedia)?;
        if !SUPPORTED_CARRIER_EXTENSIONS.contains(&ext.as_str()) {
            return Err(StegoError::UnsupportedMedia);
        }

        let image = image::open(f).map_err(|e| {
            error!("Error opening image {f:?}: {e}");
            StegoError::InvalidImageMedia
        })?;
        let (width, height) = image.dimensions();
        debug!("loaded carrier {f:?} with {width}x{height} pixels");

        Ok(Self::from_pixels(image.try_into()?))
    }

    /// Loads an image from an in memory file, the format is guessed from its content.
    pub fn from_memory(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes).map_err(|e| {
            error!("Error decoding image from memory: {e}");
            StegoError::InvalidImageMedia
        })?;

        Ok(Self::from_pixels(image.try_into()?))
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.pixels
    }

    pub fn hide_data(&mut self, data: &[u8]) -> Result<&mut Self> {
        LsbCodec::encode(&mut self.pixels, data)?;

        Ok(self)
    }

    pub fn unveil_data(&self) -> Result<Vec<u8>> {
        LsbCodec::decode(&self.pixels)
    }

    /// Writes the image PNG encoded, the only format that keeps every bit.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        let (width, height) = self.pixels.dimensions();
        image::write_buffer_with_format(
            &mut writer,
            self.pixels.as_raw(),
            width,
            height,
            self.pixels.color_type(),
            ImageOutputFormat::Png,
        )
        .map_err(|e| {
            error!("Error saving image: {e}");
            StegoError::ImageEncodingError
        })?;

        writer
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}

impl Persist for CarrierImage {
    /// Saves as PNG, refuses any other file extension.
    fn save_as(&self, file: &Path) -> Result<()> {
        ensure_lossless_target(file)?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            StegoError::WriteError { source: e }
        })?;

        self.save_to_writer(BufWriter::new(f))
    }
}

/// fails with [`StegoError::LossyTarget`] unless `file` has a `.png` extension
pub fn ensure_lossless_target(file: &Path) -> Result<()> {
    match lowercase_extension(file).as_deref() {
        Some("png") => Ok(()),
        _ => Err(StegoError::LossyTarget),
    }
}

fn lowercase_extension(f: &Path) -> Option<String> {
    f.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}
