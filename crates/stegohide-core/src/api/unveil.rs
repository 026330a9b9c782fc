use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::CarrierImage;
use crate::{Result, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_image: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilApi {
    pub fn with_secret_image<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// also store the unveiled bytes in this file
    pub fn with_output_file<A: AsRef<Path>>(mut self, output_file: A) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file<A: AsRef<Path>>(mut self, output_file: Option<A>) -> Self {
        self.output_file = output_file.map(|f| f.as_ref().to_path_buf());
        self
    }

    /// Unveils the hidden bytes and returns them.
    pub fn execute(self) -> Result<Vec<u8>> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegoError::CarrierNotSet);
        };

        let data = CarrierImage::from_file(&secret_image)?.unveil_data()?;
        info!("unveiled {} bytes from {secret_image:?}", data.len());

        if let Some(output_file) = self.output_file {
            let mut target =
                File::create(&output_file).map_err(|source| StegoError::WriteError { source })?;
            target
                .write_all(&data)
                .map_err(|source| StegoError::WriteError { source })?;
        }

        Ok(data)
    }

    /// Unveils the hidden bytes into the output file and returns how many were written.
    pub fn execute_to_file(self) -> Result<usize> {
        if self.output_file.is_none() {
            return Err(StegoError::TargetNotSet);
        }

        Ok(self.execute()?.len())
    }

    /// Unveils a hidden text message, fails if the hidden bytes are not valid UTF-8.
    pub fn execute_text(self) -> Result<String> {
        Ok(String::from_utf8(self.execute()?)?)
    }
}
