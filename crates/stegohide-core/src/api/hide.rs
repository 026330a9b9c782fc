use std::path::{Path, PathBuf};

use log::info;

use crate::media::{ensure_lossless_target, CarrierImage, Persist};
use crate::{Result, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// where the bytes to hide come from, the last one set wins
#[derive(Debug)]
enum Secret {
    Message(String),
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<Secret>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    /// hide a text message, stored as UTF-8
    pub fn with_message(mut self, message: &str) -> Self {
        self.secret = Some(Secret::Message(message.to_string()));
        self
    }

    pub fn use_message<S: AsRef<str>>(self, message: Option<S>) -> Self {
        match message {
            Some(message) => self.with_message(message.as_ref()),
            None => self,
        }
    }

    /// hide the raw content of a file
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.secret = Some(Secret::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_file<A: AsRef<Path>>(self, data_file: Option<A>) -> Self {
        match data_file {
            Some(data_file) => self.with_file(data_file),
            None => self,
        }
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// the target image, must be a `.png` file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(StegoError::MissingMessage);
        };
        ensure_lossless_target(&output)?;

        let data = match secret {
            Secret::Message(message) => message.into_bytes(),
            Secret::File(file) => {
                std::fs::read(&file).map_err(|source| StegoError::ReadError { source })?
            }
        };

        CarrierImage::from_file(&image)?
            .hide_data(&data)?
            .save_as(&output)?;
        info!("hid {} bytes from {image:?} in {output:?}", data.len());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_plain_carrier;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_plain_carrier(temp_dir.path(), "carrier.png", 16, 16);

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");
    }

    #[test]
    fn should_insist_on_all_inputs() {
        let no_image = prepare().with_message("Hi").with_output("out.png").execute();
        assert!(matches!(no_image, Err(StegoError::CarrierNotSet)));

        let no_output = prepare().with_message("Hi").with_image("in.png").execute();
        assert!(matches!(no_output, Err(StegoError::TargetNotSet)));

        let no_secret = prepare().with_image("in.png").with_output("out.png").execute();
        assert!(matches!(no_secret, Err(StegoError::MissingMessage)));
    }

    #[test]
    fn should_refuse_jpeg_output_before_reading_anything() {
        let result = prepare()
            .with_message("Hi")
            .with_image("does-not-exist.png")
            .with_output("out.jpg")
            .execute();

        assert!(matches!(result, Err(StegoError::LossyTarget)));
    }

    #[test]
    fn should_report_unreadable_data_files() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_plain_carrier(temp_dir.path(), "carrier.png", 16, 16);

        let result = prepare()
            .with_file("foofile")
            .with_image(carrier)
            .with_output(temp_dir.path().join("out.png"))
            .execute();

        assert!(matches!(result, Err(StegoError::ReadError { .. })));
    }

    #[test]
    fn should_refuse_utf16_text_files() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_plain_carrier(temp_dir.path(), "carrier.png", 16, 16);
        let data_file = temp_dir.path().join("utf16.txt");
        let output = temp_dir.path().join("out.png");
        // byte order mark followed by "Hi"
        std::fs::write(&data_file, [0xFF, 0xFE, b'H', 0x00, b'i', 0x00])
            .expect("Failed to write data file");

        let result = prepare()
            .with_file(&data_file)
            .with_image(carrier)
            .with_output(&output)
            .execute();

        assert!(matches!(
            result,
            Err(StegoError::PayloadContainsDelimiter { offset: 0 })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn should_report_too_small_carriers() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_plain_carrier(temp_dir.path(), "carrier.png", 2, 2);
        let output = temp_dir.path().join("out.png");

        let result = prepare()
            .with_message("Hello, World!")
            .with_image(carrier)
            .with_output(&output)
            .execute();

        assert!(matches!(
            result,
            Err(StegoError::PayloadTooLarge {
                required: 120,
                available: 12
            })
        ));
        assert!(!output.exists(), "nothing should be written on failure");
    }
}
