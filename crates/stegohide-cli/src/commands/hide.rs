use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message or a file in an image, the result is always a PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG or JPEG, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the image, files containing the bytes FF FE (e.g. UTF-16LE text) are refused
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        stegohide_core::api::hide::prepare()
            .with_image(&self.media)
            .with_output(&self.write_to_file)
            .use_file(self.data_file)
            .use_message(self.message)
            .execute()?;
        println!("Hidden data stored in {}", self.write_to_file.display());

        Ok(())
    }
}
