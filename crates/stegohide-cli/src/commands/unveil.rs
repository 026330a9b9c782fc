use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::CliResult;

/// Unveils data hidden in a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data will be stored in that file, otherwise it is printed as text
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let api = stegohide_core::api::unveil::prepare().with_secret_image(&self.media);

        match self.output_file {
            Some(output_file) => {
                let written = api.with_output_file(&output_file).execute_to_file()?;
                println!("{written} bytes written to {}", output_file.display());
            }
            None => println!("{}", api.execute_text().map_err(CliError::from_unveil)?),
        }

        Ok(())
    }
}
