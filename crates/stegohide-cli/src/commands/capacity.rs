use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how much data an image can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image such as PNG or JPEG
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media file",
        required = true
    )]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let report = stegohide_core::api::inspect::prepare()
            .with_image(&self.media)
            .execute()?;

        println!(
            "{}x{} pixels, {} channel(s)",
            report.width, report.height, report.channels
        );
        println!("capacity: {} bits", report.capacity_bits);
        println!("maximum payload: {} bytes", report.max_payload_bytes);

        Ok(())
    }
}
