use std::path::PathBuf;

use clap::Args;
use log::warn;
use pixelhush_core::CarrierInfo;

use crate::CliResult;

/// Shows how much text a carrier image can take
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Carrier image such as PNG, JPEG or BMP
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> CliResult<()> {
        let info = pixelhush_core::commands::inspect(&self.media)?;

        print!("{}", report(&info));
        if !info.is_lossless() {
            warn!("{:?} carrier at {:?} is lossy", info.format, self.media);
            eprintln!(
                "Warning: {:?} is lossy, the output of hide is always written as PNG",
                info.format
            );
        }

        Ok(())
    }
}

/// Capacities are in bytes, which is one character each with latin1.
fn report(info: &CarrierInfo) -> String {
    format!(
        "Format:          {:?}\n\
         Dimensions:      {}x{}\n\
         Pixels:          {}\n\
         Capacity:        {} bytes\n\
         Legacy capacity: {} bytes\n",
        info.format,
        info.width,
        info.height,
        info.pixel_count,
        info.capacity,
        info.legacy_capacity
    )
}
