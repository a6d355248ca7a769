use std::path::PathBuf;

use clap::Args;
use pixelhush_core::CodecOptions;

use crate::CliResult;

/// Unveils a text message from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Message will be stored in that file instead of printed
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message =
            pixelhush_core::commands::unveil(&self.media, self.output_file.as_deref(), options)?;

        if self.output_file.is_none() {
            println!("{message}");
        }

        Ok(())
    }
}
