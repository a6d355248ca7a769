use std::path::PathBuf;

use clap::Args;
use pixelhush_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as PNG, JPEG or BMP, used readonly.
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

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        pixelhush_core::commands::hide(
            &self.media,
            &self.write_to_file,
            Some(self.message),
            options,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::unveil::UnveilArgs;
    use pixelhush_core::SteganoError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn should_hide_a_message_that_unveil_writes_back() {
        let out_dir = TempDir::new().unwrap();
        let carrier = out_dir.path().join("carrier.png");
        image::RgbaImage::from_pixel(40, 40, image::Rgba([90, 160, 30, 255]))
            .save(&carrier)
            .unwrap();
        let secret = out_dir.path().join("secret.png");
        let message_file = out_dir.path().join("message.txt");

        HideArgs {
            media: carrier,
            write_to_file: secret.clone(),
            message: "Déjà vu".to_string(),
        }
        .run(CodecOptions::default())
        .unwrap();
        UnveilArgs {
            media: secret,
            output_file: Some(message_file.clone()),
        }
        .run(CodecOptions::default())
        .unwrap();

        assert_eq!(fs::read_to_string(message_file).unwrap(), "Déjà vu");
    }

    #[test]
    fn should_refuse_a_jpeg_target() {
        let out_dir = TempDir::new().unwrap();
        let carrier = out_dir.path().join("carrier.png");
        image::RgbaImage::new(40, 40).save(&carrier).unwrap();

        let result = HideArgs {
            media: carrier,
            write_to_file: out_dir.path().join("secret.jpg"),
            message: "Hi".to_string(),
        }
        .run(CodecOptions::default());

        assert!(matches!(result, Err(SteganoError::LossyTargetFormat)));
    }
}
