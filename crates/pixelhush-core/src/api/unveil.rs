use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::media::{CodecOptions, Media};
use crate::SteganoError;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they need to match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Optionally also write the unveiled message into this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let message = media.unveil_text(&self.options)?;

        if let Some(output_file) = self.output_file {
            let mut target_file =
                File::create(output_file).map_err(|source| SteganoError::WriteError { source })?;
            target_file
                .write_all(message.as_bytes())
                .map_err(|source| SteganoError::WriteError { source })?;
        }

        Ok(message)
    }
}
