use std::path::{Path, PathBuf};

use log::info;

use crate::media::{CodecOptions, Media, Persist};
use crate::SteganoError;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier image, it is only read and never overwritten
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The PNG file the carrier with the hidden message is written to
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(message) = self.message.filter(|m| !m.is_empty()) else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let mut media = Media::from_file(&image)?;
        media
            .hide_text(&message, &self.options)?
            .save_as(&output)?;
        info!("hid {} characters in {output:?}", message.chars().count());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_carrier;
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        Media::from_image(prepare_carrier(64, 64))
            .save_as(&carrier)
            .expect("Failed to write carrier");

        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert!(temp_dir.path().join("image-with-secret.png").exists());
    }

    #[test]
    fn should_insist_on_a_message() {
        let result = prepare()
            .with_image("carrier.png")
            .with_output("out.png")
            .use_message(Some(""))
            .execute();

        assert!(matches!(result, Err(SteganoError::MissingMessage)));
    }

    #[test]
    fn should_insist_on_carrier_and_target() {
        assert!(matches!(
            prepare().with_message("x").with_output("out.png").execute(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("x").with_image("in.png").execute(),
            Err(SteganoError::TargetNotSet)
        ));
    }
}
