use std::path::{Path, PathBuf};

use crate::media::CarrierInfo;
use crate::SteganoError;

pub fn prepare() -> InspectApi {
    InspectApi::default()
}

#[derive(Default, Debug)]
pub struct InspectApi {
    image: Option<PathBuf>,
}

impl InspectApi {
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<CarrierInfo, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };

        crate::media::inspect(&image)
    }
}
