use std::path::Path;

use image::ImageFormat;

use crate::error::SteganoError;
use crate::layout::{Embedding, LegacyAlphaTerminated, RepetitionFrame};
use crate::result::Result;

use super::Media;

/// What a carrier image file offers for hiding a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub pixel_count: usize,
    /// code units the repetition frame layout can take
    pub capacity: usize,
    /// code units the legacy alpha layout can take
    pub legacy_capacity: usize,
}

impl CarrierInfo {
    pub fn of(media: &Media, format: ImageFormat) -> Self {
        let (width, height) = media.dimensions();
        let byte_length = media.image().as_raw().len();

        Self {
            format,
            width,
            height,
            pixel_count: width as usize * height as usize,
            capacity: RepetitionFrame.capacity(byte_length),
            legacy_capacity: LegacyAlphaTerminated.capacity(byte_length),
        }
    }

    /// true if saving in this format keeps every channel value as it is
    pub fn is_lossless(&self) -> bool {
        matches!(self.format, ImageFormat::Png | ImageFormat::Bmp)
    }
}

/// analyzes a carrier image file, based on its real pixel dimensions
pub fn inspect(path: &Path) -> Result<CarrierInfo> {
    let format = ImageFormat::from_path(path).map_err(|_| SteganoError::UnsupportedMedia)?;
    let media = Media::from_file(path)?;

    Ok(CarrierInfo::of(&media, format))
}
