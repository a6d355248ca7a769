use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

pub use image::RgbaImage;
use image::ImageFormat;
use log::error;

use crate::capacity::suggest_dimensions;
use crate::error::SteganoError;
use crate::result::Result;

use super::{CodecOptions, Persist};

/// a carrier image for steganography, always held as 8 bit RGBA pixels
#[derive(Debug, Clone)]
pub struct Media {
    image: RgbaImage,
}

impl Media {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// opens a carrier image file, the extension decides the format
    pub fn from_file(f: &Path) -> Result<Self> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(SteganoError::UnsupportedMedia);
        };

        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "bmp" => Ok(Self::from_image(
                image::open(f)
                    .map_err(|e| {
                        error!("Error opening image {f:?}: {e}");
                        SteganoError::InvalidImageMedia
                    })?
                    .to_rgba8(),
            )),
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    /// decodes a carrier image from memory, the format is guessed from its content
    pub fn from_memory(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data).map_err(|e| {
            error!("Error decoding image from memory: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Ok(Self::from_image(image.to_rgba8()))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// maximum number of code units this carrier can take with the given options
    pub fn capacity(&self, opts: &CodecOptions) -> usize {
        opts.capacity(self.image.as_raw().len())
    }

    pub fn hide_text(&mut self, text: &str, opts: &CodecOptions) -> Result<&mut Self> {
        let (width, height) = self.image.dimensions();

        opts.hide_text(&mut self.image, text).map_err(|e| match e {
            SteganoError::MessageTooLarge {
                required,
                available,
            } => {
                error!("Error encoding image: {required} bits required, {available} available");
                let (w, h) = suggest_dimensions(width, height, required);

                SteganoError::ImageCapacityError(width as _, height as _, w, h)
            }
            other => other,
        })?;

        Ok(self)
    }

    pub fn unveil_text(&self, opts: &CodecOptions) -> Result<String> {
        opts.unveil_text(self.image.as_raw())
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }

    /// serializes the carrier as PNG into memory
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.save_to_writer(&mut buffer)?;

        Ok(buffer.into_inner())
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let ext = file
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("png") => {}
            Some("jpg") | Some("jpeg") => return Err(SteganoError::LossyTargetFormat),
            _ => return Err(SteganoError::UnsupportedMedia),
        }

        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}
