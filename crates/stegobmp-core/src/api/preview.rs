use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::error;

use super::read_media;
use crate::media::{BmpImage, CodecOptions};
use crate::{Result, StegoError};

pub fn prepare() -> PreviewApi {
    PreviewApi::default()
}

/// Exports the pixels of a BMP as PNG.
///
/// Rows are written in the order they are stored, a bottom-up BMP therefore
/// shows upside down, just like the pixel data is handled everywhere else.
#[derive(Default, Debug)]
pub struct PreviewApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl PreviewApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let bmp = BmpImage::parse_with_options(&read_media(&image)?, &self.options)?;
        let (width, height) = bmp.dimensions();
        let preview =
            RgbaImage::from_raw(width, height, bmp.to_rgba()).ok_or(StegoError::PreviewEncodingError)?;

        preview
            .save_with_format(&output, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving preview: {e}");
                StegoError::PreviewEncodingError
            })
    }
}
