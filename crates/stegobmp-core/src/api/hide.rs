use std::path::{Path, PathBuf};

use log::info;

use super::{read_media, write_media};
use crate::media::{BmpImage, CodecOptions, ImageProcessor, PatternChoice};
use crate::{LsbCodec, Result, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    pattern: Option<PatternChoice>,
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

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Render this pattern first and hide the message in the rendered image
    pub fn with_pattern(mut self, choice: PatternChoice) -> Self {
        self.pattern = Some(choice);
        self
    }

    /// If `None` is passed, the message is hidden in the pixels of the image as they are
    pub fn use_pattern(mut self, choice: Option<PatternChoice>) -> Self {
        self.pattern = choice;
        self
    }

    pub fn execute(self) -> Result<()> {
        let message = match self.message {
            Some(message) if !message.is_empty() => message,
            _ => return Err(StegoError::MissingMessage),
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let source = BmpImage::parse_with_options(&read_media(&image)?, &self.options)?;
        let carrier = match self.pattern {
            Some(choice) => ImageProcessor::from(choice).render(&source)?,
            None => source,
        };

        let secret = LsbCodec::embed(message.as_bytes(), &carrier.to_bytes()?)?;
        write_media(&output, &secret)?;
        info!("message of {} bytes hidden in {output:?}", message.len());

        Ok(())
    }
}
