use std::path::{Path, PathBuf};

use log::info;

use super::{read_media, write_media};
use crate::media::{BmpImage, CodecOptions, GradientKey, ImageProcessor, PatternChoice, PatternId};
use crate::{Result, StegoError};

pub fn prepare() -> SynthesizeApi {
    SynthesizeApi::default()
}

#[derive(Debug)]
pub struct SynthesizeApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    choice: PatternChoice,
    options: CodecOptions,
}

impl Default for SynthesizeApi {
    fn default() -> Self {
        Self {
            image: None,
            output: None,
            choice: PatternChoice::new(PatternId::DiagonalStripes, GradientKey::default()),
            options: CodecOptions::default(),
        }
    }
}

impl SynthesizeApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The source image, only its header and dimensions are used
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_pattern(mut self, pattern: PatternId) -> Self {
        self.choice.pattern = pattern;
        self
    }

    pub fn with_gradient(mut self, gradient: GradientKey) -> Self {
        self.choice.gradient = gradient;
        self
    }

    pub fn with_choice(mut self, choice: PatternChoice) -> Self {
        self.choice = choice;
        self
    }

    /// Renders the pattern and writes the new BMP, returns the choice that was used
    pub fn execute(self) -> Result<PatternChoice> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let source = BmpImage::parse_with_options(&read_media(&image)?, &self.options)?;
        let rendered = ImageProcessor::from(self.choice).render(&source)?;
        write_media(&output, &rendered.to_bytes()?)?;
        info!("{} written to {output:?}", self.choice);

        Ok(self.choice)
    }
}
