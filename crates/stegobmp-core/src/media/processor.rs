use log::debug;

use super::bmp::{BmpImage, BYTES_PER_PIXEL};
use super::color::GradientKey;
use super::pattern::{color_at, PatternChoice, PatternId};
use crate::result::Result;

/// Synthesizes new pixel data for the dimensions of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageProcessor {
    choice: PatternChoice,
}

impl ImageProcessor {
    pub fn new(pattern: PatternId, gradient: GradientKey) -> Self {
        Self {
            choice: PatternChoice::new(pattern, gradient),
        }
    }

    pub fn choice(&self) -> PatternChoice {
        self.choice
    }

    /// A fresh B,G,R pixel buffer of the same dimensions as `image`, filled row by row.
    ///
    /// The pixels of `image` itself are never looked at, only its size matters.
    pub fn synthesize(&self, image: &BmpImage) -> Vec<u8> {
        let (width, height) = image.dimensions();
        let gradient = self.choice.gradient.gradient();
        debug!("synthesizing {width}x{height} pixels: {}", self.choice);

        let mut pixels = Vec::with_capacity(image.pixels().len());
        for y in 0..height {
            for x in 0..width {
                let [r, g, b] = color_at(x, y, width, height, self.choice.pattern, &gradient);
                pixels.extend_from_slice(&[b, g, r]);
            }
        }
        debug_assert_eq!(pixels.len(), width as usize * height as usize * BYTES_PER_PIXEL);

        pixels
    }

    /// The synthesized pixels wrapped into the header of `image`, as a new image.
    pub fn render(&self, image: &BmpImage) -> Result<BmpImage> {
        image.with_pixels(self.synthesize(image))
    }
}

impl From<PatternChoice> for ImageProcessor {
    fn from(choice: PatternChoice) -> Self {
        Self { choice }
    }
}
