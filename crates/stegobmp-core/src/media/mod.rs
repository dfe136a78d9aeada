pub mod bmp;
pub mod codec_options;
pub mod color;
pub mod pattern;
pub mod processor;

pub use bmp::BmpImage;
pub use codec_options::CodecOptions;
pub use color::{ColorGradient, GradientKey, Rgb};
pub use pattern::{PatternChoice, PatternId};
pub use processor::ImageProcessor;
