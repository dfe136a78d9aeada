//! # stegobmp Core API
//!
//! Works on uncompressed 24-bit BMP buffers:
//! - [`BmpImage`][bmp] parses and serializes the byte layout
//! - [`ImageProcessor`][proc] renders generative patterns into new pixel data
//! - [`LsbCodec`][lsb] hides and unveils text in the least significant bits
//!
//! The codec never touches the filesystem, the [`api`] module wraps it for files.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use stegobmp_core::media::{GradientKey, PatternChoice, PatternId};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! stegobmp_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_pattern(PatternChoice::new(PatternId::Checkerboard, GradientKey::RedToBlue))
//!     .with_image("tests/images/plain/carrier-image.bmp")
//!     .with_output(temp_dir.path().join("image-with-a-message.bmp"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust
//! let message = stegobmp_core::api::unveil::prepare()
//!     .from_secret_file("tests/images/with_text/hello_world.bmp")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "Hello World!");
//! ```
//!
//! ## Work on buffers
//!
//! ```rust
//! use stegobmp_core::media::bmp::{serialize, standard_header};
//! use stegobmp_core::LsbCodec;
//!
//! let carrier = serialize(&standard_header(8, 8), 8, 8, &[0; 192]).unwrap();
//! let secret = LsbCodec::embed(b"hi!", &carrier).unwrap();
//!
//! assert_eq!(LsbCodec::extract(&secret).unwrap(), "hi!");
//! ```
//!
//! [bmp]: ./media/bmp/struct.BmpImage.html
//! [proc]: ./media/processor/struct.ImageProcessor.html
//! [lsb]: ./lsb_codec/struct.LsbCodec.html

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod commands;
pub mod error;
pub mod history;
pub mod lsb_codec;
pub mod media;
pub mod result;

pub use crate::error::StegoError;
pub use crate::lsb_codec::LsbCodec;
pub use crate::media::{BmpImage, CodecOptions, GradientKey, ImageProcessor, PatternChoice, PatternId};
pub use crate::result::Result;
