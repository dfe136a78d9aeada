//! Reading and writing of uncompressed 24-bit BMP buffers.
//!
//! Only the handful of header fields needed to locate the pixel array are
//! interpreted, everything before the pixel array is carried along verbatim.
//!
//! Known restrictions:
//! - rows are assumed to be stored contiguously, the BMP rule of padding
//!   every row to a multiple of 4 bytes is not applied
//! - bottom-up and top-down layouts are not distinguished, negative
//!   dimensions are rejected instead of being corrected

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use super::color::Rgb;
use super::CodecOptions;
use crate::error::StegoError;
use crate::result::Result;

pub const MAGIC: &[u8; 2] = b"BM";
pub const BYTES_PER_PIXEL: usize = 3;
/// size of the file header plus a `BITMAPINFOHEADER`, what every plain 24-bit BMP carries
pub const STANDARD_HEADER_LEN: usize = 54;

const PIXEL_OFFSET_AT: usize = 10;
const WIDTH_AT: usize = 18;
const HEIGHT_AT: usize = 22;
const BITS_PER_PIXEL_AT: usize = 28;
const COMPRESSION_AT: usize = 30;
/// bytes needed to read magic, pixel offset, width and height
const FIXED_FIELDS_LEN: usize = HEIGHT_AT + 4;

/// A parsed BMP image. Pixels are stored as B,G,R triples, row after row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpImage {
    header: Vec<u8>,
    width: i32,
    height: i32,
    pixel_offset: u32,
    pixels: Vec<u8>,
}

impl BmpImage {
    /// parses with the default [`CodecOptions`]
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Self::parse_with_options(bytes, &CodecOptions::default())
    }

    pub fn parse_with_options(bytes: &[u8], opts: &CodecOptions) -> Result<Self> {
        let pixel_offset = read_pixel_offset(bytes)?;
        let width = LittleEndian::read_i32(&bytes[WIDTH_AT..]);
        let height = LittleEndian::read_i32(&bytes[HEIGHT_AT..]);
        trace!("BMP header: {width}x{height}, pixel data at {pixel_offset}");

        if width < 0 || height < 0 {
            return Err(StegoError::InvalidFormat("negative image dimensions"));
        }

        if opts.strict_header {
            check_strict_header(bytes, pixel_offset)?;
        }

        let pixel_len = pixel_buffer_len(width, height)
            .filter(|len| *len <= opts.max_pixel_bytes)
            .ok_or(StegoError::ImageTooLarge {
                width,
                height,
                limit: opts.max_pixel_bytes,
            })?;

        let required = pixel_offset.saturating_add(pixel_len);
        if bytes.len() < required {
            return Err(StegoError::TruncatedData {
                required,
                available: bytes.len(),
            });
        }

        debug!("parsed BMP of {width}x{height} with {pixel_len} bytes of pixel data");

        Ok(Self {
            header: bytes[..pixel_offset].to_vec(),
            width,
            height,
            pixel_offset: pixel_offset as u32,
            pixels: bytes[pixel_offset..required].to_vec(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    pub fn pixel_offset(&self) -> u32 {
        self.pixel_offset
    }

    /// the first `pixel_offset` bytes of the source, untouched
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// color of the pixel at `(x, y)` in R,G,B order
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let (width, height) = self.dimensions();
        if x >= width || y >= height {
            return None;
        }
        let at = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
        let bgr = &self.pixels[at..at + BYTES_PER_PIXEL];

        Some([bgr[2], bgr[1], bgr[0]])
    }

    /// a new image sharing this header and dimensions, but carrying `pixels`
    pub fn with_pixels(&self, pixels: Vec<u8>) -> Result<Self> {
        check_pixel_len(self.width, self.height, &pixels)?;

        Ok(Self {
            pixels,
            ..self.clone()
        })
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serialize(&self.header, self.width, self.height, &self.pixels)
    }

    /// converts the B,G,R pixels to R,G,B,A with an opaque alpha channel
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|bgr| [bgr[2], bgr[1], bgr[0], u8::MAX])
            .collect()
    }
}

/// Concatenates the original header with a new pixel buffer.
///
/// `pixels` must hold exactly `width * height * 3` bytes, anything else is a bug of the caller.
pub fn serialize(header: &[u8], width: i32, height: i32, pixels: &[u8]) -> Result<Vec<u8>> {
    check_pixel_len(width, height, pixels)?;

    let mut bytes = Vec::with_capacity(header.len() + pixels.len());
    bytes.extend_from_slice(header);
    bytes.extend_from_slice(pixels);

    Ok(bytes)
}

/// Checks the magic signature and returns where the pixel array starts.
///
/// This is all the steganography engine needs from a serialized buffer.
pub fn read_pixel_offset(bytes: &[u8]) -> Result<usize> {
    if bytes.len() < MAGIC.len() || &bytes[..MAGIC.len()] != MAGIC {
        return Err(StegoError::InvalidFormat("missing BM signature"));
    }
    if bytes.len() < FIXED_FIELDS_LEN {
        return Err(StegoError::TruncatedData {
            required: FIXED_FIELDS_LEN,
            available: bytes.len(),
        });
    }

    let pixel_offset = LittleEndian::read_u32(&bytes[PIXEL_OFFSET_AT..]) as usize;
    if pixel_offset < FIXED_FIELDS_LEN {
        return Err(StegoError::InvalidFormat("pixel data overlaps the header"));
    }
    if pixel_offset > bytes.len() {
        return Err(StegoError::TruncatedData {
            required: pixel_offset,
            available: bytes.len(),
        });
    }

    Ok(pixel_offset)
}

/// `width * height * 3`, or `None` on negative dimensions or overflow
pub fn pixel_buffer_len(width: i32, height: i32) -> Option<usize> {
    let width = usize::try_from(width).ok()?;
    let height = usize::try_from(height).ok()?;

    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
}

fn check_pixel_len(width: i32, height: i32, pixels: &[u8]) -> Result<()> {
    let expected = pixel_buffer_len(width, height).unwrap_or(usize::MAX);
    if expected != pixels.len() {
        return Err(StegoError::PixelBufferMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

fn check_strict_header(bytes: &[u8], pixel_offset: usize) -> Result<()> {
    if pixel_offset < COMPRESSION_AT + 4 {
        return Err(StegoError::InvalidFormat("header too short for an info header"));
    }
    let bits_per_pixel = LittleEndian::read_u16(&bytes[BITS_PER_PIXEL_AT..]);
    let compression = LittleEndian::read_u32(&bytes[COMPRESSION_AT..]);
    if bits_per_pixel != 24 || compression != 0 {
        return Err(StegoError::UnsupportedFormat {
            bits_per_pixel,
            compression,
        });
    }

    Ok(())
}

/// Builds a plain 54 byte header for a 24-bit image of the given size.
///
/// Mainly useful for tests and for creating fresh canvases.
pub fn standard_header(width: i32, height: i32) -> Vec<u8> {
    let pixel_len = pixel_buffer_len(width, height).unwrap_or(0);
    let mut header = vec![0u8; STANDARD_HEADER_LEN];

    header[..2].copy_from_slice(MAGIC);
    LittleEndian::write_u32(&mut header[2..], (STANDARD_HEADER_LEN + pixel_len) as u32);
    LittleEndian::write_u32(&mut header[PIXEL_OFFSET_AT..], STANDARD_HEADER_LEN as u32);
    LittleEndian::write_u32(&mut header[14..], 40);
    LittleEndian::write_i32(&mut header[WIDTH_AT..], width);
    LittleEndian::write_i32(&mut header[HEIGHT_AT..], height);
    LittleEndian::write_u16(&mut header[26..], 1);
    LittleEndian::write_u16(&mut header[BITS_PER_PIXEL_AT..], 24);
    LittleEndian::write_u32(&mut header[34..], pixel_len as u32);

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmp(width: i32, height: i32) -> Vec<u8> {
        let pixels: Vec<u8> = (0..pixel_buffer_len(width, height).unwrap())
            .map(|i| i as u8)
            .collect();
        serialize(&standard_header(width, height), width, height, &pixels).unwrap()
    }

    #[test]
    fn should_parse_dimensions_and_offset() {
        let image = BmpImage::parse(&bmp(3, 2)).expect("Cannot parse BMP");

        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel_offset(), 54);
        assert_eq!(image.header().len(), 54);
        assert_eq!(image.pixels().len(), 18);
        assert_eq!(image.pixels()[0], 0);
        assert_eq!(image.pixels()[17], 17);
    }

    #[test]
    fn should_reject_missing_signature() {
        let mut bytes = bmp(2, 2);
        bytes[0] = b'P';

        assert!(matches!(
            BmpImage::parse(&bytes),
            Err(StegoError::InvalidFormat(_))
        ));
        assert!(matches!(
            BmpImage::parse(b"B"),
            Err(StegoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn should_reject_truncated_pixel_data() {
        let mut bytes = bmp(2, 2);
        bytes.pop();

        match BmpImage::parse(&bytes) {
            Err(StegoError::TruncatedData {
                required,
                available,
            }) => {
                assert_eq!(required, 66);
                assert_eq!(available, 65);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn should_reject_a_pixel_offset_beyond_the_buffer() {
        let mut bytes = bmp(2, 2);
        LittleEndian::write_u32(&mut bytes[PIXEL_OFFSET_AT..], 10_000);

        for result in [
            read_pixel_offset(&bytes).map(|_| ()),
            BmpImage::parse(&bytes).map(|_| ()),
        ] {
            match result {
                Err(StegoError::TruncatedData {
                    required,
                    available,
                }) => {
                    assert_eq!(required, 10_000);
                    assert_eq!(available, 66);
                }
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn should_reject_a_pixel_offset_inside_the_fixed_fields() {
        let mut bytes = bmp(2, 2);
        LittleEndian::write_u32(&mut bytes[PIXEL_OFFSET_AT..], 20);

        assert!(matches!(
            read_pixel_offset(&bytes),
            Err(StegoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn should_reject_header_without_dimensions() {
        assert!(matches!(
            BmpImage::parse(b"BM\0\0\0\0"),
            Err(StegoError::TruncatedData { .. })
        ));
    }

    #[test]
    fn should_reject_negative_dimensions() {
        let mut bytes = bmp(2, 2);
        LittleEndian::write_i32(&mut bytes[HEIGHT_AT..], -2);

        assert!(matches!(
            BmpImage::parse(&bytes),
            Err(StegoError::InvalidFormat(_))
        ));
    }

    #[test]
    fn should_reject_images_beyond_the_limit() {
        let opts = CodecOptions::default().with_max_pixel_bytes(11);

        assert!(matches!(
            BmpImage::parse_with_options(&bmp(2, 2), &opts),
            Err(StegoError::ImageTooLarge { limit: 11, .. })
        ));

        let mut bytes = bmp(1, 1);
        LittleEndian::write_i32(&mut bytes[WIDTH_AT..], i32::MAX);
        LittleEndian::write_i32(&mut bytes[HEIGHT_AT..], i32::MAX);
        assert!(matches!(
            BmpImage::parse(&bytes),
            Err(StegoError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn should_only_check_bit_depth_in_strict_mode() {
        let mut bytes = bmp(2, 2);
        LittleEndian::write_u16(&mut bytes[BITS_PER_PIXEL_AT..], 32);

        assert!(BmpImage::parse(&bytes).is_ok());
        assert!(matches!(
            BmpImage::parse_with_options(&bytes, &CodecOptions::default().with_strict_header(true)),
            Err(StegoError::UnsupportedFormat {
                bits_per_pixel: 32,
                compression: 0
            })
        ));
        assert!(BmpImage::parse_with_options(
            &bmp(2, 2),
            &CodecOptions::default().with_strict_header(true)
        )
        .is_ok());
    }

    #[test]
    fn should_keep_trailing_bytes_out_of_the_pixel_buffer() {
        let mut bytes = bmp(1, 1);
        bytes.extend_from_slice(&[0xaa; 5]);
        let image = BmpImage::parse(&bytes).unwrap();

        assert_eq!(image.pixels(), &[0, 1, 2]);
    }

    #[test]
    fn should_serialize_back_to_the_same_bytes() {
        let bytes = bmp(4, 3);
        let image = BmpImage::parse(&bytes).unwrap();

        assert_eq!(image.to_bytes().unwrap(), bytes);
        assert_eq!(
            serialize(image.header(), 4, 3, BmpImage::parse(&bytes).unwrap().pixels()).unwrap(),
            bytes
        );
    }

    #[test]
    fn should_preserve_an_uncommon_header_verbatim() {
        let mut header = standard_header(1, 1);
        header.extend_from_slice(b"extra");
        let pixel_offset = header.len() as u32;
        LittleEndian::write_u32(&mut header[PIXEL_OFFSET_AT..], pixel_offset);
        let bytes = serialize(&header, 1, 1, &[7, 8, 9]).unwrap();

        let image = BmpImage::parse(&bytes).unwrap();
        assert_eq!(image.pixel_offset(), 59);
        assert_eq!(image.header(), &header[..]);
        assert_eq!(image.pixels(), &[7, 8, 9]);
    }

    #[test]
    fn should_read_pixels_in_rgb_order() {
        let image = BmpImage::parse(&bmp(2, 1)).unwrap();

        assert_eq!(image.pixel(0, 0), Some([2, 1, 0]));
        assert_eq!(image.pixel(1, 0), Some([5, 4, 3]));
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn should_convert_to_rgba() {
        let image = BmpImage::parse(&bmp(2, 1)).unwrap();

        assert_eq!(image.to_rgba(), vec![2, 1, 0, 255, 5, 4, 3, 255]);
    }

    #[test]
    fn should_replace_pixels_keeping_the_header() {
        let image = BmpImage::parse(&bmp(1, 1)).unwrap();
        let other = image.with_pixels(vec![9, 9, 9]).unwrap();

        assert_eq!(other.header(), image.header());
        assert_eq!(other.pixels(), &[9, 9, 9]);
        assert_eq!(image.pixels(), &[0, 1, 2]);
    }
}
