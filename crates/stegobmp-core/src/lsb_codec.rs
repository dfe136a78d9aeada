//! Hiding a payload in the least significant bits of a serialized BMP.
//!
//! The carrier are all bytes from the pixel data offset up to the end of the buffer.
//! The layout is
//! - 32 carrier bytes holding the payload length as little endian `u32`,
//!   bit `i` of the length in the low bit of carrier byte `i`
//! - 8 carrier bytes per payload byte, least significant bit first
//!
//! There is no marker or checksum. A carrier without a message can still decode
//! a length that looks plausible, so garbage may come back instead of an error.
//! This false positive is inherent to unauthenticated LSB hiding.

use std::io::Cursor;

use bitstream_io::{BitWrite, BitWriter, LittleEndian};
use byteorder::{ReadBytesExt, WriteBytesExt};
use log::{debug, error};

use crate::bit_iterator::BitIterator;
use crate::error::StegoError;
use crate::media::bmp::read_pixel_offset;
use crate::result::Result;

/// carrier bytes used by the length header
pub const LENGTH_HEADER_BITS: usize = u32::BITS as usize;

pub trait HideBit {
    fn hide_bit(self, bit: bool);
}

impl HideBit for &mut u8 {
    fn hide_bit(self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

pub struct LsbCodec;

impl LsbCodec {
    /// Number of payload bytes `bmp` can carry next to the length header.
    pub fn capacity(bmp: &[u8]) -> Result<usize> {
        let carrier_bits = carrier_len(bmp)?;

        Ok(carrier_bits.saturating_sub(LENGTH_HEADER_BITS) / 8)
    }

    /// Hides `payload` in a copy of `bmp`, the input buffer stays as it is.
    pub fn embed(payload: &[u8], bmp: &[u8]) -> Result<Vec<u8>> {
        let pixel_offset = read_pixel_offset(bmp)?;
        let available = bmp.len() - pixel_offset;
        let required = payload
            .len()
            .checked_mul(8)
            .and_then(|bits| bits.checked_add(LENGTH_HEADER_BITS))
            .unwrap_or(usize::MAX);

        let length = match u32::try_from(payload.len()) {
            Ok(length) if required <= available => length,
            _ => {
                error!("payload of {} bytes does not fit into {available} carrier bits", payload.len());
                return Err(StegoError::InsufficientCapacity {
                    required,
                    available,
                });
            }
        };

        let mut header = Vec::with_capacity(LENGTH_HEADER_BITS / 8);
        header.write_u32::<byteorder::LittleEndian>(length)?;

        let mut secret = bmp.to_vec();
        let bits = BitIterator::new(&header[..]).chain(BitIterator::new(payload));
        for (carrier, bit) in secret[pixel_offset..].iter_mut().zip(bits) {
            carrier.hide_bit(bit == 1);
        }
        debug!("embedded {length} bytes using {required} of {available} carrier bits");

        Ok(secret)
    }

    /// Unveils the raw payload bytes, no text decoding involved.
    pub fn extract_raw(bmp: &[u8]) -> Result<Vec<u8>> {
        let pixel_offset = read_pixel_offset(bmp)?;
        let carrier = &bmp[pixel_offset..];
        if carrier.len() < LENGTH_HEADER_BITS {
            return Err(StegoError::CorruptPayload(0));
        }

        let header = unveil_bytes(&carrier[..LENGTH_HEADER_BITS])?;
        let length = Cursor::new(header).read_u32::<byteorder::LittleEndian>()? as usize;
        let max_length = (carrier.len() - LENGTH_HEADER_BITS) / 8;
        if length == 0 || length > max_length {
            debug!("decoded length {length} is outside of 1..={max_length}");
            return Err(StegoError::CorruptPayload(length));
        }

        let payload_bits = &carrier[LENGTH_HEADER_BITS..LENGTH_HEADER_BITS + length * 8];
        unveil_bytes(payload_bits)
    }

    /// Unveils a hidden UTF-8 message.
    pub fn extract(bmp: &[u8]) -> Result<String> {
        let payload = Self::extract_raw(bmp)?;

        Ok(String::from_utf8(payload)?)
    }
}

fn carrier_len(bmp: &[u8]) -> Result<usize> {
    Ok(bmp.len() - read_pixel_offset(bmp)?)
}

/// collects the low bit of every carrier byte, 8 carriers make one byte
fn unveil_bytes(carrier: &[u8]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(carrier.len() / 8), LittleEndian);
    for byte in carrier {
        writer.write_bit(byte & 1 == 1)?;
    }

    Ok(writer.into_writer())
}
