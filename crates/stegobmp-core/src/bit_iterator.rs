use std::io::{ErrorKind, Read};
use std::slice;

/// Yields the bits of every byte read from `I`, least significant bit first.
///
/// This is the order in which payload bits are laid onto carrier bytes:
/// bit 0 of the first byte goes into the first carrier byte, bit 7 of the
/// first byte into the eighth, and so on.
pub struct BitIterator<I> {
    bit: u32,
    source: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(source: I) -> Self {
        BitIterator {
            bit: 0,
            source,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bit == 0 {
            self.byte = loop {
                let mut b = 0;
                match self.source.read(slice::from_mut(&mut b)) {
                    Ok(0) => break None,
                    Ok(..) => break Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => break None,
                }
            };
        }

        let byte = self.byte?;
        let bit = (byte >> self.bit) & 1;
        self.bit = (self.bit + 1) % 8;

        Some(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_yield_nothing_for_empty_input() {
        let empty: &[u8] = &[];
        assert_eq!(BitIterator::new(empty).count(), 0);
    }

    #[test]
    fn should_yield_eight_bits_per_byte() {
        let b = [0xffu8, 0x00, 0x0f];
        let bits: Vec<u8> = BitIterator::new(&b[..]).collect();

        assert_eq!(bits.len(), 24);
        assert_eq!(&bits[..8], &[1; 8]);
        assert_eq!(&bits[8..16], &[0; 8]);
        assert_eq!(&bits[16..], &[1, 1, 1, 1, 0, 0, 0, 0]);
    }
}
