//! # solsign-wire-reader
//!
//! Forward-only cursor over an immutable transaction buffer.
//!
//! Every read is bounds checked and either returns the requested bytes and
//! advances the cursor, or fails with [`WireReaderError`] and leaves the
//! cursor where it was. Nothing is allocated: slices and `&str` borrow from
//! the underlying buffer.
//!
//! | Read | Encoding |
//! |------|----------|
//! | [`ByteReader::read_u32_le`] and friends | fixed-width little-endian integers |
//! | [`ByteReader::read_compact_u16`] | short-vec compact integer (1..=3 bytes) |
//! | [`ByteReader::read_compact_uint`] | LEB128 unsigned integer (1..=10 bytes) |
//! | [`ByteReader::read_length_prefixed_string`] | u32 length + 4 padding bytes + UTF-8 |
#![no_std]

pub mod errors;

use core::mem::size_of;

use errors::WireReaderError;
use zerocopy::{
    little_endian::{I64, U16, U32, U64},
    FromBytes, Immutable, KnownLayout, Ref, Unaligned,
};

/// Maximum number of bytes a compact u16 occupies on the wire.
pub const MAX_COMPACT_U16_LEN: usize = 3;
/// Maximum number of bytes accepted for a LEB128 integer (enough for a u64).
pub const MAX_COMPACT_UINT_LEN: usize = 10;
/// Number of padding bytes that follow the length of a length-prefixed string.
pub const STRING_LENGTH_PADDING: usize = 4;

#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Absolute cursor position.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Resets the cursor to an absolute position within the buffer.
    pub fn seek(&mut self, position: usize) -> Result<(), WireReaderError> {
        if position > self.bytes.len() {
            return Err(WireReaderError::SeekOutOfBounds {
                position,
                len: self.bytes.len(),
            });
        }
        self.offset = position;
        Ok(())
    }

    #[inline]
    fn check_remaining(&self, len: usize) -> Result<(), WireReaderError> {
        if len > self.remaining() {
            return Err(WireReaderError::TruncatedInput {
                requested: len,
                remaining: self.remaining(),
            });
        }
        Ok(())
    }

    /// Returns the next `len` bytes.
    pub fn read(&mut self, len: usize) -> Result<&'a [u8], WireReaderError> {
        self.check_remaining(len)?;
        let bytes = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Returns every byte left in the buffer.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let bytes = &self.bytes[self.offset..];
        self.offset = self.bytes.len();
        bytes
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireReaderError> {
        let bytes = self.read(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(bytes);
        Ok(array)
    }

    pub fn get_byte(&mut self) -> Result<u8, WireReaderError> {
        let byte = self.peek_byte()?;
        self.offset += 1;
        Ok(byte)
    }

    pub fn peek_byte(&self) -> Result<u8, WireReaderError> {
        self.bytes
            .get(self.offset)
            .copied()
            .ok_or(WireReaderError::TruncatedInput {
                requested: 1,
                remaining: 0,
            })
    }

    #[inline]
    fn read_le<T>(&mut self) -> Result<T, WireReaderError>
    where
        T: FromBytes + KnownLayout + Immutable + Unaligned + Copy,
    {
        let bytes = self.read(size_of::<T>())?;
        let truncated = WireReaderError::TruncatedInput {
            requested: size_of::<T>(),
            remaining: bytes.len(),
        };
        let value = Ref::<&[u8], T>::from_bytes(bytes).map_err(|_| truncated)?;
        Ok(*value)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, WireReaderError> {
        Ok(u16::from(self.read_le::<U16>()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, WireReaderError> {
        Ok(u32::from(self.read_le::<U32>()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, WireReaderError> {
        Ok(u64::from(self.read_le::<U64>()?))
    }

    pub fn read_i64_le(&mut self) -> Result<i64, WireReaderError> {
        Ok(i64::from(self.read_le::<I64>()?))
    }

    /// Reads a short-vec compact u16.
    ///
    /// Rejects non-minimal encodings and values above `u16::MAX`. A varint
    /// cut off by the end of the buffer is [`WireReaderError::TruncatedInput`].
    /// On error the cursor does not move.
    pub fn read_compact_u16(&mut self) -> Result<u16, WireReaderError> {
        let mut result = 0u16;
        let mut shift = 0u16;

        for i in 0..MAX_COMPACT_U16_LEN {
            let Some(&byte) = self.bytes.get(self.offset + i) else {
                return Err(WireReaderError::TruncatedInput {
                    requested: i + 1,
                    remaining: self.remaining(),
                });
            };
            // non-minimal encoding or overflow
            if (i > 0 && byte == 0) || (i == 2 && byte > 3) {
                return Err(WireReaderError::InvalidCompactInteger);
            }
            result |= ((byte & 0x7F) as u16) << shift;
            shift += 7;
            if byte & 0x80 == 0 {
                self.offset += i + 1;
                return Ok(result);
            }
        }

        Err(WireReaderError::InvalidCompactInteger)
    }

    /// Reads an LEB128 unsigned integer of at most [`MAX_COMPACT_UINT_LEN`]
    /// bytes. Bits that do not fit in a u64 are an error, never truncated.
    pub fn read_compact_uint(&mut self) -> Result<u64, WireReaderError> {
        let mut result = 0u64;

        for i in 0..MAX_COMPACT_UINT_LEN {
            let Some(&byte) = self.bytes.get(self.offset + i) else {
                return Err(WireReaderError::TruncatedInput {
                    requested: i + 1,
                    remaining: self.remaining(),
                });
            };
            let shift = 7 * i as u32;
            if i == MAX_COMPACT_UINT_LEN - 1 && byte > 1 {
                return Err(WireReaderError::InvalidCompactInteger);
            }
            result |= ((byte & 0x7F) as u64) << shift;
            if byte & 0x80 == 0 {
                self.offset += i + 1;
                return Ok(result);
            }
        }

        Err(WireReaderError::InvalidCompactInteger)
    }

    /// Reads a compact u16 element count and checks that `count` elements of
    /// `element_size` bytes can still be present in the buffer.
    pub fn read_count(&mut self, element_size: usize) -> Result<usize, WireReaderError> {
        let start = self.offset;
        let count = usize::from(self.read_compact_u16()?);
        let length = count.saturating_mul(element_size);
        if length > self.remaining() {
            let remaining = self.remaining();
            self.offset = start;
            return Err(WireReaderError::LengthExceedsInput { length, remaining });
        }
        Ok(count)
    }

    /// Reads a u32 length, skips the 4 padding bytes that follow it without
    /// inspecting them, then reads `length` bytes of UTF-8.
    pub fn read_length_prefixed_string(&mut self) -> Result<&'a str, WireReaderError> {
        let start = self.offset;
        let result = self.read_length_prefixed_string_inner();
        if result.is_err() {
            self.offset = start;
        }
        result
    }

    fn read_length_prefixed_string_inner(&mut self) -> Result<&'a str, WireReaderError> {
        let length = self.read_u32_le()? as usize;
        self.read(STRING_LENGTH_PADDING)?;
        let bytes = self.read(length)?;
        core::str::from_utf8(bytes).map_err(|_| WireReaderError::InvalidEncoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_advances_cursor() {
        let bytes = [1u8, 2, 3, 4, 5];
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read(2), Ok(&bytes[..2]));
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(
            reader.read(4),
            Err(WireReaderError::TruncatedInput {
                requested: 4,
                remaining: 3
            })
        );
        // failed reads leave the cursor untouched
        assert_eq!(reader.position(), 2);
        assert_eq!(reader.read_rest(), &bytes[2..]);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_get_and_peek_byte() {
        let bytes = [0x80u8, 7];
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.peek_byte(), Ok(0x80));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.get_byte(), Ok(0x80));
        assert_eq!(reader.get_byte(), Ok(7));
        assert!(reader.get_byte().is_err());
        assert!(reader.peek_byte().is_err());
    }

    #[test]
    fn test_seek() {
        let bytes = [9u8, 8, 7];
        let mut reader = ByteReader::new(&bytes);
        reader.read(3).unwrap();
        reader.seek(1).unwrap();
        assert_eq!(reader.get_byte(), Ok(8));
        reader.seek(3).unwrap();
        assert!(reader.is_empty());
        assert_eq!(
            reader.seek(4),
            Err(WireReaderError::SeekOutOfBounds {
                position: 4,
                len: 3
            })
        );
    }

    #[test]
    fn test_fixed_width_integers() {
        let mut bytes = [0u8; 22];
        bytes[..2].copy_from_slice(&0xBEEFu16.to_le_bytes());
        bytes[2..6].copy_from_slice(&0xDEAD_BEEFu32.to_le_bytes());
        bytes[6..14].copy_from_slice(&5_000_000_000u64.to_le_bytes());
        bytes[14..22].copy_from_slice(&(-42i64).to_le_bytes());
        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_u16_le(), Ok(0xBEEF));
        assert_eq!(reader.read_u32_le(), Ok(0xDEAD_BEEF));
        assert_eq!(reader.read_u64_le(), Ok(5_000_000_000));
        assert_eq!(reader.read_i64_le(), Ok(-42));
        assert!(reader.read_u32_le().is_err());
    }

    #[test]
    fn test_read_compact_u16() {
        let cases: [(&[u8], u16, usize); 6] = [
            (&[0x00], 0, 1),
            (&[0x7f], 0x7f, 1),
            (&[0x80, 0x01], 0x80, 2),
            (&[0xff, 0x7f], 0x3fff, 2),
            (&[0x80, 0x80, 0x01], 0x4000, 3),
            (&[0xff, 0xff, 0x03], u16::MAX, 3),
        ];
        for (bytes, expected, len) in cases {
            let mut reader = ByteReader::new(bytes);
            assert_eq!(reader.read_compact_u16(), Ok(expected));
            assert_eq!(reader.position(), len);
        }
    }

    #[test]
    fn test_read_compact_u16_rejects_invalid_encodings() {
        // non-minimal
        let mut reader = ByteReader::new(&[0x80, 0x00]);
        assert_eq!(
            reader.read_compact_u16(),
            Err(WireReaderError::InvalidCompactInteger)
        );
        assert_eq!(reader.position(), 0);
        // overflow
        let mut reader = ByteReader::new(&[0xff, 0xff, 0x04]);
        assert_eq!(
            reader.read_compact_u16(),
            Err(WireReaderError::InvalidCompactInteger)
        );
        // truncated
        let mut reader = ByteReader::new(&[0x80]);
        assert!(matches!(
            reader.read_compact_u16(),
            Err(WireReaderError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_read_compact_uint() {
        let mut reader = ByteReader::new(&[0xe5, 0x8e, 0x26]);
        assert_eq!(reader.read_compact_uint(), Ok(624_485));
        assert!(reader.is_empty());

        let max = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01];
        let mut reader = ByteReader::new(&max);
        assert_eq!(reader.read_compact_uint(), Ok(u64::MAX));

        let overflow = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02];
        let mut reader = ByteReader::new(&overflow);
        assert_eq!(
            reader.read_compact_uint(),
            Err(WireReaderError::InvalidCompactInteger)
        );

        let too_long = [0x80u8; 11];
        let mut reader = ByteReader::new(&too_long);
        assert_eq!(
            reader.read_compact_uint(),
            Err(WireReaderError::InvalidCompactInteger)
        );
    }

    #[test]
    fn test_read_count_is_bounded_by_input() {
        let mut bytes = [0u8; 66];
        bytes[0] = 2;
        let mut reader = ByteReader::new(&bytes[..65]);
        assert_eq!(reader.read_count(32), Ok(2));

        let mut reader = ByteReader::new(&bytes[..64]);
        assert_eq!(
            reader.read_count(32),
            Err(WireReaderError::LengthExceedsInput {
                length: 64,
                remaining: 63
            })
        );
        assert_eq!(reader.position(), 0);
    }
}
