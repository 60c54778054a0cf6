// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Cursor over a JPEG byte stream that walks marker boundaries.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};
use crate::marker::{FILL, SOI};

/// Reads marker segments from a borrowed byte buffer.
///
/// The buffer itself is never modified; the reader only advances a cursor.
/// Construction validates the SOI signature, after which the cursor sits on
/// the first marker following it.
#[derive(Debug, Clone)]
pub struct MarkerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MarkerReader<'a> {
    /// Constructs a reader over `data`, validating the SOI signature.
    /// ```
    /// # use jpegstrip::marker_reader::MarkerReader;
    /// let reader = MarkerReader::new(&[0xFF, 0xD8, 0xFF, 0xD9])?;
    /// assert_eq!(reader.position(), 2);
    /// assert!(MarkerReader::new(b"not a jpeg").is_err());
    /// # Ok::<(), jpegstrip::error::Error>(())
    /// ```
    pub fn new(data: &'a [u8]) -> Result<MarkerReader<'a>> {
        if data.len() < 4 || data[0] != FILL || data[1] != SOI {
            let b0 = data.first().copied().unwrap_or(0);
            let b1 = data.get(1).copied().unwrap_or(0);
            return Err(Error::InvalidFormat(b0, b1));
        }
        Ok(MarkerReader { data, pos: 2 })
    }

    /// Current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Reads the next marker identifier.
    ///
    /// The byte at the cursor must be a ff lead byte; any run of ff fill
    /// bytes is skipped and the byte after it is the identifier. Returns
    /// `Ok(None)` once the buffer is exhausted, including exhaustion inside
    /// fill padding.
    pub fn next_marker(&mut self) -> Result<Option<u8>> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }
        if self.data[self.pos] != FILL {
            return Err(Error::CorruptMarker(self.pos, self.data[self.pos]));
        }
        while self.pos < self.data.len() && self.data[self.pos] == FILL {
            self.pos += 1;
        }
        if self.pos >= self.data.len() {
            return Ok(None);
        }
        let marker = self.data[self.pos];
        self.pos += 1;
        Ok(Some(marker))
    }

    /// Reads the length-prefixed segment at the cursor.
    ///
    /// The declared big-endian length counts its own two bytes, so it must be
    /// at least 2 and the segment must not run past the end of the buffer.
    /// Returns the full segment slice, length bytes included, and advances
    /// past it. `marker` is only used to label the error.
    pub fn read_segment(&mut self, marker: u8) -> Result<&'a [u8]> {
        if self.pos + 2 > self.data.len() {
            return Err(Error::CorruptSegment(marker, self.pos));
        }
        let len = read_u16_be(self.data, self.pos) as usize;
        if len < 2 || self.pos + len > self.data.len() {
            return Err(Error::CorruptSegment(marker, self.pos));
        }
        let segment = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(segment)
    }

    /// Hands over every remaining byte and moves the cursor to the end.
    pub fn take_rest(&mut self) -> &'a [u8] {
        let rest = &self.data[self.pos..];
        self.pos = self.data.len();
        rest
    }
}

/// Big-endian 16-bit read at `pos`; the caller checks bounds.
fn read_u16_be(buf: &[u8], pos: usize) -> u16 {
    BigEndian::read_u16(&buf[pos..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_soi() {
        let err = MarkerReader::new(&[0x89, 0x50, 0x4E, 0x47]).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(0x89, 0x50)));
    }

    #[test]
    fn rejects_buffer_too_short_for_any_segment() {
        assert!(matches!(
            MarkerReader::new(&[0xFF, 0xD8]),
            Err(Error::InvalidFormat(0xFF, 0xD8))
        ));
        assert!(matches!(
            MarkerReader::new(&[]),
            Err(Error::InvalidFormat(0, 0))
        ));
    }

    #[test]
    fn skips_fill_padding_before_marker() {
        let data = [0xFF, 0xD8, 0xFF, 0xFF, 0xFF, 0xDB, 0x00, 0x02];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert_eq!(reader.next_marker().unwrap(), Some(0xDB));
        assert_eq!(reader.read_segment(0xDB).unwrap(), &[0x00, 0x02]);
        assert_eq!(reader.next_marker().unwrap(), None);
    }

    #[test]
    fn missing_lead_byte_is_corrupt() {
        let data = [0xFF, 0xD8, 0x12, 0x34];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert!(matches!(
            reader.next_marker(),
            Err(Error::CorruptMarker(2, 0x12))
        ));
    }

    #[test]
    fn exhaustion_inside_padding_is_not_an_error() {
        let data = [0xFF, 0xD8, 0xFF, 0xFF];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert_eq!(reader.next_marker().unwrap(), None);
    }

    #[test]
    fn segment_length_must_count_itself() {
        // Declared length 1 is impossible: the field itself is two bytes.
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x01, 0xAA];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert_eq!(reader.next_marker().unwrap(), Some(0xE0));
        assert!(matches!(
            reader.read_segment(0xE0),
            Err(Error::CorruptSegment(0xE0, 4))
        ));
    }

    #[test]
    fn segment_must_fit_in_buffer() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0xAA];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert_eq!(reader.next_marker().unwrap(), Some(0xE0));
        assert!(matches!(
            reader.read_segment(0xE0),
            Err(Error::CorruptSegment(0xE0, 4))
        ));
    }

    #[test]
    fn truncated_length_field_is_corrupt() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert_eq!(reader.next_marker().unwrap(), Some(0xE0));
        assert!(matches!(
            reader.read_segment(0xE0),
            Err(Error::CorruptSegment(0xE0, 4))
        ));
    }

    #[test]
    fn take_rest_returns_everything_after_cursor() {
        let data = [0xFF, 0xD8, 0xFF, 0xDA, 0x00, 0x02, 0x01, 0x02, 0x03];
        let mut reader = MarkerReader::new(&data).unwrap();
        assert_eq!(reader.next_marker().unwrap(), Some(0xDA));
        reader.read_segment(0xDA).unwrap();
        assert_eq!(reader.take_rest(), &[0x01, 0x02, 0x03]);
        assert_eq!(reader.take_rest(), &[] as &[u8]);
    }
}
