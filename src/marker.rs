// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! JPEG marker identifiers and the segment classification table.

/// Lead byte preceding every marker identifier, also used as fill padding.
pub const FILL: u8 = 0xFF;
/// Start Of Image.
pub const SOI: u8 = 0xD8;
/// End Of Image.
pub const EOI: u8 = 0xD9;
/// Start Of Scan.
pub const SOS: u8 = 0xDA;
/// Define Quantization Table.
pub const DQT: u8 = 0xDB;
/// Define Huffman Table.
pub const DHT: u8 = 0xC4;
/// Define Restart Interval.
pub const DRI: u8 = 0xDD;
/// Comment.
pub const COM: u8 = 0xFE;

/// What a marker means for the rewrite of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// Bare two-byte marker with no length field (SOI, RST0..RST7).
    NoLength,
    /// Length-prefixed segment required to decode the image.
    Keep,
    /// Length-prefixed segment that only carries metadata.
    Drop,
    /// SOS: length-prefixed header followed by entropy-coded data with no
    /// further marker structure.
    ScanStart,
    /// EOI, terminates the marker stream.
    End,
}

/// Classifies a marker identifier.
///
/// The keep set is fixed: the SOF variants plus DQT, DHT and DRI. Everything
/// not listed (APP0..APP15, COM, and any unknown id) is metadata and gets
/// dropped.
pub fn classify(marker: u8) -> MarkerClass {
    match marker {
        EOI => MarkerClass::End,
        SOS => MarkerClass::ScanStart,
        SOI | 0xD0..=0xD7 => MarkerClass::NoLength,
        0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => MarkerClass::Keep,
        DQT | DHT | DRI => MarkerClass::Keep,
        _ => MarkerClass::Drop,
    }
}

/// True for APP0..APP15 (0xe0..=0xef).
pub fn is_app(marker: u8) -> bool {
    (0xE0..=0xEF).contains(&marker)
}

/// True for markers a stripped stream may still contain before SOS.
pub fn is_essential(marker: u8) -> bool {
    matches!(classify(marker), MarkerClass::Keep | MarkerClass::NoLength)
}
