// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid signature {0:02x}{1:02x}, expected ffd8")]
    InvalidFormat(u8, u8),
    #[error("Expected marker lead byte ff at offset {0}, found {1:02x}")]
    CorruptMarker(usize, u8),
    #[error("Invalid length for segment ff{0:02x} at offset {1}")]
    CorruptSegment(u8, usize),
    #[error("Failed to read input file")]
    InputReadFailure,
    #[error("Failed to write output file")]
    OutputWriteFailure,
}

pub type Result<T> = std::result::Result<T, Error>;
