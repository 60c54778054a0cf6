// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Lossless JPEG metadata stripping.
//!
//! Rewrites a JPEG byte stream so that only the marker segments required to
//! decode the image remain. The entropy-coded scan data is copied through
//! byte-for-byte; no recompression takes place.

#![deny(unsafe_code)]
pub mod error;
pub mod marker;
pub mod marker_reader;
pub mod rewrite;
pub mod util;
pub mod verify;
