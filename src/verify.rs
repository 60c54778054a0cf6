// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Checks that a stream really had its metadata segments removed.

use crate::marker::{self, MarkerClass};
use crate::marker_reader::MarkerReader;
use crate::util::tracing_wrappers::*;

/// Outcome of [`verify`]: overall verdict plus one entry per problem found.
#[derive(Debug, Clone, Default)]
pub struct Verification {
    pub ok: bool,
    pub problems: Vec<String>,
}

impl Verification {
    /// Structural corruption: record it and give up on the rest of the bytes.
    fn corrupt(mut problems: Vec<String>, description: String) -> Verification {
        problems.push(description);
        Verification {
            ok: false,
            problems,
        }
    }
}

/// Re-parses `data` and reports every non-essential segment before SOS.
///
/// Policy violations (APPn, COM, any other droppable marker) are accumulated
/// so that a single pass yields the complete diagnostic. Structural
/// corruption aborts immediately with `ok = false` instead: once the marker
/// structure is broken the remaining bytes cannot be interpreted.
pub fn verify(data: &[u8]) -> Verification {
    let mut problems = Vec::new();
    let mut reader = match MarkerReader::new(data) {
        Ok(reader) => reader,
        Err(err) => return Verification::corrupt(problems, err.to_string()),
    };

    loop {
        let id = match reader.next_marker() {
            Ok(Some(id)) => id,
            Ok(None) => break,
            Err(err) => return Verification::corrupt(problems, err.to_string()),
        };
        match marker::classify(id) {
            MarkerClass::End => break,
            // Scan data follows; nothing past this point is marker-structured.
            MarkerClass::ScanStart => break,
            MarkerClass::NoLength => {}
            MarkerClass::Keep | MarkerClass::Drop => {
                if let Err(err) = reader.read_segment(id) {
                    return Verification::corrupt(problems, err.to_string());
                }
                if marker::is_app(id) {
                    warn!(marker = id, "APP segment survived stripping");
                    problems.push(format!("found APP{} segment (ff{:02x})", id - 0xE0, id));
                } else if id == marker::COM {
                    warn!("COM segment survived stripping");
                    problems.push("found COM segment (fffe)".to_string());
                } else if !marker::is_essential(id) {
                    warn!(marker = id, "non-essential segment survived stripping");
                    problems.push(format!("found non-essential segment (ff{id:02x})"));
                }
            }
        }
    }

    Verification {
        ok: problems.is_empty(),
        problems,
    }
}
