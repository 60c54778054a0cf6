// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::error::{Error, Result};
use std::{fs, path::Path};

/// Convenience function which does what std::fs::write does, but also
/// creates the full directory path if it does not exist.
///
/// The bytes go to a sibling temporary file first and are renamed into
/// place, so an interrupted write never leaves a truncated file at the
/// destination.
pub fn write_output_file(output_filename: &Path, output_bytes: &[u8]) -> Result<()> {
    if let Some(parent) = output_filename.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|_| Error::OutputWriteFailure)?;
        }
    }

    let mut tmp_name = output_filename
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = output_filename.with_file_name(tmp_name);

    fs::write(&tmp_path, output_bytes)
        .and_then(|_| fs::rename(&tmp_path, output_filename))
        .map_err(|_| Error::OutputWriteFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parent_directories() {
        let dir = std::env::temp_dir().join(format!("jpegstrip-fh-{}", std::process::id()));
        let path = dir.join("a").join("b").join("out.jpg");
        write_output_file(&path, &[0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), [0xFF, 0xD8, 0xFF, 0xD9]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn overwrites_existing_file_atomically() {
        let dir = std::env::temp_dir().join(format!("jpegstrip-ow-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.jpg");
        write_output_file(&path, b"first").unwrap();
        write_output_file(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
