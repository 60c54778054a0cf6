// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Thin indirection over the `tracing` macros.
//!
//! With the `tracing` feature enabled these are the real macros; without it
//! they expand to nothing, so instrumented code carries no runtime cost and
//! no dependency.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
// A fallback named `warn` collides with the builtin `warn` attribute when
// imported, so it gets its final name on re-export instead.
#[cfg(not(feature = "tracing"))]
macro_rules! warn_fallback {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, trace, warn_fallback as warn};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_accept_fields_and_messages() {
        debug!(marker = 0xE0, "dropping segment");
        trace!(len = 4usize, "keeping segment");
        warn!(marker = 0xFE, "segment survived stripping");
    }
}
