// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! One-dimensional inverse transform kernels with the exact fixed-point
//! behaviour required for drift-free reconstruction.
//!
//! Every kernel reads `N` coefficients and writes `N` outputs. Intermediate
//! values wrap to `8 + bd` bits after each butterfly stage (see
//! [`BitDepth::wrap`]), which for 8-bit content is the 16-bit wraparound the
//! bitstream relies on.

pub mod bit_depth;
pub mod consts;
pub mod kernel;
pub mod wht;

mod iadst;
mod idct;
mod identity;

pub use bit_depth::*;
pub use iadst::*;
pub use idct::*;
pub use identity::*;
pub use kernel::*;
pub use wht::*;

#[cfg(test)]
mod tests;
