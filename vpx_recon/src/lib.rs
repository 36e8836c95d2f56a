// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

#![deny(unsafe_code)]
pub mod block_info;
pub mod block_view;
pub mod error;
pub mod pixel;
pub mod reconstruct;
pub mod scan;
pub mod tx;
pub mod util;

pub use vpx_transforms::{BitDepth, Kernel1D};
