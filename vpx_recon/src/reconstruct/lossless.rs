// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use vpx_transforms::{BitDepth, iwht4x4, iwht4x4_dc};

use crate::{block_view::BlockViewMut, pixel::Pixel};

/// Inverse WHT of a lossless 4x4 block. The residual is added as is, with no
/// rounding shift.
pub(super) fn iwht_add<P: Pixel>(
    coeffs: &[i32],
    dest: &mut BlockViewMut<'_, P>,
    dc_only: bool,
    bd: BitDepth,
) {
    let mut residual = [0i32; 16];
    if dc_only {
        iwht4x4_dc(coeffs, &mut residual, bd);
    } else {
        iwht4x4(coeffs, &mut residual, bd);
    }
    for (row, chunk) in residual.chunks_exact(4).enumerate() {
        for (col, &r) in chunk.iter().enumerate() {
            dest.add_residual(row, col, r as i64, bd);
        }
    }
}
