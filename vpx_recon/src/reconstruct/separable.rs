// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use vpx_transforms::{BitDepth, consts::SQRT2, round_power_of_two};

use super::KernelPair;
use crate::{block_view::BlockViewMut, pixel::Pixel, tx::TxSize};

const MAX_SIDE: usize = 32;

/// Runs `pair.rows` over the first `row_limit` coefficient rows, then
/// `pair.cols` over every column, and adds the rounded result to `dest`.
///
/// Rows at or past `row_limit` are treated as zero, as are rows whose
/// coefficients are all zero. Both give the same result as transforming
/// them, since every kernel maps zeros to zeros.
pub(super) fn inverse_2d_add<P: Pixel>(
    coeffs: &[i32],
    dest: &mut BlockViewMut<'_, P>,
    pair: KernelPair,
    tx_size: TxSize,
    row_limit: usize,
    bd: BitDepth,
) {
    let (width, height) = (tx_size.width(), tx_size.height());
    debug_assert!(row_limit <= height);
    debug_assert_eq!(dest.width(), width);
    debug_assert_eq!(dest.height(), height);

    // transposed[j][i] is output j of coefficient row i, so each column
    // pass reads a contiguous slice.
    let mut transposed = [[0i32; MAX_SIDE]; MAX_SIDE];
    let mut out = [0i32; MAX_SIDE];

    for (i, row) in coeffs.chunks_exact(width).take(row_limit).enumerate() {
        if row.iter().all(|&c| c == 0) {
            continue;
        }
        pair.rows.apply(row, &mut out, bd);
        for (j, &v) in out[..width].iter().enumerate() {
            transposed[j][i] = if tx_size.is_square() {
                v
            } else {
                bd.round_wrap(v as i64 * SQRT2)
            };
        }
    }

    let shift = tx_size.final_shift();
    for (j, column) in transposed[..width].iter().enumerate() {
        pair.cols.apply(&column[..height], &mut out, bd);
        for (i, &v) in out[..height].iter().enumerate() {
            dest.add_residual(i, j, round_power_of_two(v as i64, shift), bd);
        }
    }
}
