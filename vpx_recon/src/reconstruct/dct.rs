// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! End-of-block shortcuts for DCT_DCT blocks.
//!
//! Coefficients are coded in default scan order, so a small `eob` bounds the
//! rows that can hold nonzero coefficients. The row limits below cover every
//! raster position among the first `eob` entries of the default scan of each
//! size.

use vpx_transforms::{BitDepth, consts::COSPI_16_64, round_power_of_two};

use crate::{block_view::BlockViewMut, pixel::Pixel, tx::TxSize};

/// Largest `eob` for which only the first rows of the block can be nonzero,
/// with the number of such rows.
pub(super) const fn partial_rows(tx_size: TxSize, eob: usize) -> Option<usize> {
    match tx_size {
        TxSize::Tx8x8 if eob <= 12 => Some(4),
        TxSize::Tx16x16 if eob <= 10 => Some(4),
        TxSize::Tx32x32 if eob <= 34 => Some(8),
        TxSize::Tx32x32 if eob <= 135 => Some(16),
        _ => None,
    }
}

/// Whether a DCT_DCT block with this `eob` only has a DC coefficient.
pub(super) const fn is_dc_only(tx_size: TxSize, eob: usize) -> bool {
    match tx_size {
        TxSize::Tx4x4 => eob <= 1,
        _ => eob == 1,
    }
}

/// Adds the reconstruction of a block whose only coefficient is `dc`. Both
/// passes reduce to a single multiply by cos(pi/4), and every sample gets
/// the same residual.
pub(super) fn dc_only_add<P: Pixel>(
    dc: i32,
    dest: &mut BlockViewMut<'_, P>,
    tx_size: TxSize,
    bd: BitDepth,
) {
    let out = bd.round_wrap(dc as i64 * COSPI_16_64);
    let out = bd.round_wrap(out as i64 * COSPI_16_64);
    let residual = round_power_of_two(out as i64, tx_size.final_shift());
    for row in 0..dest.height() {
        for col in 0..dest.width() {
            dest.add_residual(row, col, residual, bd);
        }
    }
}
