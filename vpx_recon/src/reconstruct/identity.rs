// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use vpx_transforms::BitDepth;

use crate::{block_view::BlockViewMut, pixel::Pixel, tx::TxSize};

/// IDTX on a square block: each coefficient is scaled down and added to the
/// sample at the same position, with no row or column pass.
pub(super) fn identity_add<P: Pixel>(
    coeffs: &[i32],
    dest: &mut BlockViewMut<'_, P>,
    tx_size: TxSize,
    bd: BitDepth,
) {
    debug_assert!(tx_size.is_square());
    let shift = if tx_size == TxSize::Tx32x32 { 2 } else { 3 };
    let side = tx_size.width();
    for (row, chunk) in coeffs.chunks_exact(side).take(side).enumerate() {
        for (col, &c) in chunk.iter().enumerate() {
            dest.add_residual(row, col, (c >> shift) as i64, bd);
        }
    }
}
