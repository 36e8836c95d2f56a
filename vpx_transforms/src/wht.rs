// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Inverse 4x4 Walsh-Hadamard transform for lossless blocks.
//!
//! Unlike the other kernels this one is two-dimensional: it reads 16
//! coefficients in raster order and produces the 16 residual values in raster
//! order. It only uses additions and shifts, so it inverts the forward WHT
//! exactly and the residual is added to the prediction without any final
//! rounding.

use crate::{bit_depth::BitDepth, consts::UNIT_QUANT_SHIFT};

#[inline(always)]
fn lift(mut a: i64, mut c: i64, mut d: i64, mut b: i64) -> [i64; 4] {
    a += c;
    d -= b;
    let e = (a - d) >> 1;
    b = e - b;
    c = e - c;
    a -= b;
    d += c;
    [a, b, c, d]
}

/// Full inverse WHT over all 16 coefficients.
pub fn iwht4x4(input: &[i32], residual: &mut [i32], bd: BitDepth) {
    let mut tmp = [0i64; 16];
    for (ip, op) in input[..16].chunks_exact(4).zip(tmp.chunks_exact_mut(4)) {
        let row = lift(
            (ip[0] >> UNIT_QUANT_SHIFT) as i64,
            (ip[1] >> UNIT_QUANT_SHIFT) as i64,
            (ip[2] >> UNIT_QUANT_SHIFT) as i64,
            (ip[3] >> UNIT_QUANT_SHIFT) as i64,
        );
        for (o, v) in op.iter_mut().zip(row) {
            *o = bd.wrap(v) as i64;
        }
    }
    for col in 0..4 {
        let column = lift(tmp[col], tmp[4 + col], tmp[8 + col], tmp[12 + col]);
        for (row, v) in column.into_iter().enumerate() {
            residual[row * 4 + col] = bd.wrap(v);
        }
    }
}

/// Inverse WHT of a block whose only nonzero coefficient is the first one.
///
/// Gives the same residual as [`iwht4x4`] on such a block.
pub fn iwht4x4_dc(input: &[i32], residual: &mut [i32], bd: BitDepth) {
    let dc = (input[0] >> UNIT_QUANT_SHIFT) as i64;
    let e = dc >> 1;
    let a = bd.wrap(dc - e) as i64;
    let e = bd.wrap(e) as i64;
    let first_row = [a, e, e, e];
    for (col, &v) in first_row.iter().enumerate() {
        let e1 = v >> 1;
        let a1 = v - e1;
        residual[col] = bd.wrap(a1);
        for row in 1..4 {
            residual[row * 4 + col] = bd.wrap(e1);
        }
    }
}
