// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::{bit_depth::BitDepth, consts::SQRT2};

// Gains are sqrt(N/2), matching the scale of the DCT of the same size.

pub fn iidtx4(input: &[i32], output: &mut [i32], bd: BitDepth) {
    for (o, &i) in output[..4].iter_mut().zip(input[..4].iter()) {
        *o = bd.round_wrap(i as i64 * SQRT2);
    }
}

pub fn iidtx8(input: &[i32], output: &mut [i32], bd: BitDepth) {
    for (o, &i) in output[..8].iter_mut().zip(input[..8].iter()) {
        *o = bd.wrap(i as i64 * 2);
    }
}

pub fn iidtx16(input: &[i32], output: &mut [i32], bd: BitDepth) {
    for (o, &i) in output[..16].iter_mut().zip(input[..16].iter()) {
        *o = bd.round_wrap(i as i64 * 2 * SQRT2);
    }
}

pub fn iidtx32(input: &[i32], output: &mut [i32], bd: BitDepth) {
    for (o, &i) in output[..32].iter_mut().zip(input[..32].iter()) {
        *o = bd.wrap(i as i64 * 4);
    }
}
