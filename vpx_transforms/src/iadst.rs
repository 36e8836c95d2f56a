// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Inverse asymmetric DST kernels, and the 32-point half-right kernel that
//! stands in for them at size 32.

use crate::{
    bit_depth::{widen, BitDepth},
    consts::*,
    idct::idct16,
};

pub fn iadst4(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let [x0, x1, x2, x3]: [i64; 4] = widen(input);
    if x0 | x1 | x2 | x3 == 0 {
        output[..4].fill(0);
        return;
    }

    let mut s0 = SINPI_1_9 * x0;
    let mut s1 = SINPI_2_9 * x0;
    let mut s2 = SINPI_3_9 * x1;
    let mut s3 = SINPI_4_9 * x2;
    let s4 = SINPI_1_9 * x2;
    let s5 = SINPI_2_9 * x3;
    let s6 = SINPI_4_9 * x3;
    let s7 = bd.wrap(x0 - x2 + x3) as i64;

    s0 = s0 + s3 + s5;
    s1 = s1 - s4 - s6;
    s3 = s2;
    s2 = SINPI_3_9 * s7;

    output[0] = bd.round_wrap(s0 + s3);
    output[1] = bd.round_wrap(s1 + s3);
    output[2] = bd.round_wrap(s2);
    output[3] = bd.round_wrap(s0 + s1 - s3);
}

pub fn iadst8(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let r = |x: i64| bd.round_wrap(x) as i64;
    let w = |x: i64| bd.wrap(x) as i64;
    let i: [i64; 8] = widen(input);

    let mut x0 = i[7];
    let mut x1 = i[0];
    let mut x2 = i[5];
    let mut x3 = i[2];
    let mut x4 = i[3];
    let mut x5 = i[4];
    let mut x6 = i[1];
    let mut x7 = i[6];

    if x0 | x1 | x2 | x3 | x4 | x5 | x6 | x7 == 0 {
        output[..8].fill(0);
        return;
    }

    // stage 1
    let s0 = COSPI_2_64 * x0 + COSPI_30_64 * x1;
    let s1 = COSPI_30_64 * x0 - COSPI_2_64 * x1;
    let s2 = COSPI_10_64 * x2 + COSPI_22_64 * x3;
    let s3 = COSPI_22_64 * x2 - COSPI_10_64 * x3;
    let s4 = COSPI_18_64 * x4 + COSPI_14_64 * x5;
    let s5 = COSPI_14_64 * x4 - COSPI_18_64 * x5;
    let s6 = COSPI_26_64 * x6 + COSPI_6_64 * x7;
    let s7 = COSPI_6_64 * x6 - COSPI_26_64 * x7;

    x0 = r(s0 + s4);
    x1 = r(s1 + s5);
    x2 = r(s2 + s6);
    x3 = r(s3 + s7);
    x4 = r(s0 - s4);
    x5 = r(s1 - s5);
    x6 = r(s2 - s6);
    x7 = r(s3 - s7);

    // stage 2
    let (s0, s1, s2, s3) = (x0, x1, x2, x3);
    let s4 = COSPI_8_64 * x4 + COSPI_24_64 * x5;
    let s5 = COSPI_24_64 * x4 - COSPI_8_64 * x5;
    let s6 = -COSPI_24_64 * x6 + COSPI_8_64 * x7;
    let s7 = COSPI_8_64 * x6 + COSPI_24_64 * x7;

    x0 = w(s0 + s2);
    x1 = w(s1 + s3);
    x2 = w(s0 - s2);
    x3 = w(s1 - s3);
    x4 = r(s4 + s6);
    x5 = r(s5 + s7);
    x6 = r(s4 - s6);
    x7 = r(s5 - s7);

    // stage 3
    let s2 = COSPI_16_64 * (x2 + x3);
    let s3 = COSPI_16_64 * (x2 - x3);
    let s6 = COSPI_16_64 * (x6 + x7);
    let s7 = COSPI_16_64 * (x6 - x7);

    x2 = r(s2);
    x3 = r(s3);
    x6 = r(s6);
    x7 = r(s7);

    output[0] = x0 as i32;
    output[1] = w(-x4) as i32;
    output[2] = x6 as i32;
    output[3] = w(-x2) as i32;
    output[4] = x3 as i32;
    output[5] = w(-x7) as i32;
    output[6] = x5 as i32;
    output[7] = w(-x1) as i32;
}

pub fn iadst16(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let r = |x: i64| bd.round_wrap(x) as i64;
    let w = |x: i64| bd.wrap(x) as i64;
    let i: [i64; 16] = widen(input);

    const LOAD: [usize; 16] = [15, 0, 13, 2, 11, 4, 9, 6, 7, 8, 5, 10, 3, 12, 1, 14];
    let mut x: [i64; 16] = std::array::from_fn(|k| i[LOAD[k]]);
    if x.iter().all(|&v| v == 0) {
        output[..16].fill(0);
        return;
    }
    let mut s = [0i64; 16];

    // stage 1: eight rotations pairing x[2k] with x[2k + 1]
    const ROT1: [(i64, i64); 8] = [
        (COSPI_1_64, COSPI_31_64),
        (COSPI_5_64, COSPI_27_64),
        (COSPI_9_64, COSPI_23_64),
        (COSPI_13_64, COSPI_19_64),
        (COSPI_17_64, COSPI_15_64),
        (COSPI_21_64, COSPI_11_64),
        (COSPI_25_64, COSPI_7_64),
        (COSPI_29_64, COSPI_3_64),
    ];
    for (k, &(ca, cb)) in ROT1.iter().enumerate() {
        s[2 * k] = x[2 * k] * ca + x[2 * k + 1] * cb;
        s[2 * k + 1] = x[2 * k] * cb - x[2 * k + 1] * ca;
    }
    for k in 0..8 {
        x[k] = r(s[k] + s[k + 8]);
        x[k + 8] = r(s[k] - s[k + 8]);
    }

    // stage 2
    s[..8].copy_from_slice(&x[..8]);
    s[8] = x[8] * COSPI_4_64 + x[9] * COSPI_28_64;
    s[9] = x[8] * COSPI_28_64 - x[9] * COSPI_4_64;
    s[10] = x[10] * COSPI_20_64 + x[11] * COSPI_12_64;
    s[11] = x[10] * COSPI_12_64 - x[11] * COSPI_20_64;
    s[12] = -x[12] * COSPI_28_64 + x[13] * COSPI_4_64;
    s[13] = x[12] * COSPI_4_64 + x[13] * COSPI_28_64;
    s[14] = -x[14] * COSPI_12_64 + x[15] * COSPI_20_64;
    s[15] = x[14] * COSPI_20_64 + x[15] * COSPI_12_64;

    for k in 0..4 {
        x[k] = w(s[k] + s[k + 4]);
        x[k + 4] = w(s[k] - s[k + 4]);
        x[k + 8] = r(s[k + 8] + s[k + 12]);
        x[k + 12] = r(s[k + 8] - s[k + 12]);
    }

    // stage 3
    for base in [0, 8] {
        s[base] = x[base];
        s[base + 1] = x[base + 1];
        s[base + 2] = x[base + 2];
        s[base + 3] = x[base + 3];
        s[base + 4] = x[base + 4] * COSPI_8_64 + x[base + 5] * COSPI_24_64;
        s[base + 5] = x[base + 4] * COSPI_24_64 - x[base + 5] * COSPI_8_64;
        s[base + 6] = -x[base + 6] * COSPI_24_64 + x[base + 7] * COSPI_8_64;
        s[base + 7] = x[base + 6] * COSPI_8_64 + x[base + 7] * COSPI_24_64;
    }
    for base in [0, 8] {
        x[base] = w(s[base] + s[base + 2]);
        x[base + 1] = w(s[base + 1] + s[base + 3]);
        x[base + 2] = w(s[base] - s[base + 2]);
        x[base + 3] = w(s[base + 1] - s[base + 3]);
        x[base + 4] = r(s[base + 4] + s[base + 6]);
        x[base + 5] = r(s[base + 5] + s[base + 7]);
        x[base + 6] = r(s[base + 4] - s[base + 6]);
        x[base + 7] = r(s[base + 5] - s[base + 7]);
    }

    // stage 4
    s[2] = -COSPI_16_64 * (x[2] + x[3]);
    s[3] = COSPI_16_64 * (x[2] - x[3]);
    s[6] = COSPI_16_64 * (x[6] + x[7]);
    s[7] = COSPI_16_64 * (-x[6] + x[7]);
    s[10] = COSPI_16_64 * (x[10] + x[11]);
    s[11] = COSPI_16_64 * (-x[10] + x[11]);
    s[14] = -COSPI_16_64 * (x[14] + x[15]);
    s[15] = COSPI_16_64 * (x[14] - x[15]);
    for k in [2, 3, 6, 7, 10, 11, 14, 15] {
        x[k] = r(s[k]);
    }

    output[0] = x[0] as i32;
    output[1] = w(-x[8]) as i32;
    output[2] = x[12] as i32;
    output[3] = w(-x[4]) as i32;
    output[4] = x[6] as i32;
    output[5] = x[14] as i32;
    output[6] = x[10] as i32;
    output[7] = x[2] as i32;
    output[8] = x[3] as i32;
    output[9] = x[11] as i32;
    output[10] = x[15] as i32;
    output[11] = x[7] as i32;
    output[12] = x[5] as i32;
    output[13] = w(-x[13]) as i32;
    output[14] = x[9] as i32;
    output[15] = w(-x[1]) as i32;
}

/// 32-point kernel used wherever an ADST is requested at size 32.
///
/// The upper half of the spectrum passes through scaled by 4, the lower half
/// goes through a 16-point IDCT after a sqrt(2) pre-scale. The overall gain is
/// 4 times orthonormal, matching `idct32`.
pub fn ihalfright32(input: &[i32], output: &mut [i32], bd: BitDepth) {
    for k in 0..16 {
        output[k] = bd.wrap(input[16 + k] as i64 * 4);
    }
    let mut half = [0i32; 16];
    for (h, &x) in half.iter_mut().zip(input[..16].iter()) {
        *h = bd.round_wrap(x as i64 * SQRT2);
    }
    idct16(&half, &mut output[16..32], bd);
}
