// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Inverse DCT-II kernels. The butterflies follow the usual even/odd
//! decomposition: an N-point IDCT is an N/2-point IDCT on the even
//! coefficients combined with a rotation network on the odd ones.

use crate::{
    bit_depth::{widen, BitDepth},
    consts::*,
};

pub fn idct4(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let r = |x: i64| bd.round_wrap(x) as i64;
    let w = |x: i64| bd.wrap(x);
    let i: [i64; 4] = widen(input);

    let s0 = r((i[0] + i[2]) * COSPI_16_64);
    let s1 = r((i[0] - i[2]) * COSPI_16_64);
    let s2 = r(i[1] * COSPI_24_64 - i[3] * COSPI_8_64);
    let s3 = r(i[1] * COSPI_8_64 + i[3] * COSPI_24_64);

    output[0] = w(s0 + s3);
    output[1] = w(s1 + s2);
    output[2] = w(s1 - s2);
    output[3] = w(s0 - s3);
}

pub fn idct8(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let r = |x: i64| bd.round_wrap(x) as i64;
    let w = |x: i64| bd.wrap(x) as i64;
    let i: [i64; 8] = widen(input);
    let mut step1 = [0i64; 8];
    let mut step2 = [0i64; 8];

    // stage 1
    step1[0] = i[0];
    step1[2] = i[4];
    step1[1] = i[2];
    step1[3] = i[6];
    step1[4] = r(i[1] * COSPI_28_64 - i[7] * COSPI_4_64);
    step1[7] = r(i[1] * COSPI_4_64 + i[7] * COSPI_28_64);
    step1[5] = r(i[5] * COSPI_12_64 - i[3] * COSPI_20_64);
    step1[6] = r(i[5] * COSPI_20_64 + i[3] * COSPI_12_64);

    // stage 2
    step2[0] = r((step1[0] + step1[2]) * COSPI_16_64);
    step2[1] = r((step1[0] - step1[2]) * COSPI_16_64);
    step2[2] = r(step1[1] * COSPI_24_64 - step1[3] * COSPI_8_64);
    step2[3] = r(step1[1] * COSPI_8_64 + step1[3] * COSPI_24_64);
    step2[4] = w(step1[4] + step1[5]);
    step2[5] = w(step1[4] - step1[5]);
    step2[6] = w(-step1[6] + step1[7]);
    step2[7] = w(step1[6] + step1[7]);

    // stage 3
    step1[0] = w(step2[0] + step2[3]);
    step1[1] = w(step2[1] + step2[2]);
    step1[2] = w(step2[1] - step2[2]);
    step1[3] = w(step2[0] - step2[3]);
    step1[4] = step2[4];
    step1[5] = r((step2[6] - step2[5]) * COSPI_16_64);
    step1[6] = r((step2[5] + step2[6]) * COSPI_16_64);
    step1[7] = step2[7];

    // stage 4
    for k in 0..4 {
        output[k] = w(step1[k] + step1[7 - k]) as i32;
        output[7 - k] = w(step1[k] - step1[7 - k]) as i32;
    }
}

pub fn idct16(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let r = |x: i64| bd.round_wrap(x) as i64;
    let w = |x: i64| bd.wrap(x) as i64;
    let i: [i64; 16] = widen(input);
    let mut step1 = [0i64; 16];
    let mut step2 = [0i64; 16];

    // stage 1: bit-reversed load
    const LOAD: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];
    for (dst, &src) in step1.iter_mut().zip(LOAD.iter()) {
        *dst = i[src];
    }

    // stage 2
    step2[..8].copy_from_slice(&step1[..8]);
    step2[8] = r(step1[8] * COSPI_30_64 - step1[15] * COSPI_2_64);
    step2[15] = r(step1[8] * COSPI_2_64 + step1[15] * COSPI_30_64);
    step2[9] = r(step1[9] * COSPI_14_64 - step1[14] * COSPI_18_64);
    step2[14] = r(step1[9] * COSPI_18_64 + step1[14] * COSPI_14_64);
    step2[10] = r(step1[10] * COSPI_22_64 - step1[13] * COSPI_10_64);
    step2[13] = r(step1[10] * COSPI_10_64 + step1[13] * COSPI_22_64);
    step2[11] = r(step1[11] * COSPI_6_64 - step1[12] * COSPI_26_64);
    step2[12] = r(step1[11] * COSPI_26_64 + step1[12] * COSPI_6_64);

    // stage 3
    step1[..4].copy_from_slice(&step2[..4]);
    step1[4] = r(step2[4] * COSPI_28_64 - step2[7] * COSPI_4_64);
    step1[7] = r(step2[4] * COSPI_4_64 + step2[7] * COSPI_28_64);
    step1[5] = r(step2[5] * COSPI_12_64 - step2[6] * COSPI_20_64);
    step1[6] = r(step2[5] * COSPI_20_64 + step2[6] * COSPI_12_64);
    step1[8] = w(step2[8] + step2[9]);
    step1[9] = w(step2[8] - step2[9]);
    step1[10] = w(-step2[10] + step2[11]);
    step1[11] = w(step2[10] + step2[11]);
    step1[12] = w(step2[12] + step2[13]);
    step1[13] = w(step2[12] - step2[13]);
    step1[14] = w(-step2[14] + step2[15]);
    step1[15] = w(step2[14] + step2[15]);

    // stage 4
    step2[0] = r((step1[0] + step1[1]) * COSPI_16_64);
    step2[1] = r((step1[0] - step1[1]) * COSPI_16_64);
    step2[2] = r(step1[2] * COSPI_24_64 - step1[3] * COSPI_8_64);
    step2[3] = r(step1[2] * COSPI_8_64 + step1[3] * COSPI_24_64);
    step2[4] = w(step1[4] + step1[5]);
    step2[5] = w(step1[4] - step1[5]);
    step2[6] = w(-step1[6] + step1[7]);
    step2[7] = w(step1[6] + step1[7]);
    step2[8] = step1[8];
    step2[15] = step1[15];
    step2[9] = r(-step1[9] * COSPI_8_64 + step1[14] * COSPI_24_64);
    step2[14] = r(step1[9] * COSPI_24_64 + step1[14] * COSPI_8_64);
    step2[10] = r(-step1[10] * COSPI_24_64 - step1[13] * COSPI_8_64);
    step2[13] = r(-step1[10] * COSPI_8_64 + step1[13] * COSPI_24_64);
    step2[11] = step1[11];
    step2[12] = step1[12];

    // stage 5
    step1[0] = w(step2[0] + step2[3]);
    step1[1] = w(step2[1] + step2[2]);
    step1[2] = w(step2[1] - step2[2]);
    step1[3] = w(step2[0] - step2[3]);
    step1[4] = step2[4];
    step1[5] = r((step2[6] - step2[5]) * COSPI_16_64);
    step1[6] = r((step2[5] + step2[6]) * COSPI_16_64);
    step1[7] = step2[7];
    step1[8] = w(step2[8] + step2[11]);
    step1[9] = w(step2[9] + step2[10]);
    step1[10] = w(step2[9] - step2[10]);
    step1[11] = w(step2[8] - step2[11]);
    step1[12] = w(-step2[12] + step2[15]);
    step1[13] = w(-step2[13] + step2[14]);
    step1[14] = w(step2[13] + step2[14]);
    step1[15] = w(step2[12] + step2[15]);

    // stage 6
    for k in 0..4 {
        step2[k] = w(step1[k] + step1[7 - k]);
        step2[7 - k] = w(step1[k] - step1[7 - k]);
    }
    step2[8] = step1[8];
    step2[9] = step1[9];
    step2[10] = r((-step1[10] + step1[13]) * COSPI_16_64);
    step2[13] = r((step1[10] + step1[13]) * COSPI_16_64);
    step2[11] = r((-step1[11] + step1[12]) * COSPI_16_64);
    step2[12] = r((step1[11] + step1[12]) * COSPI_16_64);
    step2[14] = step1[14];
    step2[15] = step1[15];

    // stage 7
    for k in 0..8 {
        output[k] = w(step2[k] + step2[15 - k]) as i32;
        output[15 - k] = w(step2[k] - step2[15 - k]) as i32;
    }
}

pub fn idct32(input: &[i32], output: &mut [i32], bd: BitDepth) {
    let r = |x: i64| bd.round_wrap(x) as i64;
    let w = |x: i64| bd.wrap(x) as i64;
    // Rotation by the constant pair (ca, cb), rounded.
    let rot = |a: i64, b: i64, ca: i64, cb: i64| (r(a * ca - b * cb), r(a * cb + b * ca));
    let i: [i64; 32] = widen(input);
    let mut step1 = [0i64; 32];
    let mut step2 = [0i64; 32];

    // stage 1
    const LOAD: [usize; 16] = [0, 16, 8, 24, 4, 20, 12, 28, 2, 18, 10, 26, 6, 22, 14, 30];
    for (dst, &src) in step1.iter_mut().zip(LOAD.iter()) {
        *dst = i[src];
    }
    (step1[16], step1[31]) = rot(i[1], i[31], COSPI_31_64, COSPI_1_64);
    (step1[17], step1[30]) = rot(i[17], i[15], COSPI_15_64, COSPI_17_64);
    (step1[18], step1[29]) = rot(i[9], i[23], COSPI_23_64, COSPI_9_64);
    (step1[19], step1[28]) = rot(i[25], i[7], COSPI_7_64, COSPI_25_64);
    (step1[20], step1[27]) = rot(i[5], i[27], COSPI_27_64, COSPI_5_64);
    (step1[21], step1[26]) = rot(i[21], i[11], COSPI_11_64, COSPI_21_64);
    (step1[22], step1[25]) = rot(i[13], i[19], COSPI_19_64, COSPI_13_64);
    (step1[23], step1[24]) = rot(i[29], i[3], COSPI_3_64, COSPI_29_64);

    // stage 2
    step2[..8].copy_from_slice(&step1[..8]);
    (step2[8], step2[15]) = rot(step1[8], step1[15], COSPI_30_64, COSPI_2_64);
    (step2[9], step2[14]) = rot(step1[9], step1[14], COSPI_14_64, COSPI_18_64);
    (step2[10], step2[13]) = rot(step1[10], step1[13], COSPI_22_64, COSPI_10_64);
    (step2[11], step2[12]) = rot(step1[11], step1[12], COSPI_6_64, COSPI_26_64);
    for k in (16..32).step_by(4) {
        step2[k] = w(step1[k] + step1[k + 1]);
        step2[k + 1] = w(step1[k] - step1[k + 1]);
        step2[k + 2] = w(-step1[k + 2] + step1[k + 3]);
        step2[k + 3] = w(step1[k + 2] + step1[k + 3]);
    }

    // stage 3
    step1[..4].copy_from_slice(&step2[..4]);
    (step1[4], step1[7]) = rot(step2[4], step2[7], COSPI_28_64, COSPI_4_64);
    (step1[5], step1[6]) = rot(step2[5], step2[6], COSPI_12_64, COSPI_20_64);
    for k in (8..16).step_by(4) {
        step1[k] = w(step2[k] + step2[k + 1]);
        step1[k + 1] = w(step2[k] - step2[k + 1]);
        step1[k + 2] = w(-step2[k + 2] + step2[k + 3]);
        step1[k + 3] = w(step2[k + 2] + step2[k + 3]);
    }
    step1[16] = step2[16];
    step1[31] = step2[31];
    step1[17] = r(-step2[17] * COSPI_4_64 + step2[30] * COSPI_28_64);
    step1[30] = r(step2[17] * COSPI_28_64 + step2[30] * COSPI_4_64);
    step1[18] = r(-step2[18] * COSPI_28_64 - step2[29] * COSPI_4_64);
    step1[29] = r(-step2[18] * COSPI_4_64 + step2[29] * COSPI_28_64);
    step1[19] = step2[19];
    step1[20] = step2[20];
    step1[21] = r(-step2[21] * COSPI_20_64 + step2[26] * COSPI_12_64);
    step1[26] = r(step2[21] * COSPI_12_64 + step2[26] * COSPI_20_64);
    step1[22] = r(-step2[22] * COSPI_12_64 - step2[25] * COSPI_20_64);
    step1[25] = r(-step2[22] * COSPI_20_64 + step2[25] * COSPI_12_64);
    step1[23] = step2[23];
    step1[24] = step2[24];
    step1[27] = step2[27];
    step1[28] = step2[28];

    // stage 4
    step2[0] = r((step1[0] + step1[1]) * COSPI_16_64);
    step2[1] = r((step1[0] - step1[1]) * COSPI_16_64);
    (step2[2], step2[3]) = rot(step1[2], step1[3], COSPI_24_64, COSPI_8_64);
    step2[4] = w(step1[4] + step1[5]);
    step2[5] = w(step1[4] - step1[5]);
    step2[6] = w(-step1[6] + step1[7]);
    step2[7] = w(step1[6] + step1[7]);
    step2[8] = step1[8];
    step2[15] = step1[15];
    step2[9] = r(-step1[9] * COSPI_8_64 + step1[14] * COSPI_24_64);
    step2[14] = r(step1[9] * COSPI_24_64 + step1[14] * COSPI_8_64);
    step2[10] = r(-step1[10] * COSPI_24_64 - step1[13] * COSPI_8_64);
    step2[13] = r(-step1[10] * COSPI_8_64 + step1[13] * COSPI_24_64);
    step2[11] = step1[11];
    step2[12] = step1[12];
    for k in [16, 24] {
        step2[k] = w(step1[k] + step1[k + 3]);
        step2[k + 1] = w(step1[k + 1] + step1[k + 2]);
        step2[k + 2] = w(step1[k + 1] - step1[k + 2]);
        step2[k + 3] = w(step1[k] - step1[k + 3]);
        step2[k + 4] = w(-step1[k + 4] + step1[k + 7]);
        step2[k + 5] = w(-step1[k + 5] + step1[k + 6]);
        step2[k + 6] = w(step1[k + 5] + step1[k + 6]);
        step2[k + 7] = w(step1[k + 4] + step1[k + 7]);
    }

    // stage 5
    step1[0] = w(step2[0] + step2[3]);
    step1[1] = w(step2[1] + step2[2]);
    step1[2] = w(step2[1] - step2[2]);
    step1[3] = w(step2[0] - step2[3]);
    step1[4] = step2[4];
    step1[5] = r((step2[6] - step2[5]) * COSPI_16_64);
    step1[6] = r((step2[5] + step2[6]) * COSPI_16_64);
    step1[7] = step2[7];
    step1[8] = w(step2[8] + step2[11]);
    step1[9] = w(step2[9] + step2[10]);
    step1[10] = w(step2[9] - step2[10]);
    step1[11] = w(step2[8] - step2[11]);
    step1[12] = w(-step2[12] + step2[15]);
    step1[13] = w(-step2[13] + step2[14]);
    step1[14] = w(step2[13] + step2[14]);
    step1[15] = w(step2[12] + step2[15]);
    step1[16] = step2[16];
    step1[17] = step2[17];
    step1[18] = r(-step2[18] * COSPI_8_64 + step2[29] * COSPI_24_64);
    step1[29] = r(step2[18] * COSPI_24_64 + step2[29] * COSPI_8_64);
    step1[19] = r(-step2[19] * COSPI_8_64 + step2[28] * COSPI_24_64);
    step1[28] = r(step2[19] * COSPI_24_64 + step2[28] * COSPI_8_64);
    step1[20] = r(-step2[20] * COSPI_24_64 - step2[27] * COSPI_8_64);
    step1[27] = r(-step2[20] * COSPI_8_64 + step2[27] * COSPI_24_64);
    step1[21] = r(-step2[21] * COSPI_24_64 - step2[26] * COSPI_8_64);
    step1[26] = r(-step2[21] * COSPI_8_64 + step2[26] * COSPI_24_64);
    for k in [22, 23, 24, 25, 30, 31] {
        step1[k] = step2[k];
    }

    // stage 6
    for k in 0..4 {
        step2[k] = w(step1[k] + step1[7 - k]);
        step2[7 - k] = w(step1[k] - step1[7 - k]);
    }
    step2[8] = step1[8];
    step2[9] = step1[9];
    step2[10] = r((-step1[10] + step1[13]) * COSPI_16_64);
    step2[13] = r((step1[10] + step1[13]) * COSPI_16_64);
    step2[11] = r((-step1[11] + step1[12]) * COSPI_16_64);
    step2[12] = r((step1[11] + step1[12]) * COSPI_16_64);
    step2[14] = step1[14];
    step2[15] = step1[15];
    for k in 0..4 {
        step2[16 + k] = w(step1[16 + k] + step1[23 - k]);
        step2[23 - k] = w(step1[16 + k] - step1[23 - k]);
        step2[24 + k] = w(-step1[24 + k] + step1[31 - k]);
        step2[31 - k] = w(step1[24 + k] + step1[31 - k]);
    }

    // stage 7
    for k in 0..8 {
        step1[k] = w(step2[k] + step2[15 - k]);
        step1[15 - k] = w(step2[k] - step2[15 - k]);
    }
    step1[16..20].copy_from_slice(&step2[16..20]);
    for (a, b) in [(20, 27), (21, 26), (22, 25), (23, 24)] {
        step1[a] = r((-step2[a] + step2[b]) * COSPI_16_64);
        step1[b] = r((step2[a] + step2[b]) * COSPI_16_64);
    }
    step1[28..32].copy_from_slice(&step2[28..32]);

    // final stage
    for k in 0..16 {
        output[k] = w(step1[k] + step1[31 - k]) as i32;
        output[31 - k] = w(step1[k] - step1[31 - k]) as i32;
    }
}
