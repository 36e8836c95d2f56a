// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Fixed-point constants shared by all kernels. Values are scaled by
//! `1 << DCT_CONST_BITS`.

pub const DCT_CONST_BITS: u32 = 14;

/// Pre-shift applied to Walsh-Hadamard input.
pub const UNIT_QUANT_SHIFT: u32 = 2;

// round(16384 * cos(k * pi / 64))
pub const COSPI_1_64: i64 = 16364;
pub const COSPI_2_64: i64 = 16305;
pub const COSPI_3_64: i64 = 16207;
pub const COSPI_4_64: i64 = 16069;
pub const COSPI_5_64: i64 = 15893;
pub const COSPI_6_64: i64 = 15679;
pub const COSPI_7_64: i64 = 15426;
pub const COSPI_8_64: i64 = 15137;
pub const COSPI_9_64: i64 = 14811;
pub const COSPI_10_64: i64 = 14449;
pub const COSPI_11_64: i64 = 14053;
pub const COSPI_12_64: i64 = 13623;
pub const COSPI_13_64: i64 = 13160;
pub const COSPI_14_64: i64 = 12665;
pub const COSPI_15_64: i64 = 12140;
pub const COSPI_16_64: i64 = 11585;
pub const COSPI_17_64: i64 = 11003;
pub const COSPI_18_64: i64 = 10394;
pub const COSPI_19_64: i64 = 9760;
pub const COSPI_20_64: i64 = 9102;
pub const COSPI_21_64: i64 = 8423;
pub const COSPI_22_64: i64 = 7723;
pub const COSPI_23_64: i64 = 7005;
pub const COSPI_24_64: i64 = 6270;
pub const COSPI_25_64: i64 = 5520;
pub const COSPI_26_64: i64 = 4756;
pub const COSPI_27_64: i64 = 3981;
pub const COSPI_28_64: i64 = 3196;
pub const COSPI_29_64: i64 = 2404;
pub const COSPI_30_64: i64 = 1606;
pub const COSPI_31_64: i64 = 804;

// 16384 * 2 * sqrt(2) * sin(k * pi / 9) / 3
pub const SINPI_1_9: i64 = 5283;
pub const SINPI_2_9: i64 = 9929;
pub const SINPI_3_9: i64 = 13377;
pub const SINPI_4_9: i64 = 15212;

/// round(16384 * sqrt(2)), the scale of identity kernels and of the row pass
/// of rectangular transforms.
pub const SQRT2: i64 = 23170;
