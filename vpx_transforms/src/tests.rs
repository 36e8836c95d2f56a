// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.
use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use test_log::test;

use std::f64::consts::FRAC_1_SQRT_2;
use std::f64::consts::PI;
use std::f64::consts::SQRT_2;

#[inline(always)]
fn alpha(u: usize) -> f64 {
    if u == 0 {
        FRAC_1_SQRT_2
    } else {
        1.0
    }
}

/// Response at output `j` of the inverse DCT to a unit coefficient at `k`.
fn dct_basis(j: usize, k: usize, n: usize) -> f64 {
    alpha(k) * ((2 * j + 1) as f64 * k as f64 * PI / (2 * n) as f64).cos()
}

/// The 8- and 16-point ADSTs are DST-IV shaped.
fn dst4_basis(j: usize, k: usize, n: usize) -> f64 {
    ((2 * j + 1) as f64 * (2 * k + 1) as f64 * PI / (4 * n) as f64).sin()
}

/// The 4-point ADST is DST-VII shaped.
fn dst7_basis(j: usize, k: usize, _n: usize) -> f64 {
    2.0 * SQRT_2 / 3.0 * ((j + 1) as f64 * (2 * k + 1) as f64 * PI / 9.0).sin()
}

fn half_right_basis(j: usize, k: usize, _n: usize) -> f64 {
    match (j, k) {
        (j, k) if k >= 16 => {
            if j + 16 == k {
                4.0
            } else {
                0.0
            }
        }
        (j, _) if j < 16 => 0.0,
        (j, k) => SQRT_2 * dct_basis(j - 16, k, 16),
    }
}

fn identity_basis(gain: f64) -> impl Fn(usize, usize, usize) -> f64 {
    move |j, k, _| if j == k { gain } else { 0.0 }
}

fn slow_inverse(input: &[i32], basis: impl Fn(usize, usize, usize) -> f64) -> Vec<f64> {
    let n = input.len();
    (0..n)
        .map(|j| {
            input
                .iter()
                .enumerate()
                .map(|(k, &x)| x as f64 * basis(j, k, n))
                .sum()
        })
        .collect()
}

#[track_caller]
fn check_close(a: f64, b: f64, max_err: f64) {
    let abs = (a - b).abs();
    assert!(abs <= max_err, "a: {a} b: {b} abs diff: {abs:?}");
}

fn random_coefficients(n: usize, range: i32, seed: u64) -> Vec<i32> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-range..=range)).collect()
}

macro_rules! test_kernel_eq_slow {
    ($name:ident, $kernel:expr, $basis:expr, $tolerance:expr) => {
        paste::paste! {
            #[test]
            fn [<test_ $name _impulses_eq_slow>]() {
                let kernel: Kernel1D = $kernel;
                let n = kernel.size();
                for k in 0..n {
                    let mut input = vec![0; n];
                    input[k] = 4096;
                    let mut output = vec![0; n];
                    kernel.apply(&input, &mut output, BitDepth::Eight);
                    let expected = slow_inverse(&input, $basis);
                    for j in 0..n {
                        check_close(output[j] as f64, expected[j], 2.0);
                    }
                }
            }

            #[test]
            fn [<test_ $name _random_eq_slow>]() {
                let kernel: Kernel1D = $kernel;
                let n = kernel.size();
                for seed in 0..50 {
                    let input = random_coefficients(n, 1024, seed);
                    let mut output = vec![0; n];
                    kernel.apply(&input, &mut output, BitDepth::Twelve);
                    let expected = slow_inverse(&input, $basis);
                    for j in 0..n {
                        check_close(output[j] as f64, expected[j], $tolerance);
                    }
                }
            }
        }
    };
}

test_kernel_eq_slow!(idct4, Kernel1D::Idct4, dct_basis, 1.5);
test_kernel_eq_slow!(idct8, Kernel1D::Idct8, dct_basis, 3.0);
test_kernel_eq_slow!(idct16, Kernel1D::Idct16, dct_basis, 5.0);
test_kernel_eq_slow!(idct32, Kernel1D::Idct32, dct_basis, 8.0);
test_kernel_eq_slow!(iadst4, Kernel1D::Iadst4, dst7_basis, 1.0);
test_kernel_eq_slow!(iadst8, Kernel1D::Iadst8, dst4_basis, 3.0);
test_kernel_eq_slow!(iadst16, Kernel1D::Iadst16, dst4_basis, 4.0);
test_kernel_eq_slow!(halfright32, Kernel1D::HalfRight32, half_right_basis, 7.0);
test_kernel_eq_slow!(iidtx4, Kernel1D::Iidtx4, identity_basis(SQRT_2), 0.5);
test_kernel_eq_slow!(iidtx8, Kernel1D::Iidtx8, identity_basis(2.0), 0.0);
test_kernel_eq_slow!(iidtx16, Kernel1D::Iidtx16, identity_basis(2.0 * SQRT_2), 0.5);
test_kernel_eq_slow!(iidtx32, Kernel1D::Iidtx32, identity_basis(4.0), 0.0);

/// Fixed coefficient vector with entries in `[-offset, 40 * scale - offset]`.
fn ramp(n: usize, scale: i32, offset: i32) -> Vec<i32> {
    (0..n).map(|k| ((k * 29 + 7) % 41) as i32 * scale - offset).collect()
}

fn apply(kernel: Kernel1D, input: &[i32], bd: BitDepth) -> Vec<i32> {
    let mut output = vec![0; kernel.size()];
    kernel.apply(input, &mut output, bd);
    output
}

// Exact outputs of the libvpx butterflies for a fixed input.
#[test]
fn exact_outputs() {
    let expected: [(Kernel1D, &[i32]); 12] = [
        (
            Kernel1D::Idct4,
            &[
                124, 35, -587, -416,
            ],
        ),
        (
            Kernel1D::Idct8,
            &[
                -222, 544, 154, 88, -1280, -124, -118, -734,
            ],
        ),
        (
            Kernel1D::Idct16,
            &[
                -183, -280, 391, 864, -141, 563, -135, -506, 154, -2457, -289, 403, 390, -1121,
                -184, -853,
            ],
        ),
        (
            Kernel1D::Idct32,
            &[
                -163, -244, -121, -640, 768, 153, 869, 1313, -668, 98, 277, 1218, -917, 602, -1160,
                -45, -441, 1344, -3356, -2859, 540, -907, 802, 376, 99, 1115, -1803, -1010, -180,
                99, -1144, -767,
            ],
        ),
        (
            Kernel1D::Iadst4,
            &[
                178, 260, -469, -463,
            ],
        ),
        (
            Kernel1D::Iadst8,
            &[
                -578, 264, 307, 769, -803, -451, -32, -802,
            ],
        ),
        (
            Kernel1D::Iadst16,
            &[
                39, -391, -480, 584, 426, 334, 1001, -428, 1090, -1826, -1078, 233, 507, -1000,
                -319, -898,
            ],
        ),
        (
            Kernel1D::HalfRight32,
            &[
                0, -1104, 1564, 460, -644, -1748, 920, -184, -1288, 1380, 276, -828, 1840, 736,
                -368, -1472, -259, -395, 552, 1226, -200, 798, -193, -714, 216, -3477, -410, 570,
                552, -1584, -259, -1207,
            ],
        ),
        (
            Kernel1D::Iidtx4,
            &[
                -423, 520, 130, -260,
            ],
        ),
        (
            Kernel1D::Iidtx8,
            &[
                -598, 736, 184, -368, -920, 414, -138, -690,
            ],
        ),
        (
            Kernel1D::Iidtx16,
            &[
                -846, 1041, 260, -520, -1301, 585, -195, -976, 911, 130, -651, 1236, 455, -325,
                -1106, 781,
            ],
        ),
        (
            Kernel1D::Iidtx32,
            &[
                -1196, 1472, 368, -736, -1840, 828, -276, -1380, 1288, 184, -920, 1748, 644, -460,
                -1564, 1104, 0, -1104, 1564, 460, -644, -1748, 920, -184, -1288, 1380, 276, -828,
                1840, 736, -368, -1472,
            ],
        ),
    ];
    for (kernel, expected) in expected {
        let input = ramp(kernel.size(), 23, 460);
        for bd in BitDepth::ALL {
            assert_eq!(apply(kernel, &input, bd), expected, "{kernel:?} {bd:?}");
        }
    }
}

// Large inputs overflow the 16-bit intermediates of 8-bit content but fit the
// 20-bit ones of 12-bit content.
#[test]
fn exact_outputs_with_wraparound() {
    let expected: [(Kernel1D, &[i32], &[i32]); 3] = [
        (
            Kernel1D::Idct8,
            &[
                -14508, -30102, 10000, 5819, -17927, -8060, -7678, 17684,
            ],
            &[
                -14508, 35434, 10000, 5819, -83463, -8060, -7678, -47852,
            ],
        ),
        (
            Kernel1D::Iadst16,
            &[
                2534, -13997, -19779, 13014, 21961, 3643, 892, 18417, 24685, 18189, 20545, 944,
                -27494, -13682, 30691, 6950,
            ],
            &[
                2534, -25521, -31306, 38094, 27845, 21726, 65311, -27923, 71025, -119049, -70353,
                15151, 33054, -65171, -20801, -58586,
            ],
        ),
        (
            Kernel1D::Idct32,
            &[
                -10598, -17774, 18042, 7410, -8387, -7137, -5937, -26274, 2790, -3038, 21745,
                22216, 31991, 25232, 25098, -2887, -28687, -13086, 18704, 10951, -290, -24289,
                -3832, -21812, -12772, 4239, -7867, 19669, -22640, 18978, -7542, 15320,
            ],
            &[
                -10598, -16034, -7884, -41854, 50095, 9921, 56742, 85602, -43550, 6372, 18218,
                79429, -59793, 39123, -75586, -2887, -28687, 87598, -218939, -186553, 35177,
                -59154, 52294, 24528, 6424, 72632, -117605, -65957, -11768, 6512, -74818, -50216,
            ],
        ),
    ];
    for (kernel, eight, twelve) in expected {
        let input = ramp(kernel.size(), 1500, 30000);
        assert_eq!(apply(kernel, &input, BitDepth::Eight), eight, "{kernel:?}");
        assert_eq!(apply(kernel, &input, BitDepth::Twelve), twelve, "{kernel:?}");
    }
}

#[test]
fn zero_in_zero_out() {
    for kernel in Kernel1D::ALL {
        for bd in BitDepth::ALL {
            let input = vec![0; kernel.size()];
            let mut output = vec![-1; kernel.size()];
            kernel.apply(&input, &mut output, bd);
            assert!(output.iter().all(|&x| x == 0), "{kernel:?} {bd:?}");
        }
    }
}

#[test]
fn bit_depths_agree_without_overflow() {
    for kernel in Kernel1D::ALL {
        for seed in 0..20 {
            let input = random_coefficients(kernel.size(), 256, seed);
            let mut reference = vec![0; kernel.size()];
            kernel.apply(&input, &mut reference, BitDepth::Eight);
            for bd in [BitDepth::Ten, BitDepth::Twelve] {
                let mut output = vec![0; kernel.size()];
                kernel.apply(&input, &mut output, bd);
                assert_eq!(output, reference, "{kernel:?} {bd:?}");
            }
        }
    }
}

#[test]
fn eight_bit_wraps_at_sixteen_bits() {
    let input = vec![10000; 32];
    let mut eight = vec![0; 32];
    let mut twelve = vec![0; 32];
    iidtx32(&input, &mut eight, BitDepth::Eight);
    iidtx32(&input, &mut twelve, BitDepth::Twelve);
    assert!(eight.iter().all(|&x| x == 40000 - 65536));
    assert!(twelve.iter().all(|&x| x == 40000));
}

#[test]
fn half_right_columns_are_orthogonal() {
    let n = 32;
    let columns: Vec<Vec<i64>> = (0..n)
        .map(|k| {
            let mut input = vec![0; n];
            input[k] = 1024;
            let mut output = vec![0; n];
            ihalfright32(&input, &mut output, BitDepth::Eight);
            output.into_iter().map(i64::from).collect()
        })
        .collect();
    for a in 0..n {
        for b in 0..n {
            let dot: i64 = columns[a].iter().zip(&columns[b]).map(|(x, y)| x * y).sum();
            // Every column has norm 4 * 1024.
            let expected = if a == b { 16 * 1024 * 1024 } else { 0 };
            check_close(
                dot as f64 / (1024.0 * 1024.0),
                expected as f64 / (1024.0 * 1024.0),
                0.05,
            );
        }
    }
}

#[test]
fn kernel_lookup_round_trips() {
    for kernel in Kernel1D::ALL {
        assert_eq!(Kernel1D::new(kernel.basis(), kernel.size()), Some(kernel));
    }
    assert_eq!(Kernel1D::new(Basis::Adst, 32), Some(Kernel1D::HalfRight32));
    assert_eq!(Kernel1D::new(Basis::Dct, 64), None);
    assert_eq!(Kernel1D::new(Basis::Identity, 2), None);
}

#[test]
fn iwht_dc_matches_full() {
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    for bd in BitDepth::ALL {
        for _ in 0..200 {
            let mut input = [0i32; 16];
            input[0] = rng.random_range(-4096..=4096);
            let mut full = [0i32; 16];
            let mut dc = [0i32; 16];
            iwht4x4(&input, &mut full, bd);
            iwht4x4_dc(&input, &mut dc, bd);
            assert_eq!(full, dc, "dc {}", input[0]);
        }
    }
}

#[test]
#[should_panic]
fn short_input_panics() {
    let input = [1i32; 7];
    let mut output = [0i32; 8];
    idct8(&input, &mut output, BitDepth::Eight);
}
