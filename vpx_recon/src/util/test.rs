// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use rand::Rng;
use vpx_transforms::BitDepth;

use crate::pixel::Pixel;

/// Forward 4x4 Walsh-Hadamard transform of a raster residual, scaled the way
/// a lossless encoder scales it. [`vpx_transforms::iwht4x4`] undoes it
/// exactly.
pub fn fwht4x4(residual: &[i32; 16]) -> [i32; 16] {
    fn lift(mut a: i64, mut b: i64, mut c: i64, mut d: i64) -> [i64; 4] {
        a += b;
        d -= c;
        let e = (a - d) >> 1;
        b = e - b;
        c = e - c;
        a -= c;
        d += b;
        [a, c, d, b]
    }
    let mut tmp = [0i64; 16];
    for col in 0..4 {
        let out = lift(
            residual[col] as i64,
            residual[4 + col] as i64,
            residual[8 + col] as i64,
            residual[12 + col] as i64,
        );
        for (row, v) in out.into_iter().enumerate() {
            tmp[row * 4 + col] = v;
        }
    }
    let mut coeffs = [0i32; 16];
    for (src, dst) in tmp.chunks_exact(4).zip(coeffs.chunks_exact_mut(4)) {
        let out = lift(src[0], src[1], src[2], src[3]);
        for (d, v) in dst.iter_mut().zip(out) {
            *d = (v * 4) as i32;
        }
    }
    coeffs
}

/// A `width` x `height` block of random samples for `bd`.
pub fn random_block<P: Pixel, R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    bd: BitDepth,
) -> Vec<P> {
    (0..width * height).map(|_| P::random(rng, bd)).collect()
}

/// Copy of a raster block with its rows in reverse order.
pub fn flip_rows<T: Copy>(block: &[T], width: usize) -> Vec<T> {
    block.chunks_exact(width).rev().flatten().copied().collect()
}

/// Copy of a raster block with each row reversed.
pub fn flip_cols<T: Copy>(block: &[T], width: usize) -> Vec<T> {
    block
        .chunks_exact(width)
        .flat_map(|row| row.iter().rev())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn flat_residual_is_pure_dc() {
        let coeffs = fwht4x4(&[3; 16]);
        assert_eq!(coeffs[0], 3 * 16);
        assert!(coeffs[1..].iter().all(|&c| c == 0));
    }

    #[test]
    fn flips() {
        let block = [1, 2, 3, 4, 5, 6];
        assert_eq!(flip_rows(&block, 3), [4, 5, 6, 1, 2, 3]);
        assert_eq!(flip_cols(&block, 3), [3, 2, 1, 6, 5, 4]);
    }
}
