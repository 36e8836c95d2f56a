// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::consts::DCT_CONST_BITS;

/// Sample precision of the content being reconstructed.
///
/// The precision also fixes the width of the intermediate values inside the
/// kernels: every stored intermediate wraps to `8 + bits` bits, so 8-bit
/// content wraps at 16 bits, 10-bit at 18 and 12-bit at 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitDepth {
    #[default]
    Eight,
    Ten,
    Twelve,
}

impl BitDepth {
    pub const ALL: [BitDepth; 3] = [BitDepth::Eight, BitDepth::Ten, BitDepth::Twelve];

    pub fn from_bits(bits: u32) -> Option<BitDepth> {
        match bits {
            8 => Some(BitDepth::Eight),
            10 => Some(BitDepth::Ten),
            12 => Some(BitDepth::Twelve),
            _ => None,
        }
    }

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Ten => 10,
            BitDepth::Twelve => 12,
        }
    }

    /// Largest representable sample value.
    #[inline(always)]
    pub const fn max_value(self) -> i32 {
        (1 << self.bits()) - 1
    }

    /// Two's complement wraparound of `x` to `8 + bits` bits.
    ///
    /// This is not saturation: results out of range fold over, exactly as a
    /// 16-bit register would for 8-bit content.
    #[inline(always)]
    pub fn wrap(self, x: i64) -> i32 {
        let shift = 24 - self.bits();
        ((x as i32) << shift) >> shift
    }

    /// `dct_const_round_shift` followed by [`BitDepth::wrap`]; the store
    /// operation used after every multiply in the kernels.
    #[inline(always)]
    pub fn round_wrap(self, x: i64) -> i32 {
        self.wrap(round_shift(x))
    }

    /// Adds a residual to a sample and clips the result to the sample range.
    #[inline(always)]
    pub fn clip_pixel_add(self, dest: i32, residual: i64) -> i32 {
        let sum = self.wrap(dest as i64 + self.wrap(residual) as i64);
        sum.clamp(0, self.max_value())
    }
}

/// Rounds away the `DCT_CONST_BITS` fractional bits of a constant product.
#[inline(always)]
pub const fn round_shift(x: i64) -> i64 {
    (x + (1 << (DCT_CONST_BITS - 1))) >> DCT_CONST_BITS
}

#[inline(always)]
pub const fn round_power_of_two(x: i64, shift: u32) -> i64 {
    (x + (1 << (shift - 1))) >> shift
}

/// Loads the first `N` coefficients of `input` into 64-bit working registers.
#[inline(always)]
pub(crate) fn widen<const N: usize>(input: &[i32]) -> [i64; N] {
    std::array::from_fn(|k| input[k] as i64)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn wrap_folds_instead_of_saturating() {
        assert_eq!(BitDepth::Eight.wrap(32767), 32767);
        assert_eq!(BitDepth::Eight.wrap(32768), -32768);
        assert_eq!(BitDepth::Eight.wrap(-32769), 32767);
        assert_eq!(BitDepth::Ten.wrap(1 << 17), -(1 << 17));
        assert_eq!(BitDepth::Twelve.wrap((1 << 19) - 1), (1 << 19) - 1);
        assert_eq!(BitDepth::Twelve.wrap(1 << 19), -(1 << 19));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_shift(8191), 0);
        assert_eq!(round_shift(8192), 1);
        assert_eq!(round_shift(-8192), 0);
        assert_eq!(round_shift(-8193), -1);
        assert_eq!(round_power_of_two(176, 5), 5);
        assert_eq!(round_power_of_two(-16, 5), 0);
        assert_eq!(round_power_of_two(-17, 5), -1);
    }

    #[test]
    fn clip_pixel_add_clamps_to_range() {
        assert_eq!(BitDepth::Eight.clip_pixel_add(250, 10), 255);
        assert_eq!(BitDepth::Eight.clip_pixel_add(5, -10), 0);
        assert_eq!(BitDepth::Ten.clip_pixel_add(1000, 100), 1023);
        assert_eq!(BitDepth::Twelve.clip_pixel_add(4000, 90), 4090);
    }

    #[test]
    fn from_bits() {
        for bd in BitDepth::ALL {
            assert_eq!(BitDepth::from_bits(bd.bits()), Some(bd));
        }
        assert_eq!(BitDepth::from_bits(9), None);
        assert_eq!(BitDepth::from_bits(16), None);
    }
}
