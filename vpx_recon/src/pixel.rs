// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;

use vpx_transforms::BitDepth;

mod private {
    pub trait Sealed {}
}

/// Storage type of a reconstructed sample: `u8` for 8-bit content and `u16`
/// for high bit depth content.
pub trait Pixel: private::Sealed + Copy + Default + 'static + Debug + PartialEq + Send + Sync {
    /// Deepest content this sample type can hold.
    const MAX_BIT_DEPTH: BitDepth;

    fn to_i32(self) -> i32;
    /// `v` must already be clipped to the range of the bit depth in use.
    fn from_clipped(v: i32) -> Self;
    #[cfg(test)]
    fn random<R: rand::Rng>(rng: &mut R, bd: BitDepth) -> Self;
}

macro_rules! impl_pixel {
    ($ty: ty, $bd: ident) => {
        impl private::Sealed for $ty {}
        impl Pixel for $ty {
            const MAX_BIT_DEPTH: BitDepth = BitDepth::$bd;

            #[inline(always)]
            fn to_i32(self) -> i32 {
                self as i32
            }

            #[inline(always)]
            fn from_clipped(v: i32) -> $ty {
                debug_assert!(v >= 0 && v <= <$ty>::MAX as i32);
                v as $ty
            }

            #[cfg(test)]
            fn random<R: rand::Rng>(rng: &mut R, bd: BitDepth) -> Self {
                rng.random_range(0..=bd.max_value()) as $ty
            }
        }
    };
}

impl_pixel!(u8, Eight);
impl_pixel!(u16, Twelve);
