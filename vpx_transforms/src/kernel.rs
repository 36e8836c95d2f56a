// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use crate::{bit_depth::BitDepth, iadst::*, idct::*, identity::*};

/// The one-dimensional bases a transform type can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    Dct,
    Adst,
    Identity,
}

/// A one-dimensional inverse kernel at a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel1D {
    Idct4,
    Idct8,
    Idct16,
    Idct32,
    Iadst4,
    Iadst8,
    Iadst16,
    HalfRight32,
    Iidtx4,
    Iidtx8,
    Iidtx16,
    Iidtx32,
}

impl Kernel1D {
    pub const ALL: [Kernel1D; 12] = [
        Kernel1D::Idct4,
        Kernel1D::Idct8,
        Kernel1D::Idct16,
        Kernel1D::Idct32,
        Kernel1D::Iadst4,
        Kernel1D::Iadst8,
        Kernel1D::Iadst16,
        Kernel1D::HalfRight32,
        Kernel1D::Iidtx4,
        Kernel1D::Iidtx8,
        Kernel1D::Iidtx16,
        Kernel1D::Iidtx32,
    ];

    /// Resolves a basis at one of the supported lengths. At length 32 the
    /// ADST basis is served by [`Kernel1D::HalfRight32`].
    pub fn new(basis: Basis, size: usize) -> Option<Kernel1D> {
        Some(match (basis, size) {
            (Basis::Dct, 4) => Kernel1D::Idct4,
            (Basis::Dct, 8) => Kernel1D::Idct8,
            (Basis::Dct, 16) => Kernel1D::Idct16,
            (Basis::Dct, 32) => Kernel1D::Idct32,
            (Basis::Adst, 4) => Kernel1D::Iadst4,
            (Basis::Adst, 8) => Kernel1D::Iadst8,
            (Basis::Adst, 16) => Kernel1D::Iadst16,
            (Basis::Adst, 32) => Kernel1D::HalfRight32,
            (Basis::Identity, 4) => Kernel1D::Iidtx4,
            (Basis::Identity, 8) => Kernel1D::Iidtx8,
            (Basis::Identity, 16) => Kernel1D::Iidtx16,
            (Basis::Identity, 32) => Kernel1D::Iidtx32,
            _ => return None,
        })
    }

    pub const fn size(self) -> usize {
        match self {
            Kernel1D::Idct4 | Kernel1D::Iadst4 | Kernel1D::Iidtx4 => 4,
            Kernel1D::Idct8 | Kernel1D::Iadst8 | Kernel1D::Iidtx8 => 8,
            Kernel1D::Idct16 | Kernel1D::Iadst16 | Kernel1D::Iidtx16 => 16,
            Kernel1D::Idct32 | Kernel1D::HalfRight32 | Kernel1D::Iidtx32 => 32,
        }
    }

    pub const fn basis(self) -> Basis {
        match self {
            Kernel1D::Idct4 | Kernel1D::Idct8 | Kernel1D::Idct16 | Kernel1D::Idct32 => Basis::Dct,
            Kernel1D::Iadst4 | Kernel1D::Iadst8 | Kernel1D::Iadst16 | Kernel1D::HalfRight32 => {
                Basis::Adst
            }
            Kernel1D::Iidtx4 | Kernel1D::Iidtx8 | Kernel1D::Iidtx16 | Kernel1D::Iidtx32 => {
                Basis::Identity
            }
        }
    }

    /// Runs the kernel on the first `size()` entries of `input`, writing the
    /// first `size()` entries of `output`. Panics if either slice is shorter.
    #[inline]
    pub fn apply(self, input: &[i32], output: &mut [i32], bd: BitDepth) {
        match self {
            Kernel1D::Idct4 => idct4(input, output, bd),
            Kernel1D::Idct8 => idct8(input, output, bd),
            Kernel1D::Idct16 => idct16(input, output, bd),
            Kernel1D::Idct32 => idct32(input, output, bd),
            Kernel1D::Iadst4 => iadst4(input, output, bd),
            Kernel1D::Iadst8 => iadst8(input, output, bd),
            Kernel1D::Iadst16 => iadst16(input, output, bd),
            Kernel1D::HalfRight32 => ihalfright32(input, output, bd),
            Kernel1D::Iidtx4 => iidtx4(input, output, bd),
            Kernel1D::Iidtx8 => iidtx8(input, output, bd),
            Kernel1D::Iidtx16 => iidtx16(input, output, bd),
            Kernel1D::Iidtx32 => iidtx32(input, output, bd),
        }
    }
}
