// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use vpx_transforms::{Basis, Kernel1D};

use crate::tx::{TxSize, TxType};

/// The two one-dimensional kernels of a block transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelPair {
    /// Run down each column, `height` points long.
    pub cols: Kernel1D,
    /// Run along each coefficient row, `width` points long.
    pub rows: Kernel1D,
}

/// Vertical and horizontal bases of `tx_type`. FLIPADST uses the ADST basis.
pub const fn bases(tx_type: TxType) -> (Basis, Basis) {
    use Basis::*;
    match tx_type {
        TxType::DctDct => (Dct, Dct),
        TxType::AdstDct => (Adst, Dct),
        TxType::DctAdst => (Dct, Adst),
        TxType::AdstAdst => (Adst, Adst),
        TxType::FlipAdstDct => (Adst, Dct),
        TxType::DctFlipAdst => (Dct, Adst),
        TxType::FlipAdstFlipAdst => (Adst, Adst),
        TxType::AdstFlipAdst => (Adst, Adst),
        TxType::FlipAdstAdst => (Adst, Adst),
        TxType::Idtx => (Identity, Identity),
        TxType::VDct => (Dct, Identity),
        TxType::HDct => (Identity, Dct),
        TxType::VAdst => (Adst, Identity),
        TxType::HAdst => (Identity, Adst),
        TxType::VFlipAdst => (Adst, Identity),
        TxType::HFlipAdst => (Identity, Adst),
    }
}

pub fn kernel_pair(tx_type: TxType, tx_size: TxSize) -> KernelPair {
    let (col_basis, row_basis) = bases(tx_type);
    let kernel = |basis: Basis, len: usize| {
        Kernel1D::new(basis, len).unwrap_or_else(|| unreachable!("no {len}-point {basis:?} kernel"))
    };
    KernelPair {
        cols: kernel(col_basis, tx_size.height()),
        rows: kernel(row_basis, tx_size.width()),
    }
}
