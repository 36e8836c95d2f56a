// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::error::{Error, Result};

#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxSize {
    Tx4x4 = 0,
    Tx8x8 = 1,
    Tx16x16 = 2,
    Tx32x32 = 3,
    // 4 wide, 8 tall
    Tx4x8 = 4,
    // 8 wide, 4 tall
    Tx8x4 = 5,
}

impl TryFrom<u8> for TxSize {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(Error::InvalidTxSize(value))
    }
}

impl TxSize {
    pub const ALL: [TxSize; 6] = [
        TxSize::Tx4x4,
        TxSize::Tx8x8,
        TxSize::Tx16x16,
        TxSize::Tx32x32,
        TxSize::Tx4x8,
        TxSize::Tx8x4,
    ];

    pub const SQUARE: [TxSize; 4] = [
        TxSize::Tx4x4,
        TxSize::Tx8x8,
        TxSize::Tx16x16,
        TxSize::Tx32x32,
    ];

    pub const fn width(self) -> usize {
        match self {
            TxSize::Tx4x4 | TxSize::Tx4x8 => 4,
            TxSize::Tx8x8 | TxSize::Tx8x4 => 8,
            TxSize::Tx16x16 => 16,
            TxSize::Tx32x32 => 32,
        }
    }

    pub const fn height(self) -> usize {
        match self {
            TxSize::Tx4x4 | TxSize::Tx8x4 => 4,
            TxSize::Tx8x8 | TxSize::Tx4x8 => 8,
            TxSize::Tx16x16 => 16,
            TxSize::Tx32x32 => 32,
        }
    }

    /// Number of coefficients, which is also the largest valid end of block.
    pub const fn area(self) -> usize {
        self.width() * self.height()
    }

    pub const fn is_square(self) -> bool {
        self.width() == self.height()
    }

    /// Rounding shift applied to the output of the column pass before it is
    /// added to the prediction.
    pub const fn final_shift(self) -> u32 {
        match self {
            TxSize::Tx4x4 => 4,
            TxSize::Tx8x8 | TxSize::Tx4x8 | TxSize::Tx8x4 => 5,
            TxSize::Tx16x16 | TxSize::Tx32x32 => 6,
        }
    }
}

/// Selects the pair of one-dimensional bases of a block transform.
///
/// The first half of a name is the vertical (column) transform and the
/// second half the horizontal (row) one, so `AdstDct` runs an ADST down each
/// column and a DCT along each row. `V_*` types pair a vertical transform with
/// a horizontal identity and `H_*` the other way around. The FLIPADST
/// variants use the ADST kernel with the output mirrored along that axis.
///
/// Discriminants are the values used in the bitstream.
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    DctDct = 0,
    AdstDct = 1,
    DctAdst = 2,
    AdstAdst = 3,
    FlipAdstDct = 4,
    DctFlipAdst = 5,
    FlipAdstFlipAdst = 6,
    AdstFlipAdst = 7,
    FlipAdstAdst = 8,
    Idtx = 16,
    VDct = 17,
    HDct = 18,
    VAdst = 19,
    HAdst = 20,
    VFlipAdst = 21,
    HFlipAdst = 22,
}

// DST based types, reserved in the bitstream but without an inverse.
const DST_TX_TYPES: [u8; 9] = [9, 10, 11, 12, 13, 14, 15, 23, 24];

impl TryFrom<u8> for TxType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if DST_TX_TYPES.contains(&value) {
            return Err(Error::UnsupportedTxType(value));
        }
        Self::from_u8(value).ok_or(Error::InvalidTxType(value))
    }
}

impl TxType {
    pub const ALL: [TxType; 16] = [
        TxType::DctDct,
        TxType::AdstDct,
        TxType::DctAdst,
        TxType::AdstAdst,
        TxType::FlipAdstDct,
        TxType::DctFlipAdst,
        TxType::FlipAdstFlipAdst,
        TxType::AdstFlipAdst,
        TxType::FlipAdstAdst,
        TxType::Idtx,
        TxType::VDct,
        TxType::HDct,
        TxType::VAdst,
        TxType::HAdst,
        TxType::VFlipAdst,
        TxType::HFlipAdst,
    ];

    /// Whether the residual is mirrored top to bottom.
    pub const fn flips_vertically(self) -> bool {
        matches!(
            self,
            TxType::FlipAdstDct
                | TxType::FlipAdstAdst
                | TxType::VFlipAdst
                | TxType::FlipAdstFlipAdst
        )
    }

    /// Whether the residual is mirrored left to right.
    pub const fn flips_horizontally(self) -> bool {
        matches!(
            self,
            TxType::DctFlipAdst
                | TxType::AdstFlipAdst
                | TxType::HFlipAdst
                | TxType::FlipAdstFlipAdst
        )
    }
}
