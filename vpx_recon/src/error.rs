// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use thiserror::Error;

use crate::tx::{TxSize, TxType};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid transform size {0}")]
    InvalidTxSize(u8),
    #[error("Invalid transform type {0}")]
    InvalidTxType(u8),
    #[error("Transform type {0} has no inverse transform")]
    UnsupportedTxType(u8),
    #[error("Invalid prediction mode {0}")]
    InvalidPredictionMode(u8),
    #[error("Invalid plane type {0}")]
    InvalidPlaneType(u8),
    #[error("Invalid bit depth {0}, expected 8, 10 or 12")]
    InvalidBitDepth(u32),
    #[error("Lossless blocks must use 4x4 DCT_DCT, got {0:?} {1:?}")]
    LosslessRequiresDct4x4(TxSize, TxType),
    #[error("End of block {eob} is past the {max} coefficients of the block")]
    EobOutOfRange { eob: usize, max: usize },
    #[error("Coefficient block has {len} entries, need {needed}")]
    CoefficientsTooShort { len: usize, needed: usize },
    #[error("Destination buffer has {len} samples, need {needed}")]
    BufferTooSmall { len: usize, needed: usize },
    #[error("Stride {stride} is smaller than block width {width}")]
    StrideTooSmall { stride: usize, width: usize },
    #[error("Block of {height} rows with stride {stride} spans more than usize::MAX samples")]
    LayoutOverflow { stride: usize, height: usize },
    #[error("Samples of this type cannot hold {0}-bit content")]
    SampleTypeTooNarrow(u32),
    #[error("No scan order exists for transform size {0:?}")]
    NoScanForSize(TxSize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
