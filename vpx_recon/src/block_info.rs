// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

use crate::{
    error::{Error, Result},
    tx::TxType,
};

#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaneType {
    #[default]
    Y = 0,
    Uv = 1,
}

impl TryFrom<u8> for PlaneType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(Error::InvalidPlaneType(value))
    }
}

/// Intra prediction modes. Directional modes are named after their angle in
/// degrees.
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PredictionMode {
    #[default]
    Dc = 0,
    V = 1,
    H = 2,
    D45 = 3,
    D135 = 4,
    D117 = 5,
    D153 = 6,
    D207 = 7,
    D63 = 8,
    Tm = 9,
}

impl TryFrom<u8> for PredictionMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(Error::InvalidPredictionMode(value))
    }
}

impl PredictionMode {
    pub const ALL: [PredictionMode; 10] = [
        PredictionMode::Dc,
        PredictionMode::V,
        PredictionMode::H,
        PredictionMode::D45,
        PredictionMode::D135,
        PredictionMode::D117,
        PredictionMode::D153,
        PredictionMode::D207,
        PredictionMode::D63,
        PredictionMode::Tm,
    ];

    /// Transform type implied by an intra mode. Modes that predict from the
    /// row above use an ADST vertically and modes that predict from the left
    /// column use one horizontally.
    pub const fn intra_tx_type(self) -> TxType {
        match self {
            PredictionMode::Dc | PredictionMode::D45 => TxType::DctDct,
            PredictionMode::V | PredictionMode::D117 | PredictionMode::D63 => TxType::AdstDct,
            PredictionMode::H | PredictionMode::D153 | PredictionMode::D207 => TxType::DctAdst,
            PredictionMode::D135 | PredictionMode::Tm => TxType::AdstAdst,
        }
    }
}

/// Coding-mode metadata of a block, as far as scan selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockModeInfo {
    pub mode: PredictionMode,
    pub is_inter: bool,
    pub lossless: bool,
}

impl BlockModeInfo {
    pub fn intra(mode: PredictionMode) -> BlockModeInfo {
        BlockModeInfo {
            mode,
            is_inter: false,
            lossless: false,
        }
    }

    pub fn inter() -> BlockModeInfo {
        BlockModeInfo {
            is_inter: true,
            ..Default::default()
        }
    }

    pub fn with_lossless(self, lossless: bool) -> BlockModeInfo {
        BlockModeInfo { lossless, ..self }
    }

    pub fn with_mode(self, mode: PredictionMode) -> BlockModeInfo {
        BlockModeInfo { mode, ..self }
    }
}
