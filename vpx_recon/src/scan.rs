// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::sync::OnceLock;

use crate::{
    block_info::{BlockModeInfo, PlaneType},
    error::{Error, Result},
    tx::{TxSize, TxType},
    util::tracing_wrappers::*,
};

mod context;
pub mod tables;

pub use context::*;
use tables::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanKind {
    #[default]
    Default,
    Col,
    Row,
}

impl ScanKind {
    pub const ALL: [ScanKind; 3] = [ScanKind::Default, ScanKind::Col, ScanKind::Row];
}

/// Scan kind matching the energy distribution of `tx_type`. A vertical ADST
/// concentrates energy in the first row, which the column scan visits early.
pub const fn scan_kind(tx_type: TxType) -> ScanKind {
    match tx_type {
        TxType::AdstDct | TxType::FlipAdstDct => ScanKind::Col,
        TxType::DctAdst | TxType::DctFlipAdst => ScanKind::Row,
        _ => ScanKind::Default,
    }
}

/// A coefficient scan with its inverse and the neighbor table used to derive
/// entropy contexts.
#[derive(Debug)]
pub struct ScanOrder {
    tx_size: TxSize,
    kind: ScanKind,
    scan: &'static [u16],
    iscan: Box<[u16]>,
    // Scan positions (not raster indices) of up to two previously decoded
    // neighbors. The first entry is None only at position 0.
    neighbors: Box<[[Option<u16>; 2]]>,
}

impl ScanOrder {
    fn new(tx_size: TxSize, kind: ScanKind, scan: &'static [u16]) -> ScanOrder {
        let side = tx_size.width();
        assert_eq!(scan.len(), side * side);

        let mut iscan = vec![0u16; scan.len()].into_boxed_slice();
        for (pos, &rc) in scan.iter().enumerate() {
            iscan[rc as usize] = pos as u16;
        }

        let neighbors: Box<[_]> = scan
            .iter()
            .map(|&rc| {
                let (i, j) = (rc as usize / side, rc as usize % side);
                let above = || Some(iscan[rc as usize - side]);
                let left = || Some(iscan[rc as usize - 1]);
                match (i > 0, j > 0) {
                    (true, true) => match kind {
                        ScanKind::Col => [above(), None],
                        ScanKind::Row => [left(), None],
                        ScanKind::Default => [above(), left()],
                    },
                    (true, false) => [above(), None],
                    (false, true) => [left(), None],
                    (false, false) => [None, None],
                }
            })
            .collect();

        for (pos, nb) in neighbors.iter().enumerate() {
            debug_assert!(nb.iter().flatten().all(|&p| (p as usize) < pos));
        }

        ScanOrder {
            tx_size,
            kind,
            scan,
            iscan,
            neighbors,
        }
    }

    pub fn tx_size(&self) -> TxSize {
        self.tx_size
    }

    pub fn kind(&self) -> ScanKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.scan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scan.is_empty()
    }

    /// Raster index of each scan position.
    pub fn scan(&self) -> &[u16] {
        self.scan
    }

    /// Scan position of each raster index.
    pub fn iscan(&self) -> &[u16] {
        &self.iscan
    }

    pub fn neighbors(&self) -> &[[Option<u16>; 2]] {
        &self.neighbors
    }

    /// Entropy context of scan position `n`, given the tokens decoded at
    /// positions `0..n`. The cache already holds energy classes, so the
    /// context is their rounded average.
    #[inline]
    pub fn context(&self, n: usize, cache: &TokenCache) -> u8 {
        match self.neighbors[n] {
            [None, _] => 0,
            [Some(a), None] => cache.get(a as usize),
            [Some(a), Some(b)] => (1 + cache.get(a as usize) + cache.get(b as usize)) >> 1,
        }
    }
}

struct ScanOrders {
    // Indexed by [TxSize][ScanKind] for sizes up to 16x16.
    small: [[ScanOrder; 3]; 3],
    default_32x32: ScanOrder,
}

impl ScanOrders {
    fn build() -> ScanOrders {
        const SIZES: [TxSize; 3] = [TxSize::Tx4x4, TxSize::Tx8x8, TxSize::Tx16x16];
        let raw = |size: TxSize, kind: ScanKind| -> &'static [u16] {
            match (size, kind) {
                (TxSize::Tx4x4, ScanKind::Default) => &DEFAULT_SCAN_4X4,
                (TxSize::Tx4x4, ScanKind::Col) => &COL_SCAN_4X4,
                (TxSize::Tx4x4, ScanKind::Row) => &ROW_SCAN_4X4,
                (TxSize::Tx8x8, ScanKind::Default) => &DEFAULT_SCAN_8X8,
                (TxSize::Tx8x8, ScanKind::Col) => &COL_SCAN_8X8,
                (TxSize::Tx8x8, ScanKind::Row) => &ROW_SCAN_8X8,
                (TxSize::Tx16x16, ScanKind::Default) => &DEFAULT_SCAN_16X16,
                (TxSize::Tx16x16, ScanKind::Col) => &COL_SCAN_16X16,
                (TxSize::Tx16x16, ScanKind::Row) => &ROW_SCAN_16X16,
                _ => unreachable!(),
            }
        };
        let small = array_init::array_init(|s| {
            array_init::array_init(|k| {
                ScanOrder::new(SIZES[s], ScanKind::ALL[k], raw(SIZES[s], ScanKind::ALL[k]))
            })
        });
        let default_32x32 = ScanOrder::new(TxSize::Tx32x32, ScanKind::Default, &DEFAULT_SCAN_32X32);
        debug!("built coefficient scan orders");
        ScanOrders {
            small,
            default_32x32,
        }
    }
}

static SCAN_ORDERS: OnceLock<ScanOrders> = OnceLock::new();

fn scan_orders() -> &'static ScanOrders {
    SCAN_ORDERS.get_or_init(ScanOrders::build)
}

/// Builds the scan tables now instead of on first use.
pub fn init_scan_orders() {
    scan_orders();
}

/// Scan order of `kind` for a square `tx_size`. 32x32 blocks only have the
/// default scan, which is returned for every kind.
///
/// Panics if `tx_size` is not square.
pub fn scan_order(tx_size: TxSize, kind: ScanKind) -> &'static ScanOrder {
    let orders = scan_orders();
    let k = kind as usize;
    match tx_size {
        TxSize::Tx4x4 => &orders.small[0][k],
        TxSize::Tx8x8 => &orders.small[1][k],
        TxSize::Tx16x16 => &orders.small[2][k],
        TxSize::Tx32x32 => &orders.default_32x32,
        TxSize::Tx4x8 | TxSize::Tx8x4 => panic!("no scan order for {tx_size:?}"),
    }
}

/// Scan order the decoder uses for a block, chosen from its coding mode.
///
/// Only luma blocks of lossy intra-coded blocks smaller than 32x32 use a
/// directional scan.
pub fn get_scan(
    tx_size: TxSize,
    plane: PlaneType,
    mode_info: &BlockModeInfo,
) -> &'static ScanOrder {
    let kind = if plane != PlaneType::Y
        || mode_info.lossless
        || mode_info.is_inter
        || tx_size == TxSize::Tx32x32
    {
        ScanKind::Default
    } else {
        scan_kind(mode_info.mode.intra_tx_type())
    };
    trace!(?tx_size, ?plane, ?kind);
    scan_order(tx_size, kind)
}

pub fn try_get_scan(
    tx_size: TxSize,
    plane: PlaneType,
    mode_info: &BlockModeInfo,
) -> Result<&'static ScanOrder> {
    if !tx_size.is_square() {
        warn!(?tx_size, "scan requested for rectangular transform");
        return Err(Error::NoScanForSize(tx_size));
    }
    Ok(get_scan(tx_size, plane, mode_info))
}
