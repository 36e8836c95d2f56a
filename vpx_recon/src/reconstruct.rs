// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Inverse transform of a dequantized coefficient block and accumulation of
//! the residual into the prediction.

use vpx_transforms::BitDepth;

use crate::{
    block_view::{Axis, BlockViewMut, check_layout},
    error::{Error, Result},
    pixel::Pixel,
    tx::{TxSize, TxType},
    util::tracing_wrappers::*,
};

mod dct;
mod identity;
mod kernel_pair;
mod lossless;
mod separable;

pub use kernel_pair::*;

/// Everything the dispatcher needs to know about a block besides its
/// coefficients and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconParams {
    pub tx_size: TxSize,
    pub tx_type: TxType,
    /// One past the scan position of the last nonzero coefficient.
    pub eob: usize,
    pub lossless: bool,
    pub bit_depth: BitDepth,
}

impl ReconParams {
    /// Lossy 8-bit block with every coefficient possibly nonzero.
    pub fn new(tx_size: TxSize, tx_type: TxType) -> ReconParams {
        ReconParams {
            tx_size,
            tx_type,
            eob: tx_size.area(),
            lossless: false,
            bit_depth: BitDepth::Eight,
        }
    }

    pub fn with_eob(self, eob: usize) -> ReconParams {
        ReconParams { eob, ..self }
    }

    pub fn with_lossless(self, lossless: bool) -> ReconParams {
        ReconParams { lossless, ..self }
    }

    pub fn with_bit_depth(self, bit_depth: BitDepth) -> ReconParams {
        ReconParams { bit_depth, ..self }
    }

    /// The computation [`inverse_transform_add`] performs for these
    /// parameters.
    pub fn path(&self) -> TransformPath {
        if self.lossless {
            return if self.eob > 1 {
                TransformPath::Lossless
            } else {
                TransformPath::LosslessDc
            };
        }
        let size = self.tx_size;
        match self.tx_type {
            TxType::Idtx if size.is_square() => TransformPath::Identity,
            TxType::DctDct if size.is_square() => {
                if dct::is_dc_only(size, self.eob) {
                    TransformPath::DcOnly
                } else {
                    let rows = dct::partial_rows(size, self.eob).unwrap_or(size.height());
                    TransformPath::Separable { rows }
                }
            }
            _ => TransformPath::Separable {
                rows: size.height(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformPath {
    /// Full inverse WHT.
    Lossless,
    /// Inverse WHT of the DC coefficient alone.
    LosslessDc,
    /// DCT_DCT with only a DC coefficient.
    DcOnly,
    /// Square IDTX, which skips both passes.
    Identity,
    /// Row pass over the first `rows` coefficient rows, then a column pass.
    Separable { rows: usize },
}

/// Parses a bit depth given in bits.
pub fn bit_depth_from_bits(bits: u32) -> Result<BitDepth> {
    BitDepth::from_bits(bits).ok_or(Error::InvalidBitDepth(bits))
}

const fn axis(reverse: bool) -> Axis {
    if reverse { Axis::Reverse } else { Axis::Forward }
}

/// Inverse transforms `coeffs` (raster order, `width * height` entries) and
/// adds the residual to the block at the start of `dest`, clipping each
/// sample to the range of `params.bit_depth`.
///
/// Panics if the parameters are inconsistent or a buffer is too small;
/// [`try_inverse_transform_add`] reports those as errors instead.
pub fn inverse_transform_add<P: Pixel>(
    coeffs: &[i32],
    dest: &mut [P],
    stride: usize,
    params: &ReconParams,
) {
    let ReconParams {
        tx_size,
        tx_type,
        eob,
        lossless,
        bit_depth: bd,
    } = *params;
    let area = tx_size.area();
    assert!(
        bd.bits() <= P::MAX_BIT_DEPTH.bits(),
        "{bd:?} content does not fit the sample type"
    );
    assert!(
        !lossless || (tx_size == TxSize::Tx4x4 && tx_type == TxType::DctDct),
        "lossless block with {tx_size:?} {tx_type:?}"
    );
    assert!(eob <= area, "eob {eob} > {area}");
    assert!(
        coeffs.len() >= area,
        "{} coefficients for a {tx_size:?} block",
        coeffs.len()
    );

    let mut view = BlockViewMut::new(dest, stride, tx_size.width(), tx_size.height());
    let path = params.path();
    trace!(?tx_size, ?tx_type, eob, ?path);

    let coeffs = &coeffs[..area];
    match path {
        TransformPath::Lossless | TransformPath::LosslessDc => {
            lossless::iwht_add(coeffs, &mut view, path == TransformPath::LosslessDc, bd)
        }
        TransformPath::DcOnly => dct::dc_only_add(coeffs[0], &mut view, tx_size, bd),
        TransformPath::Identity => identity::identity_add(coeffs, &mut view, tx_size, bd),
        TransformPath::Separable { rows } => {
            // Mirroring the residual left to right is the same as adding it
            // through a view with reversed columns.
            let mut view = view.with_axes(
                axis(tx_type.flips_vertically()),
                axis(tx_type.flips_horizontally()),
            );
            separable::inverse_2d_add(
                coeffs,
                &mut view,
                kernel_pair(tx_type, tx_size),
                tx_size,
                rows,
                bd,
            )
        }
    }
}

fn validate<P: Pixel>(
    coeffs_len: usize,
    dest_len: usize,
    stride: usize,
    params: &ReconParams,
) -> Result<()> {
    let ReconParams {
        tx_size,
        tx_type,
        eob,
        lossless,
        bit_depth,
    } = *params;
    let area = tx_size.area();
    if bit_depth.bits() > P::MAX_BIT_DEPTH.bits() {
        return Err(Error::SampleTypeTooNarrow(bit_depth.bits()));
    }
    if lossless && (tx_size != TxSize::Tx4x4 || tx_type != TxType::DctDct) {
        return Err(Error::LosslessRequiresDct4x4(tx_size, tx_type));
    }
    if eob > area {
        return Err(Error::EobOutOfRange { eob, max: area });
    }
    if coeffs_len < area {
        return Err(Error::CoefficientsTooShort {
            len: coeffs_len,
            needed: area,
        });
    }
    check_layout(dest_len, stride, tx_size.width(), tx_size.height())
}

/// Checked [`inverse_transform_add`]. `dest` is left untouched on error.
pub fn try_inverse_transform_add<P: Pixel>(
    coeffs: &[i32],
    dest: &mut [P],
    stride: usize,
    params: &ReconParams,
) -> Result<()> {
    if let Err(err) = validate::<P>(coeffs.len(), dest.len(), stride, params) {
        warn!(%err, ?params, "rejected block");
        return Err(err);
    }
    inverse_transform_add(coeffs, dest, stride, params);
    Ok(())
}
