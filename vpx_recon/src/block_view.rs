// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use std::fmt::Debug;

use vpx_transforms::BitDepth;

use crate::{
    error::{Error, Result},
    pixel::Pixel,
};

/// Traversal direction along one axis of a [`BlockViewMut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Forward,
    Reverse,
}

impl Axis {
    #[inline(always)]
    fn map(self, index: usize, len: usize) -> usize {
        match self {
            Axis::Forward => index,
            Axis::Reverse => len - 1 - index,
        }
    }
}

/// A `width` x `height` window into a strided sample buffer.
///
/// Logical coordinates are mapped through one [`Axis`] per dimension, so a
/// mirrored write is an ordinary write through a view with a reversed axis.
pub struct BlockViewMut<'a, P: Pixel> {
    data: &'a mut [P],
    stride: usize,
    width: usize,
    height: usize,
    rows: Axis,
    cols: Axis,
}

impl<P: Pixel> Debug for BlockViewMut<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} stride {} rows {:?} cols {:?}",
            self.width, self.height, self.stride, self.rows, self.cols
        )
    }
}

/// Number of samples a `width` x `height` block with the given stride spans,
/// or `None` if that does not fit in a `usize`.
pub const fn required_len(stride: usize, width: usize, height: usize) -> Option<usize> {
    if height == 0 {
        return Some(0);
    }
    match (height - 1).checked_mul(stride) {
        Some(span) => span.checked_add(width),
        None => None,
    }
}

/// Checks that a buffer of `len` samples holds a `width` x `height` block
/// laid out with `stride`.
pub fn check_layout(len: usize, stride: usize, width: usize, height: usize) -> Result<()> {
    if stride < width {
        return Err(Error::StrideTooSmall { stride, width });
    }
    let needed =
        required_len(stride, width, height).ok_or(Error::LayoutOverflow { stride, height })?;
    if len < needed {
        return Err(Error::BufferTooSmall { len, needed });
    }
    Ok(())
}

impl<'a, P: Pixel> BlockViewMut<'a, P> {
    /// Panics if the buffer cannot hold the block.
    pub fn new(data: &'a mut [P], stride: usize, width: usize, height: usize) -> Self {
        assert!(stride >= width, "stride {stride} < width {width}");
        assert!(
            required_len(stride, width, height).is_some_and(|needed| data.len() >= needed),
            "buffer of {} samples too small for {width}x{height} with stride {stride}",
            data.len()
        );
        BlockViewMut {
            data,
            stride,
            width,
            height,
            rows: Axis::Forward,
            cols: Axis::Forward,
        }
    }

    pub fn try_new(data: &'a mut [P], stride: usize, width: usize, height: usize) -> Result<Self> {
        check_layout(data.len(), stride, width, height)?;
        Ok(Self::new(data, stride, width, height))
    }

    pub fn with_axes(self, rows: Axis, cols: Axis) -> Self {
        BlockViewMut { rows, cols, ..self }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height && col < self.width);
        self.rows.map(row, self.height) * self.stride + self.cols.map(col, self.width)
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> P {
        self.data[self.offset(row, col)]
    }

    /// Adds `residual` to the sample at (`row`, `col`), clipping to the range
    /// of `bd`.
    #[inline(always)]
    pub fn add_residual(&mut self, row: usize, col: usize, residual: i64, bd: BitDepth) {
        let offset = self.offset(row, col);
        let sample = &mut self.data[offset];
        *sample = P::from_clipped(bd.clip_pixel_add(sample.to_i32(), residual));
    }
}
