// Copyright (c) the JPEG XL Project Authors. All rights reserved.
//
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

use num_derive::FromPrimitive;

/// Largest number of coefficients in a block.
pub const MAX_COEFFS: usize = 32 * 32;

/// Coefficient tokens, in bitstream order.
#[derive(Debug, FromPrimitive, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Cat1 = 5,
    Cat2 = 6,
    Cat3 = 7,
    Cat4 = 8,
    Cat5 = 9,
    Cat6 = 10,
    EndOfBlock = 11,
}

pub const NUM_TOKENS: usize = 12;

/// Coarse magnitude class of each token.
pub const ENERGY_CLASS: [u8; NUM_TOKENS] = [0, 1, 2, 3, 3, 4, 4, 5, 5, 5, 5, 5];

impl Token {
    pub const fn energy_class(self) -> u8 {
        ENERGY_CLASS[self as usize]
    }
}

/// Energy classes of the coefficients decoded so far in the current block,
/// indexed by scan position.
#[derive(Clone)]
pub struct TokenCache {
    classes: [u8; MAX_COEFFS],
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenCache")
    }
}

impl TokenCache {
    pub const fn new() -> TokenCache {
        TokenCache {
            classes: [0; MAX_COEFFS],
        }
    }

    #[inline]
    pub fn record(&mut self, pos: usize, token: Token) {
        self.classes[pos] = token.energy_class();
    }

    #[inline]
    pub fn get(&self, pos: usize) -> u8 {
        self.classes[pos]
    }

    pub fn clear(&mut self) {
        self.classes.fill(0);
    }
}
