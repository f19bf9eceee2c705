//! AES state matrix and round transformations.

use crate::block::Block;
use crate::gf::{gmul, xtime};
use crate::sbox::{inv_sbox, sbox};

/// The 4x4 cipher state, stored column-major: byte `4 * col + row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State([u8; 16]);

impl State {
    /// Loads a block; input bytes 0..4 fill column 0, and so on.
    #[inline]
    pub fn from_block(block: &Block) -> Self {
        Self(*block)
    }

    /// Serializes the state back to a block in the same column-major order.
    #[inline]
    pub fn into_block(self) -> Block {
        self.0
    }

    /// Byte at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.0[4 * col + row]
    }

    /// Applies SubBytes to every byte.
    #[inline]
    pub fn sub_bytes(&mut self) {
        for byte in self.0.iter_mut() {
            *byte = sbox(*byte);
        }
    }

    /// Applies the inverse SubBytes transformation.
    #[inline]
    pub fn inv_sub_bytes(&mut self) {
        for byte in self.0.iter_mut() {
            *byte = inv_sbox(*byte);
        }
    }

    /// Rotates row `r` left by `r` positions.
    pub fn shift_rows(&mut self) {
        let old = self.0;
        for col in 0..4 {
            for row in 1..4 {
                self.0[4 * col + row] = old[4 * ((col + row) % 4) + row];
            }
        }
    }

    /// Rotates row `r` right by `r` positions.
    pub fn inv_shift_rows(&mut self) {
        let old = self.0;
        for col in 0..4 {
            for row in 1..4 {
                self.0[4 * ((col + row) % 4) + row] = old[4 * col + row];
            }
        }
    }

    /// MixColumns over all four columns.
    pub fn mix_columns(&mut self) {
        for column in self.0.chunks_exact_mut(4) {
            let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
            column[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
            column[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
            column[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
            column[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
        }
    }

    /// Inverse MixColumns over all four columns.
    pub fn inv_mix_columns(&mut self) {
        for column in self.0.chunks_exact_mut(4) {
            let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
            column[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
            column[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
            column[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
            column[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
        }
    }

    /// Adds (XORs) a round key into the state.
    #[inline]
    pub fn add_round_key(&mut self, round_key: &Block) {
        for (byte, k) in self.0.iter_mut().zip(round_key) {
            *byte ^= k;
        }
    }
}
