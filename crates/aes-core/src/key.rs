//! Key types for AES-128.

use core::fmt;
use core::ops::Index;

use crate::block::{Block, BLOCK_LEN};
use crate::encoding::decode_16;
use crate::error::{Error, Result};

/// Number of round keys produced by the AES-128 key schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl Aes128Key {
    /// Parses a key from 32 hex characters (case-insensitive).
    pub fn from_hex(text: &str) -> Result<Self> {
        decode_16(text, "key").map(Self)
    }

    /// Lowercase hex rendering of the key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        value.try_into().map(Self).map_err(|_| Error::InvalidLength {
            what: "key",
            expected: BLOCK_LEN,
            actual: value.len(),
        })
    }
}

// Keys stay out of logs and panic messages.
impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUND_KEY_COUNT]);

/// Indexed by round number, `0..=10`.
impl Index<usize> for RoundKeys {
    type Output = Block;

    #[inline]
    fn index(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl RoundKeys {
    /// Iterates over the round keys in round order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.0.iter()
    }
}
